use std::path::{Path, PathBuf};

use crate::path_utils::to_slash;

/// A discovered candidate file awaiting classification and reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileJob {
    /// Path used to open the file.
    pub absolute_path: PathBuf,
    /// Path relative to the scan root, `/`-separated.
    pub relative_path: String,
}

impl FileJob {
    #[must_use]
    pub fn new(absolute_path: PathBuf, relative_path: &Path) -> Self {
        Self {
            absolute_path,
            relative_path: to_slash(relative_path),
        }
    }
}
