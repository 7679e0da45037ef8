mod directory;
mod filter;
mod gitignore;
pub mod patterns;
mod types;

pub use directory::DirectoryScanner;
pub use filter::{DIR_PROBE, FileFilter, PatternFilter};
pub use gitignore::{IGNORE_FILE_NAME, IgnoreRules};
pub use types::FileJob;

use std::path::Path;

use crate::error::Result;

/// Trait for scanning directories and finding candidate files.
pub trait FileScanner {
    /// Scan a directory and return a job for every file that passes the filter.
    ///
    /// The order of the returned jobs is not meaningful.
    ///
    /// # Errors
    /// Returns an error if the root directory cannot be listed. Errors on
    /// individual entries below the root are skipped.
    fn scan(&self, root: &Path) -> Result<Vec<FileJob>>;
}
