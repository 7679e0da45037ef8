use std::collections::{HashMap, HashSet};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use crate::config::ConfigSource;

/// In-memory config files with a fixed working and user directory.
pub struct MockSource {
    files: HashMap<PathBuf, String>,
    unreadable: HashSet<PathBuf>,
    working_dir: Option<PathBuf>,
    user_dir: Option<PathBuf>,
}

impl MockSource {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
            unreadable: HashSet::new(),
            working_dir: Some(PathBuf::from("/project")),
            user_dir: Some(PathBuf::from("/home/user/.config/bcopy")),
        }
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }

    /// A file that exists but fails to read.
    pub fn with_unreadable(mut self, path: impl Into<PathBuf>) -> Self {
        self.unreadable.insert(path.into());
        self
    }

    pub fn with_working_dir(mut self, path: Option<PathBuf>) -> Self {
        self.working_dir = path;
        self
    }

    pub fn with_user_dir(mut self, path: Option<PathBuf>) -> Self {
        self.user_dir = path;
        self
    }
}

impl ConfigSource for MockSource {
    fn read(&self, path: &Path) -> io::Result<Option<String>> {
        if self.unreadable.contains(path) {
            return Err(io::Error::from(ErrorKind::PermissionDenied));
        }
        Ok(self.files.get(path).cloned())
    }

    fn working_dir(&self) -> Option<PathBuf> {
        self.working_dir.clone()
    }

    fn user_dir(&self) -> Option<PathBuf> {
        self.user_dir.clone()
    }
}
