use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use super::{FileFilter, FileJob, FileScanner};
use crate::error::{BcopyError, Result};

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    max_depth: usize,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self {
            filter,
            max_depth: 0,
        }
    }

    /// Limit traversal depth; files directly in the root are depth 1.
    /// Zero means unlimited.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub const fn filter(&self) -> &F {
        &self.filter
    }

    fn scan_impl(&self, root: &Path) -> Vec<FileJob> {
        let mut visited = HashSet::new();
        if let Ok(real_root) = dunce::canonicalize(root) {
            visited.insert(real_root);
        }

        let mut walker = WalkDir::new(root).follow_links(true).sort_by_file_name();
        if self.max_depth > 0 {
            walker = walker.max_depth(self.max_depth);
        }

        let mut jobs = Vec::new();
        let entries = walker
            .into_iter()
            .filter_entry(|entry| self.admit_entry(root, entry, &mut visited));

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(root) else {
                continue;
            };

            if self.filter.should_include(relative) {
                let relative = relative.to_path_buf();
                jobs.push(FileJob::new(entry.into_path(), &relative));
            }
        }

        jobs
    }

    /// Decide whether walkdir should yield (and, for directories, descend into) an entry.
    ///
    /// Every admitted directory is recorded by its real path, so a directory
    /// reachable through several symlinks is visited at most once and symlink
    /// cycles terminate.
    fn admit_entry(&self, root: &Path, entry: &DirEntry, visited: &mut HashSet<PathBuf>) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }

        let Ok(relative) = entry.path().strip_prefix(root) else {
            return false;
        };

        if !self.filter.should_descend(relative) {
            debug!(dir = %relative.display(), "pruned directory");
            return false;
        }

        let Ok(real) = dunce::canonicalize(entry.path()) else {
            return false;
        };

        if !visited.insert(real) {
            debug!(dir = %relative.display(), "directory already visited");
            return false;
        }

        true
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<FileJob>> {
        std::fs::read_dir(root).map_err(|source| BcopyError::WalkRoot {
            path: root.to_path_buf(),
            source,
        })?;

        let jobs = self.scan_impl(root);
        debug!(root = %root.display(), jobs = jobs.len(), "scan complete");
        Ok(jobs)
    }
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
