use std::path::{Component, Path, PathBuf};

use crate::error::{BcopyError, Result, UnsafeReason};

/// Package, library and system roots that are never a sensible snapshot target.
const SYSTEM_DIRECTORIES: &[&str] = &[
    "usr",
    "etc",
    "var",
    "bin",
    "sbin",
    "boot",
    "sys",
    "proc",
    "dev",
    "System",
    "Library",
    "Applications",
    "Volumes",
    "private",
    "opt",
    "root",
    "tmp",
    "Windows",
    "Program Files",
    "Program Files (x86)",
];

/// Paths this many components deep (or shallower) are checked for being too broad.
pub const DEFAULT_BROAD_DEPTH: usize = 2;

/// Refuses root paths that would sweep up far more than a project.
#[derive(Debug, Clone)]
pub struct PathGuard {
    home: Option<PathBuf>,
    broad_depth: usize,
}

impl Default for PathGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl PathGuard {
    /// Guard using the current user's home directory.
    #[must_use]
    pub fn new() -> Self {
        let home = directories::BaseDirs::new().map(|dirs| clean_path(dirs.home_dir()));
        Self::with_home(home)
    }

    #[must_use]
    pub const fn with_home(home: Option<PathBuf>) -> Self {
        Self {
            home,
            broad_depth: DEFAULT_BROAD_DEPTH,
        }
    }

    #[must_use]
    pub const fn with_broad_depth(mut self, depth: usize) -> Self {
        self.broad_depth = depth;
        self
    }

    /// Validate a root path, returning its absolute cleaned form.
    ///
    /// # Errors
    /// Returns `BcopyError::UnsafeLocation` if the path is the filesystem root, the
    /// home directory, a system directory or a too-broad shallow directory, and
    /// `BcopyError::Io` if the path cannot be made absolute.
    pub fn validate(&self, path: &Path) -> Result<PathBuf> {
        let clean = absolute_clean(path)?;

        if let Some(reason) = self.check(&clean) {
            return Err(BcopyError::UnsafeLocation {
                path: clean,
                reason,
            });
        }

        Ok(clean)
    }

    fn check(&self, clean: &Path) -> Option<UnsafeReason> {
        let Some(parent) = clean.parent() else {
            return Some(UnsafeReason::FilesystemRoot);
        };

        if self.home.as_deref() == Some(clean) {
            return Some(UnsafeReason::HomeDirectory);
        }

        let rooted = without_root(clean);
        if SYSTEM_DIRECTORIES.iter().any(|dir| rooted == Path::new(dir)) {
            return Some(UnsafeReason::SystemDirectory);
        }

        if rooted.components().count() <= self.broad_depth {
            let parent_is_root = parent.parent().is_none();
            let beside_home = self
                .home
                .as_deref()
                .and_then(Path::parent)
                .is_some_and(|home_parent| home_parent == parent);
            if parent_is_root || beside_home {
                return Some(UnsafeReason::TooBroad);
            }
        }

        None
    }

    /// Advisory, non-fatal: a directory directly under home is probably large.
    #[must_use]
    pub fn large_directory_warning(&self, path: &Path) -> Option<String> {
        let home = self.home.as_deref()?;
        let clean = absolute_clean(path).ok()?;
        let relative = clean.strip_prefix(home).ok()?;

        if relative.components().count() != 1 {
            return None;
        }

        let name = clean.file_name()?.to_string_lossy();
        Some(format!(
            "Analyzing a top-level directory in your home folder ({name}). This may take a while."
        ))
    }
}

/// Make a path absolute and resolve `.` and `..` lexically, without touching symlinks.
///
/// # Errors
/// Returns an error if the current directory is needed and cannot be read.
pub fn absolute_clean(path: &Path) -> std::io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    Ok(clean_path(&absolute))
}

fn clean_path(path: &Path) -> PathBuf {
    let mut clean = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                clean.pop();
            }
            other => clean.push(other),
        }
    }
    clean
}

fn without_root(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .collect()
}

#[cfg(test)]
#[path = "guard_tests.rs"]
mod tests;
