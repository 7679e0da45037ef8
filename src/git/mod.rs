//! Repository discovery used to locate the ignore file for a scan root.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Working tree root of the repository enclosing `path`, searching upwards.
///
/// Returns `None` for paths outside any repository and for bare repositories.
/// The returned path is canonical.
#[must_use]
pub fn find_repo_root(path: &Path) -> Option<PathBuf> {
    let repo = gix::discover(path)
        .map_err(|e| debug!(path = %path.display(), error = %e, "no git repository found"))
        .ok()?;
    let workdir = repo.workdir()?;
    dunce::canonicalize(workdir).ok()
}

#[must_use]
pub fn is_git_repo(path: &Path) -> bool {
    find_repo_root(path).is_some()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
