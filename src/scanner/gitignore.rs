use std::path::Path;

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use tracing::{debug, warn};

use crate::path_utils::to_slash;

pub const IGNORE_FILE_NAME: &str = ".gitignore";

/// Compiled ignore-file globs anchored at a repository root.
///
/// Supported syntax is a subset of gitignore: blank lines and `#` comments are
/// skipped, a trailing `/` covers everything beneath a directory, a leading `/`
/// anchors at the root and every other pattern matches at any depth.
///
/// Negation (`!pattern`) is not supported. Such lines are dropped, so a file
/// re-included by a negation stays excluded.
#[derive(Debug, Clone, Default)]
pub struct IgnoreRules {
    globs: GlobSet,
    patterns: Vec<String>,
    scope: Option<String>,
}

impl IgnoreRules {
    /// Parse ignore-file content. Patterns that fail to compile are dropped.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut builder = GlobSetBuilder::new();
        let mut patterns = Vec::new();

        for line in content.lines() {
            let Some(pattern) = translate_line(line) else {
                continue;
            };
            match GlobBuilder::new(&pattern).literal_separator(true).build() {
                Ok(glob) => {
                    builder.add(glob);
                    patterns.push(pattern);
                }
                Err(e) => warn!(pattern = %pattern, error = %e, "dropping invalid ignore pattern"),
            }
        }

        let globs = builder.build().unwrap_or_else(|e| {
            warn!(error = %e, "failed to combine ignore patterns; ignoring all of them");
            patterns.clear();
            GlobSet::empty()
        });

        Self {
            globs,
            patterns,
            scope: None,
        }
    }

    /// Load `.gitignore` from a repository root.
    ///
    /// Returns `None` when the file is missing or unreadable.
    #[must_use]
    pub fn load(repo_root: &Path) -> Option<Self> {
        let path = repo_root.join(IGNORE_FILE_NAME);
        match std::fs::read_to_string(&path) {
            Ok(content) => Some(Self::parse(&content)),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "no ignore file loaded");
                None
            }
        }
    }

    /// Match paths relative to a directory below the repository root.
    ///
    /// `prefix` is that directory's location inside the repository; an empty
    /// prefix means paths are already repository-relative.
    #[must_use]
    pub fn scoped(mut self, prefix: &Path) -> Self {
        let prefix = to_slash(prefix);
        let prefix = prefix.trim_matches('/');
        self.scope = (!prefix.is_empty()).then(|| prefix.to_string());
        self
    }

    /// Test a `/`-separated path relative to the scan root.
    #[must_use]
    pub fn is_match(&self, relative: &str) -> bool {
        match &self.scope {
            Some(scope) => self.globs.is_match(format!("{scope}/{relative}")),
            None => self.globs.is_match(relative),
        }
    }

    /// Translated glob patterns, in file order.
    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

fn translate_line(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
        return None;
    }

    let mut pattern = line.to_string();
    if pattern.ends_with('/') {
        pattern.push_str("**");
    }

    match pattern.strip_prefix('/') {
        Some(rooted) => Some(rooted.to_string()),
        None => Some(format!("**/{pattern}")),
    }
}

#[cfg(test)]
#[path = "gitignore_tests.rs"]
mod tests;
