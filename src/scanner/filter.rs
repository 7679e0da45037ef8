use std::path::Path;

use indexmap::IndexSet;
use regex::Regex;
use tracing::warn;

use super::gitignore::IgnoreRules;
use super::patterns::{BASELINE_EXCLUDES, DEFAULT_EXTENSIONS, PROJECT_FILE_NAMES, TEST_EXCLUDES};
use crate::path_utils::{dotted_extension, file_name, to_slash};

/// Synthetic child used to ask whether anything inside a directory could be kept.
pub const DIR_PROBE: &str = "__bcopy_probe__";

pub trait FileFilter {
    /// Decide whether a file, given relative to the scan root, is collected.
    fn should_include(&self, path: &Path) -> bool;

    /// Decide whether a directory is worth descending into.
    fn should_descend(&self, dir: &Path) -> bool {
        self.should_include(&dir.join(DIR_PROBE))
    }
}

impl<F: FileFilter + ?Sized> FileFilter for &F {
    fn should_include(&self, path: &Path) -> bool {
        (**self).should_include(path)
    }

    fn should_descend(&self, dir: &Path) -> bool {
        (**self).should_descend(dir)
    }
}

/// Layered filter: exclusion regexes, ignore-file globs, then the extension allow-list.
///
/// Built once and shared read-only by every scanner and collector thread.
#[derive(Debug, Clone)]
pub struct PatternFilter {
    extensions: IndexSet<String>,
    exclude_patterns: Vec<Regex>,
    ignore_rules: Option<IgnoreRules>,
    honor_ignore_file: bool,
    exclude_tests: bool,
}

impl PatternFilter {
    /// Create a filter.
    ///
    /// An empty `extensions` list selects the built-in allow-list. Custom
    /// exclusion patterns are appended after the baseline (and test) patterns;
    /// any that fail to compile are dropped.
    #[must_use]
    pub fn new(
        extensions: &[String],
        custom_excludes: &[String],
        honor_ignore_file: bool,
        exclude_tests: bool,
    ) -> Self {
        let extensions = if extensions.is_empty() {
            DEFAULT_EXTENSIONS.iter().map(|ext| (*ext).to_string()).collect()
        } else {
            extensions.iter().map(|ext| normalize_extension(ext)).collect()
        };

        let tests: &[&str] = if exclude_tests { TEST_EXCLUDES } else { &[] };
        let exclude_patterns = BASELINE_EXCLUDES
            .iter()
            .chain(tests)
            .copied()
            .chain(custom_excludes.iter().map(String::as_str))
            .filter_map(compile_pattern)
            .collect();

        Self {
            extensions,
            exclude_patterns,
            ignore_rules: None,
            honor_ignore_file,
            exclude_tests,
        }
    }

    /// Attach ignore-file rules. They are kept only when ignore handling is on.
    #[must_use]
    pub fn with_ignore_rules(mut self, rules: IgnoreRules) -> Self {
        if self.honor_ignore_file {
            self.ignore_rules = Some(rules);
        }
        self
    }

    /// Load `.gitignore` from `repo_root`, scoped to a scan root inside it.
    ///
    /// A missing or unreadable ignore file leaves the filter unchanged.
    #[must_use]
    pub fn load_ignore_file(self, repo_root: &Path, scan_root: &Path) -> Self {
        if !self.honor_ignore_file {
            return self;
        }
        let Some(rules) = IgnoreRules::load(repo_root) else {
            return self;
        };
        let prefix = scan_root.strip_prefix(repo_root).unwrap_or(Path::new(""));
        self.with_ignore_rules(rules.scoped(prefix))
    }

    #[must_use]
    pub const fn honors_ignore_file(&self) -> bool {
        self.honor_ignore_file
    }

    #[must_use]
    pub const fn excludes_tests(&self) -> bool {
        self.exclude_tests
    }

    #[must_use]
    pub const fn extensions(&self) -> &IndexSet<String> {
        &self.extensions
    }

    #[must_use]
    pub fn exclude_pattern_count(&self) -> usize {
        self.exclude_patterns.len()
    }

    #[must_use]
    pub fn ignore_rules(&self) -> Option<&IgnoreRules> {
        self.ignore_rules.as_ref()
    }

    fn is_excluded(&self, path: &str) -> bool {
        self.exclude_patterns.iter().any(|re| re.is_match(path))
    }

    fn is_ignored(&self, path: &str) -> bool {
        self.ignore_rules
            .as_ref()
            .is_some_and(|rules| rules.is_match(path))
    }

    fn has_allowed_name(&self, path: &str) -> bool {
        let name = file_name(path);
        dotted_extension(name).map_or_else(
            || PROJECT_FILE_NAMES.contains(&name),
            |ext| self.extensions.contains(ext),
        )
    }
}

impl FileFilter for PatternFilter {
    fn should_include(&self, path: &Path) -> bool {
        let path = to_slash(path);
        !self.is_excluded(&path) && !self.is_ignored(&path) && self.has_allowed_name(&path)
    }

    // Only the exclusion stages apply to directories: the probe name must not
    // trip the extension allow-list.
    fn should_descend(&self, dir: &Path) -> bool {
        let dir = to_slash(dir);
        let probe = format!("{dir}/{DIR_PROBE}");
        !self.is_excluded(&probe) && !self.is_ignored(&probe) && !self.is_ignored(&dir)
    }
}

fn normalize_extension(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{ext}")
    }
}

fn compile_pattern(pattern: &str) -> Option<Regex> {
    Regex::new(pattern)
        .map_err(|e| warn!(pattern, error = %e, "dropping invalid exclusion pattern"))
        .ok()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
