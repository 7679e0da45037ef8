use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{BcopyError, Result};

const fn default_true() -> bool {
    true
}

const fn default_max_file_size_mb() -> f64 {
    10.0
}

const fn default_threshold_mb() -> f64 {
    1.0
}

const fn default_hard_max_mb() -> f64 {
    50.0
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub limits: LimitsConfig,

    /// Extra or overriding fence tags, keyed by tag.
    #[serde(default)]
    pub languages: HashMap<String, CustomLanguageConfig>,
}

impl Config {
    /// Reject limits that cannot be compared against a size.
    ///
    /// # Errors
    /// Returns `Config` if a limit is negative or not a number.
    pub fn validate(&self) -> Result<()> {
        let limits = [
            ("limits.threshold_mb", self.limits.threshold_mb),
            ("limits.hard_max_mb", self.limits.hard_max_mb),
        ];
        for (name, value) in limits {
            if value.is_nan() || value < 0.0 {
                return Err(BcopyError::Config(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        if self.limits.max_file_size_mb.is_nan() {
            return Err(BcopyError::Config(
                "limits.max_file_size_mb must be a number".to_string(),
            ));
        }
        Ok(())
    }
}

/// File discovery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Respect the repository's .gitignore (default: true).
    #[serde(default = "default_true")]
    pub gitignore: bool,

    #[serde(default)]
    pub exclude_tests: bool,

    /// Regex patterns appended to the built-in exclusions.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Extension allow-list; empty selects the built-in list.
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Zero means unlimited.
    #[serde(default)]
    pub max_depth: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            gitignore: true,
            exclude_tests: false,
            exclude: Vec::new(),
            extensions: Vec::new(),
            max_depth: 0,
        }
    }
}

/// Size limits, all in megabytes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LimitsConfig {
    /// Per-file limit; zero or negative disables it.
    #[serde(default = "default_max_file_size_mb")]
    pub max_file_size_mb: f64,

    /// Total size above which a warning is printed.
    #[serde(default = "default_threshold_mb")]
    pub threshold_mb: f64,

    /// Total size above which the run aborts.
    #[serde(default = "default_hard_max_mb")]
    pub hard_max_mb: f64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: default_max_file_size_mb(),
            threshold_mb: default_threshold_mb(),
            hard_max_mb: default_hard_max_mb(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomLanguageConfig {
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Exact names of extensionless files.
    #[serde(default)]
    pub file_names: Vec<String>,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
