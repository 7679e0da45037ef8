use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{BcopyError, Result};

use super::Config;

pub const LOCAL_CONFIG_NAME: &str = ".bcopy.toml";
pub const USER_CONFIG_NAME: &str = "config.toml";

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    /// Returns an error if a discovered config file cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

/// Where the loader looks for config files and how it reads them.
pub trait ConfigSource {
    /// Contents of `path`, or `None` when there is no such file.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read.
    fn read(&self, path: &Path) -> io::Result<Option<String>>;

    /// Directory searched for `.bcopy.toml`.
    fn working_dir(&self) -> Option<PathBuf>;

    /// Per-user directory searched for `config.toml`.
    fn user_dir(&self) -> Option<PathBuf>;
}

/// Reads config files from disk; the user directory comes from `directories`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskSource;

impl ConfigSource for DiskSource {
    fn read(&self, path: &Path) -> io::Result<Option<String>> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn working_dir(&self) -> Option<PathBuf> {
        std::env::current_dir().ok()
    }

    fn user_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "bcopy").map(|dirs| dirs.config_dir().to_path_buf())
    }
}

/// Search order:
/// 1. `.bcopy.toml` in the working directory
/// 2. `config.toml` in the platform config directory
/// 3. `Config::default()`
#[derive(Debug)]
pub struct FileConfigLoader<S: ConfigSource = DiskSource> {
    source: S,
}

impl Default for FileConfigLoader<DiskSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<DiskSource> {
    #[must_use]
    pub const fn new() -> Self {
        Self { source: DiskSource }
    }
}

impl<S: ConfigSource> FileConfigLoader<S> {
    #[must_use]
    pub const fn with_source(source: S) -> Self {
        Self { source }
    }

    fn candidates(&self) -> impl Iterator<Item = PathBuf> {
        let local = self.source.working_dir().map(|dir| dir.join(LOCAL_CONFIG_NAME));
        let user = self.source.user_dir().map(|dir| dir.join(USER_CONFIG_NAME));
        local.into_iter().chain(user)
    }

    fn read(&self, path: &Path) -> Result<Option<String>> {
        self.source
            .read(path)
            .map_err(|source| BcopyError::FileAccess {
                path: path.to_path_buf(),
                source,
            })
    }

    fn parse_config(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl<S: ConfigSource> ConfigLoader for FileConfigLoader<S> {
    fn load(&self) -> Result<Config> {
        for path in self.candidates() {
            if let Some(content) = self.read(&path)? {
                debug!(path = %path.display(), "loading config");
                return Self::parse_config(&content);
            }
        }

        debug!("no config file found; using defaults");
        Ok(Config::default())
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        let content = self.read(path)?.ok_or_else(|| BcopyError::FileAccess {
            path: path.to_path_buf(),
            source: io::Error::from(ErrorKind::NotFound),
        })?;

        Self::parse_config(&content)
    }
}

#[cfg(test)]
#[path = "loader_tests/mod.rs"]
mod tests;
