use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Why a root path was refused by the path guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsafeReason {
    /// The filesystem root itself.
    FilesystemRoot,
    /// The user's home directory exactly.
    HomeDirectory,
    /// A well-known system or package directory.
    SystemDirectory,
    /// A shallow directory that would pull in far too much.
    TooBroad,
}

impl fmt::Display for UnsafeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FilesystemRoot => write!(f, "this could scan your entire system"),
            Self::HomeDirectory => {
                write!(f, "this is your home directory, run in a specific project")
            }
            Self::SystemDirectory => write!(f, "this is a protected system location"),
            Self::TooBroad => write!(
                f,
                "this directory is too broad, run in a specific project directory"
            ),
        }
    }
}

#[derive(Error, Debug)]
pub enum BcopyError {
    #[error("Refusing to run in {}: {reason}", path.display())]
    UnsafeLocation { path: PathBuf, reason: UnsafeReason },

    #[error("Failed to list root directory: {}", path.display())]
    WalkRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Collection canceled")]
    Canceled,

    #[error("Failed to start worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read {}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BcopyError {
    /// Short, stable category name for this error.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::UnsafeLocation { .. } => "UnsafeLocation",
            Self::WalkRoot { .. } => "WalkRoot",
            Self::Canceled => "Canceled",
            Self::WorkerPool(_) => "WorkerPool",
            Self::Config(_) | Self::FileAccess { .. } | Self::TomlParse(_) => "Config",
            Self::JsonSerialize(_) => "Serialize",
            Self::WriteOutput { .. } | Self::Io(_) => "IO",
        }
    }

    /// Returns true when the batch was torn down by cancellation.
    #[must_use]
    pub const fn is_canceled(&self) -> bool {
        matches!(self, Self::Canceled)
    }
}

pub type Result<T> = std::result::Result<T, BcopyError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
