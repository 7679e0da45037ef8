use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use super::reader::{BINARY_PROBE_LEN, FileReader, is_binary};
use super::types::{CollectOptions, FileRecord};
use crate::language::LanguageRegistry;
use crate::scanner::FileJob;

/// Why a readable file was left out (not an error).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Binary,
    TooLarge { size: u64 },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary => write!(f, "binary content"),
            Self::TooLarge { size } => write!(f, "too large ({size} bytes)"),
        }
    }
}

/// A per-file failure. Absorbed by the worker; the file is dropped.
#[derive(Debug, Error)]
pub enum FileReadError {
    #[error("failed to probe '{}': {source}", path.display())]
    Probe { path: PathBuf, source: io::Error },

    #[error("failed to read metadata for '{}': {source}", path.display())]
    Metadata { path: PathBuf, source: io::Error },

    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
}

/// Result of attempting to process a single file.
#[derive(Debug)]
pub enum FileOutcome {
    Read(FileRecord),
    Skipped(SkipReason),
    Failed(FileReadError),
}

/// Classify and read one job: binary probe, size check, then full read.
pub fn process_job(
    job: &FileJob,
    reader: &dyn FileReader,
    registry: &LanguageRegistry,
    options: &CollectOptions,
) -> FileOutcome {
    let path = &job.absolute_path;

    let head = match reader.read_head(path, BINARY_PROBE_LEN) {
        Ok(head) => head,
        Err(source) => {
            return FileOutcome::Failed(FileReadError::Probe {
                path: path.clone(),
                source,
            });
        }
    };
    if is_binary(&head) {
        return FileOutcome::Skipped(SkipReason::Binary);
    }

    let size = match reader.size(path) {
        Ok(size) => size,
        Err(source) => {
            return FileOutcome::Failed(FileReadError::Metadata {
                path: path.clone(),
                source,
            });
        }
    };
    if options.exceeds_file_limit(size) {
        return FileOutcome::Skipped(SkipReason::TooLarge { size });
    }

    let bytes = match reader.read(path) {
        Ok(bytes) => bytes,
        Err(source) => {
            return FileOutcome::Failed(FileReadError::Read {
                path: path.clone(),
                source,
            });
        }
    };

    FileOutcome::Read(FileRecord {
        language: registry.tag_for(&job.relative_path).to_string(),
        size: bytes.len() as u64,
        content: decode(bytes),
        relative_path: job.relative_path.clone(),
    })
}

/// Non-UTF-8 sequences are replaced rather than failing the file.
fn decode(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap_or_else(|e| {
        debug!("file is not valid UTF-8; replacing invalid sequences");
        String::from_utf8_lossy(e.as_bytes()).into_owned()
    })
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod tests;
