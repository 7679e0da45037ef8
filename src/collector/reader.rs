use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

/// Bytes inspected when deciding whether a file is binary.
pub const BINARY_PROBE_LEN: usize = 8192;

/// Trait for file reading operations (enables testing with mock implementations).
pub trait FileReader: Send + Sync {
    /// Read at most `limit` bytes from the start of a file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or read.
    fn read_head(&self, path: &Path, limit: usize) -> io::Result<Vec<u8>>;

    /// Size of the file in bytes.
    ///
    /// # Errors
    /// Returns an error if metadata cannot be retrieved.
    fn size(&self, path: &Path) -> io::Result<u64>;

    /// Read the whole file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Real filesystem implementation of `FileReader`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileReader;

impl FileReader for RealFileReader {
    fn read_head(&self, path: &Path, limit: usize) -> io::Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(limit);
        File::open(path)?
            .take(limit as u64)
            .read_to_end(&mut buf)?;
        Ok(buf)
    }

    fn size(&self, path: &Path) -> io::Result<u64> {
        Ok(fs::metadata(path)?.len())
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}

/// A NUL byte anywhere in the probed head marks the file as binary.
#[must_use]
pub fn is_binary(head: &[u8]) -> bool {
    head.contains(&0)
}
