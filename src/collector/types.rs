use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Hard ceiling on parallel file reads.
pub const MAX_CONCURRENCY: usize = 16;

pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// A file that was read and kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    #[serde(rename = "path")]
    pub relative_path: String,
    pub language: String,
    pub size: u64,
    pub content: String,
}

impl FileRecord {
    #[must_use]
    pub fn new(relative_path: &str, content: &str, language: &str) -> Self {
        Self {
            relative_path: relative_path.to_string(),
            size: content.len() as u64,
            content: content.to_string(),
            language: language.to_string(),
        }
    }
}

/// Records sorted by relative path, with no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionResult {
    pub files: Vec<FileRecord>,
    pub total_size: u64,
    pub file_count: usize,
}

impl CollectionResult {
    /// Sort, drop repeated paths and compute totals.
    #[must_use]
    pub fn from_records(mut files: Vec<FileRecord>) -> Self {
        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        files.dedup_by(|later, earlier| later.relative_path == earlier.relative_path);

        let total_size = files.iter().map(|f| f.size).sum();
        let file_count = files.len();
        Self {
            files,
            total_size,
            file_count,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.file_count == 0
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn total_size_mb(&self) -> f64 {
        self.total_size as f64 / BYTES_PER_MB
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollectOptions {
    /// Zero means unlimited.
    pub max_depth: usize,
    /// Zero or negative means unlimited.
    pub max_file_size_mb: f64,
    /// Clamped to `1..=MAX_CONCURRENCY`.
    pub concurrency: usize,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            max_depth: 0,
            max_file_size_mb: 10.0,
            concurrency: MAX_CONCURRENCY,
        }
    }
}

impl CollectOptions {
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub const fn with_max_file_size_mb(mut self, max_file_size_mb: f64) -> Self {
        self.max_file_size_mb = max_file_size_mb;
        self
    }

    #[must_use]
    pub const fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Number of workers for a batch of `jobs` files.
    #[must_use]
    pub fn worker_count(&self, jobs: usize) -> usize {
        self.concurrency
            .clamp(1, MAX_CONCURRENCY)
            .min(jobs.max(1))
    }

    /// Whether a file of `size` bytes is over the per-file limit.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn exceeds_file_limit(&self, size: u64) -> bool {
        self.max_file_size_mb > 0.0 && size as f64 / BYTES_PER_MB > self.max_file_size_mb
    }
}

/// Counters updated while a collection runs; safe to poll from another thread.
#[derive(Debug, Clone, Default)]
pub struct CollectProgress {
    discovered: Arc<AtomicU64>,
    processed: Arc<AtomicU64>,
    collected: Arc<AtomicU64>,
    skipped: Arc<AtomicU64>,
}

impl CollectProgress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set_discovered(&self, count: usize) {
        self.discovered.store(count as u64, Ordering::Relaxed);
    }

    pub(crate) fn record_collected(&self) {
        self.collected.fetch_add(1, Ordering::Relaxed);
        self.processed.fetch_add(1, Ordering::Relaxed);
    }

    /// Binary, oversized and unreadable files all count as skipped.
    pub(crate) fn record_skipped(&self) {
        self.skipped.fetch_add(1, Ordering::Relaxed);
        self.processed.fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn discovered(&self) -> u64 {
        self.discovered.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn processed(&self) -> u64 {
        self.processed.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn collected(&self) -> u64 {
        self.collected.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn skipped(&self) -> u64 {
        self.skipped.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
