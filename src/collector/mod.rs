//! Bounded-parallel reading of scanned files into an ordered result.
//!
//! Jobs are pushed into a pre-filled queue that a fixed set of workers drain.
//! Each worker classifies and reads its file and hands the record to a
//! bounded channel; the calling thread is the only consumer and owns the
//! growing result. Cancellation stops workers from claiming new jobs and
//! discards everything collected so far.

mod reader;
mod types;
mod worker;

pub use reader::{BINARY_PROBE_LEN, FileReader, RealFileReader, is_binary};
pub use types::{
    BYTES_PER_MB, CollectOptions, CollectProgress, CollectionResult, FileRecord, MAX_CONCURRENCY,
};
pub use worker::{FileOutcome, FileReadError, SkipReason, process_job};

use std::path::Path;

use crossbeam_channel::{Receiver, Sender, bounded, unbounded};
use tracing::{debug, info};

use crate::cancel::CancellationToken;
use crate::error::{BcopyError, Result};
use crate::language::LanguageRegistry;
use crate::scanner::{DirectoryScanner, FileFilter, FileJob, FileScanner};

/// Records buffered per worker before workers block on the aggregator.
const RECORDS_PER_WORKER: usize = 4;

pub struct Collector<'a> {
    registry: &'a LanguageRegistry,
    options: CollectOptions,
    reader: Box<dyn FileReader + 'a>,
    progress: CollectProgress,
}

impl<'a> Collector<'a> {
    #[must_use]
    pub fn new(registry: &'a LanguageRegistry, options: CollectOptions) -> Self {
        Self {
            registry,
            options,
            reader: Box::new(RealFileReader),
            progress: CollectProgress::new(),
        }
    }

    #[must_use]
    pub fn with_reader(mut self, reader: impl FileReader + 'a) -> Self {
        self.reader = Box::new(reader);
        self
    }

    /// Share counters with an observer, e.g. a progress bar.
    #[must_use]
    pub fn with_progress(mut self, progress: CollectProgress) -> Self {
        self.progress = progress;
        self
    }

    #[must_use]
    pub const fn options(&self) -> &CollectOptions {
        &self.options
    }

    /// Walk `root` and collect every file that passes `filter`.
    ///
    /// # Errors
    /// Returns `WalkRoot` if the root cannot be listed, `Canceled` if `cancel`
    /// fires before the batch completes, or `WorkerPool` if threads cannot be
    /// started. Per-file failures are never errors.
    pub fn collect<F: FileFilter>(
        &self,
        root: &Path,
        filter: &F,
        cancel: &CancellationToken,
    ) -> Result<CollectionResult> {
        if cancel.is_canceled() {
            return Err(BcopyError::Canceled);
        }

        let scanner = DirectoryScanner::new(filter).with_max_depth(self.options.max_depth);
        let jobs = scanner.scan(root)?;
        info!(root = %root.display(), candidates = jobs.len(), "scan finished");

        self.collect_jobs(jobs, cancel)
    }

    /// Read an already enumerated job list.
    ///
    /// # Errors
    /// Returns `Canceled` if `cancel` fires before the batch completes, or
    /// `WorkerPool` if threads cannot be started.
    pub fn collect_jobs(
        &self,
        jobs: Vec<FileJob>,
        cancel: &CancellationToken,
    ) -> Result<CollectionResult> {
        self.progress.set_discovered(jobs.len());
        let workers = self.options.worker_count(jobs.len());

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|idx| format!("bcopy-reader-{idx}"))
            .build()?;

        let (job_tx, job_rx) = unbounded();
        for job in jobs {
            // The receiver is alive in this scope, so sending cannot fail.
            let _ = job_tx.send(job);
        }
        drop(job_tx);

        let (record_tx, record_rx) = bounded(workers * RECORDS_PER_WORKER);

        let records = pool.in_place_scope(|scope| {
            for id in 0..workers {
                let job_rx = job_rx.clone();
                let record_tx = record_tx.clone();
                scope.spawn(move |_| self.run_worker(id, &job_rx, &record_tx, cancel));
            }
            drop(record_tx);

            record_rx.iter().collect::<Vec<FileRecord>>()
        });

        if cancel.is_canceled() {
            info!(discarded = records.len(), "collection canceled");
            return Err(BcopyError::Canceled);
        }

        let result = CollectionResult::from_records(records);
        info!(
            files = result.file_count,
            bytes = result.total_size,
            skipped = self.progress.skipped(),
            "collection finished"
        );
        Ok(result)
    }

    fn run_worker(
        &self,
        id: usize,
        jobs: &Receiver<FileJob>,
        records: &Sender<FileRecord>,
        cancel: &CancellationToken,
    ) {
        for job in jobs {
            if cancel.is_canceled() {
                debug!(worker = id, "stopping on cancellation");
                return;
            }

            match process_job(&job, self.reader.as_ref(), self.registry, &self.options) {
                FileOutcome::Read(record) => {
                    self.progress.record_collected();
                    if records.send(record).is_err() {
                        return;
                    }
                }
                FileOutcome::Skipped(reason) => {
                    self.progress.record_skipped();
                    debug!(worker = id, path = %job.relative_path, %reason, "file skipped");
                }
                FileOutcome::Failed(e) => {
                    self.progress.record_skipped();
                    debug!(worker = id, error = %e, "file dropped");
                }
            }
        }
    }
}

/// Collect `root` with the default reader and built-in languages.
///
/// # Errors
/// See [`Collector::collect`].
pub fn collect<F: FileFilter>(
    root: &Path,
    filter: &F,
    options: CollectOptions,
    cancel: &CancellationToken,
) -> Result<CollectionResult> {
    let registry = LanguageRegistry::default();
    Collector::new(&registry, options).collect(root, filter, cancel)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
