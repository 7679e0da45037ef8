use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use tempfile::TempDir;

use super::*;
use crate::scanner::PatternFilter;

fn default_filter() -> PatternFilter {
    PatternFilter::new(&[], &[], true, false)
}

fn write(root: &Path, relative: &str, content: &[u8]) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn jobs_in(root: &Path, paths: &[&str]) -> Vec<FileJob> {
    paths
        .iter()
        .map(|p| FileJob::new(root.join(p), Path::new(p)))
        .collect()
}

fn paths(result: &CollectionResult) -> Vec<&str> {
    result
        .files
        .iter()
        .map(|f| f.relative_path.as_str())
        .collect()
}

/// Reader that fires the cancellation token once it has served `after` reads.
struct CancelingReader {
    token: CancellationToken,
    after: usize,
    reads: AtomicUsize,
}

impl FileReader for CancelingReader {
    fn read_head(&self, path: &Path, limit: usize) -> io::Result<Vec<u8>> {
        RealFileReader.read_head(path, limit)
    }

    fn size(&self, path: &Path) -> io::Result<u64> {
        RealFileReader.size(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        if self.reads.fetch_add(1, Ordering::SeqCst) + 1 >= self.after {
            self.token.cancel();
        }
        RealFileReader.read(path)
    }
}

/// Reader that fails full reads for one path.
struct FlakyReader {
    broken: PathBuf,
}

impl FileReader for FlakyReader {
    fn read_head(&self, path: &Path, limit: usize) -> io::Result<Vec<u8>> {
        RealFileReader.read_head(path, limit)
    }

    fn size(&self, path: &Path) -> io::Result<u64> {
        RealFileReader.size(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        if path == self.broken {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        }
        RealFileReader.read(path)
    }
}

// =============================================================================
// Ordering and aggregation
// =============================================================================

#[test]
fn reverse_ordered_jobs_produce_sorted_result() {
    let dir = TempDir::new().unwrap();
    let names: Vec<String> = (0..40).map(|i| format!("pkg{i:02}/file.go")).collect();
    for name in &names {
        write(dir.path(), name, b"package x\n");
    }
    let reversed: Vec<&str> = names.iter().rev().map(String::as_str).collect();

    let registry = LanguageRegistry::default();
    let result = Collector::new(&registry, CollectOptions::default())
        .collect_jobs(jobs_in(dir.path(), &reversed), &CancellationToken::new())
        .unwrap();

    let got = paths(&result);
    assert_eq!(got.len(), 40);
    assert!(got.windows(2).all(|w| w[0] < w[1]), "not strictly ascending: {got:?}");
}

#[test]
fn duplicate_jobs_yield_one_record() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.go", b"package a\n");

    let registry = LanguageRegistry::default();
    let result = Collector::new(&registry, CollectOptions::default())
        .collect_jobs(jobs_in(dir.path(), &["a.go", "a.go"]), &CancellationToken::new())
        .unwrap();

    assert_eq!(paths(&result), vec!["a.go"]);
    assert_eq!(result.total_size, 10);
}

#[test]
fn single_worker_still_collects_everything() {
    let dir = TempDir::new().unwrap();
    for name in ["c.rs", "a.rs", "b.rs"] {
        write(dir.path(), name, b"fn f() {}\n");
    }

    let registry = LanguageRegistry::default();
    let options = CollectOptions::default().with_concurrency(1);
    let result = Collector::new(&registry, options)
        .collect_jobs(jobs_in(dir.path(), &["c.rs", "a.rs", "b.rs"]), &CancellationToken::new())
        .unwrap();

    assert_eq!(paths(&result), vec!["a.rs", "b.rs", "c.rs"]);
}

#[test]
fn empty_job_list_is_empty_result() {
    let registry = LanguageRegistry::default();
    let result = Collector::new(&registry, CollectOptions::default())
        .collect_jobs(Vec::new(), &CancellationToken::new())
        .unwrap();

    assert!(result.is_empty());
}

// =============================================================================
// Soft failures
// =============================================================================

#[test]
fn binary_and_oversized_files_are_skipped() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "main.go", b"package main\n");
    write(dir.path(), "blob.json", b"{\0}");
    write(dir.path(), "huge.txt", &vec![b'x'; 2 * 1024 * 1024]);

    let registry = LanguageRegistry::default();
    let progress = CollectProgress::new();
    let options = CollectOptions::default().with_max_file_size_mb(1.0);
    let result = Collector::new(&registry, options)
        .with_progress(progress.clone())
        .collect(dir.path(), &default_filter(), &CancellationToken::new())
        .unwrap();

    assert_eq!(paths(&result), vec!["main.go"]);
    assert_eq!(progress.discovered(), 3);
    assert_eq!(progress.processed(), 3);
    assert_eq!(progress.collected(), 1);
    assert_eq!(progress.skipped(), 2);
}

#[test]
fn read_failure_drops_only_that_file() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "ok.py", b"print(1)\n");
    write(dir.path(), "denied.py", b"print(2)\n");

    let registry = LanguageRegistry::default();
    let reader = FlakyReader {
        broken: dir.path().join("denied.py"),
    };
    let result = Collector::new(&registry, CollectOptions::default())
        .with_reader(reader)
        .collect(dir.path(), &default_filter(), &CancellationToken::new())
        .unwrap();

    assert_eq!(paths(&result), vec!["ok.py"]);
    assert_eq!(result.files[0].language, "python");
}

// =============================================================================
// End to end through the walker
// =============================================================================

#[test]
fn collect_walks_filters_and_tags() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "cmd/app/main.go", b"package main\n");
    write(dir.path(), "Dockerfile", b"FROM scratch\n");
    write(dir.path(), "notes", b"todo\n");
    write(dir.path(), "node_modules/x/index.js", b"x\n");

    let result = collect(
        dir.path(),
        &default_filter(),
        CollectOptions::default(),
        &CancellationToken::new(),
    )
    .unwrap();

    assert_eq!(paths(&result), vec!["Dockerfile", "cmd/app/main.go"]);
    assert_eq!(result.files[0].language, "dockerfile");
    assert_eq!(result.files[1].language, "go");
    assert_eq!(result.file_count, 2);
}

#[test]
fn collect_honors_max_depth() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.txt", b"a\n");
    write(dir.path(), "sub/b.txt", b"b\n");

    let options = CollectOptions::default().with_max_depth(1);
    let result = collect(dir.path(), &default_filter(), options, &CancellationToken::new()).unwrap();

    assert_eq!(paths(&result), vec!["a.txt"]);
}

#[test]
fn collect_missing_root_fails() {
    let dir = TempDir::new().unwrap();

    let err = collect(
        &dir.path().join("absent"),
        &default_filter(),
        CollectOptions::default(),
        &CancellationToken::new(),
    )
    .unwrap_err();

    assert!(matches!(err, BcopyError::WalkRoot { .. }));
}

// =============================================================================
// Cancellation
// =============================================================================

#[test]
fn canceled_before_start_returns_canceled() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.go", b"package a\n");

    let token = CancellationToken::new();
    token.cancel();

    let err = collect(dir.path(), &default_filter(), CollectOptions::default(), &token)
        .unwrap_err();

    assert!(err.is_canceled());
}

#[test]
fn cancel_mid_batch_discards_partial_result() {
    let dir = TempDir::new().unwrap();
    let names: Vec<String> = (0..64).map(|i| format!("f{i:03}.go")).collect();
    for name in &names {
        write(dir.path(), name, b"package f\n");
    }
    let names: Vec<&str> = names.iter().map(String::as_str).collect();

    let token = CancellationToken::new();
    let reader = CancelingReader {
        token: token.clone(),
        after: 5,
        reads: AtomicUsize::new(0),
    };
    let registry = LanguageRegistry::default();
    let progress = CollectProgress::new();

    let err = Collector::new(&registry, CollectOptions::default().with_concurrency(2))
        .with_reader(reader)
        .with_progress(progress.clone())
        .collect_jobs(jobs_in(dir.path(), &names), &token)
        .unwrap_err();

    assert!(matches!(err, BcopyError::Canceled));
    assert!(progress.processed() < 64, "workers kept claiming jobs after cancel");
}
