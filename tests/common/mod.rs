#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the bcopy binary.
#[macro_export]
macro_rules! bcopy {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("bcopy"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a fixture that is the root of a fresh git repository.
    pub fn git_repo() -> Self {
        let fixture = Self::new();
        gix::init(fixture.path()).expect("Failed to init git repository");
        fixture
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        self.create_bytes(relative_path, content.as_bytes());
    }

    /// Creates a file with raw bytes in the temp directory.
    pub fn create_bytes(&self, relative_path: &str, content: &[u8]) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `.bcopy.toml` at the fixture root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".bcopy.toml", content);
    }

    /// Reads a file from the temp directory.
    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}

pub const SMALL_PROJECT: &[(&str, &str)] = &[
    ("cmd/app/main.go", "package main\n\nfunc main() {}\n"),
    ("internal/util.go", "package internal\n"),
    ("scripts/run.py", "print(1)"),
    ("Dockerfile", "FROM scratch\n"),
    ("notes", "not collected\n"),
];
