//! Collect a project's source files into one ordered document.
//!
//! The pipeline is: [`guard::PathGuard`] validates the root,
//! [`scanner::PatternFilter`] decides what is kept, [`collector::Collector`]
//! walks and reads in parallel, and an [`output::Renderer`] turns the ordered
//! [`collector::CollectionResult`] into text.

pub mod cancel;
pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod git;
pub mod guard;
pub mod language;
pub mod output;
mod path_utils;
pub mod scanner;

pub use error::{BcopyError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;
/// Conventional status for a process stopped by SIGINT.
pub const EXIT_CANCELED: i32 = 130;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
