use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::OutputFormat;

/// Document format written to the sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// `File: ./path` headers with fenced code blocks
    #[default]
    Markdown,
    /// Summary plus file list as JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Markdown => Self::Markdown,
            FormatArg::Json => Self::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "bcopy")]
#[command(author, version, about = "Bundle a project's source files into one markdown document")]
#[command(long_about = "Walks a project directory, keeps source files that pass the \
    extension, exclusion and .gitignore filters, and prints them as one markdown document.\n\n\
    Exit codes:\n  \
    0 - Success (including an empty result)\n  \
    1 - Unsafe path, configuration or I/O error, or total size above --hard-max\n  \
    130 - Interrupted")]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Directory to collect (defaults to the current directory)
    pub path: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Do not apply the repository's .gitignore
    #[arg(long)]
    pub no_gitignore: bool,

    /// Leave out test files and test directories
    #[arg(long)]
    pub exclude_tests: bool,

    /// Extra exclusion regex, matched against the relative path (repeatable)
    #[arg(long = "exclude", value_name = "REGEX")]
    pub exclude: Vec<String>,

    /// Only collect these extensions (e.g. go,py); replaces the built-in list
    #[arg(long = "ext", value_name = "EXT", value_delimiter = ',')]
    pub ext: Vec<String>,

    /// Maximum directory depth; files directly in PATH are depth 1 (0 = unlimited)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Skip files larger than this many MB (0 = unlimited)
    #[arg(long, value_name = "MB")]
    pub max_file_size: Option<f64>,

    /// Warn when the total collected size exceeds this many MB
    #[arg(long, value_name = "MB")]
    pub threshold: Option<f64>,

    /// Abort when the total collected size exceeds this many MB
    #[arg(long, value_name = "MB")]
    pub hard_max: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "markdown")]
    pub format: FormatArg,

    /// Write the document to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress progress and informational messages
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
