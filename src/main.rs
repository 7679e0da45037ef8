use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use bcopy::cancel::CancellationToken;
use bcopy::cli::Cli;
use bcopy::collector::{CollectOptions, CollectProgress, CollectionResult, Collector};
use bcopy::config::{Config, ConfigLoader, FileConfigLoader};
use bcopy::guard::PathGuard;
use bcopy::language::LanguageRegistry;
use bcopy::output::{CollectBar, OutputFormat};
use bcopy::scanner::PatternFilter;
use bcopy::{BcopyError, EXIT_CANCELED, EXIT_ERROR, EXIT_SUCCESS, git};

const PROGRESS_POLL_INTERVAL: Duration = Duration::from_millis(80);

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(e) if e.is_canceled() => {
            eprintln!("Interrupted; nothing was written.");
            EXIT_CANCELED
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    };

    std::process::exit(exit_code);
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> bcopy::Result<i32> {
    // 1. Resolve and guard the root
    let requested = cli.path.clone().unwrap_or_else(|| PathBuf::from("."));
    let guard = PathGuard::new();
    let root = guard.validate(&requested)?;
    if !cli.quiet
        && let Some(message) = guard.large_directory_warning(&root)
    {
        eprintln!("Warning: {message}");
    }

    // 2. Configuration, with CLI overrides
    let mut config = load_config(cli.config.as_deref(), cli.no_config)?;
    apply_cli_overrides(&mut config, cli);
    config.validate()?;

    // 3. Filter, with the repository's ignore file when available
    let filter = build_filter(&config, &root, cli.quiet);

    // 4. Collect
    let result = collect(&config, &root, &filter, cli.quiet)?;

    // 5. Size checks and delivery
    if result.is_empty() {
        if !cli.quiet {
            eprintln!("No files found to collect in {}", root.display());
        }
        return Ok(EXIT_SUCCESS);
    }

    let total_mb = result.total_size_mb();
    if total_mb > config.limits.hard_max_mb {
        eprintln!(
            "Error: collected {total_mb:.2} MB across {} files, above the hard limit of {} MB. \
             Narrow the path or add exclusions.",
            result.file_count, config.limits.hard_max_mb
        );
        return Ok(EXIT_ERROR);
    }
    if total_mb > config.limits.threshold_mb && !cli.quiet {
        eprintln!(
            "Warning: collected {total_mb:.2} MB across {} files (threshold {} MB).",
            result.file_count, config.limits.threshold_mb
        );
    }

    let document = OutputFormat::from(cli.format).renderer().render(&result)?;
    write_output(&document, cli.output.as_deref())?;

    if !cli.quiet && cli.output.is_some() {
        eprintln!("Collected {} files ({total_mb:.2} MB)", result.file_count);
    }

    Ok(EXIT_SUCCESS)
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> bcopy::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if cli.no_gitignore {
        config.scanner.gitignore = false;
    }
    if cli.exclude_tests {
        config.scanner.exclude_tests = true;
    }
    if !cli.exclude.is_empty() {
        config.scanner.exclude.clone_from(&cli.exclude);
    }
    if !cli.ext.is_empty() {
        config.scanner.extensions.clone_from(&cli.ext);
    }
    if let Some(depth) = cli.max_depth {
        config.scanner.max_depth = depth;
    }
    if let Some(mb) = cli.max_file_size {
        config.limits.max_file_size_mb = mb;
    }
    if let Some(mb) = cli.threshold {
        config.limits.threshold_mb = mb;
    }
    if let Some(mb) = cli.hard_max {
        config.limits.hard_max_mb = mb;
    }
}

fn build_filter(config: &Config, root: &Path, quiet: bool) -> PatternFilter {
    let filter = PatternFilter::new(
        &config.scanner.extensions,
        &config.scanner.exclude,
        config.scanner.gitignore,
        config.scanner.exclude_tests,
    );

    let Some(repo_root) = git::find_repo_root(root) else {
        if !quiet {
            eprintln!("Warning: {} is not inside a git repository.", root.display());
        }
        return filter;
    };

    info!(repo = %repo_root.display(), "found git repository");
    let scan_root = dunce::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
    filter.load_ignore_file(&repo_root, &scan_root)
}

fn collect(
    config: &Config,
    root: &Path,
    filter: &PatternFilter,
    quiet: bool,
) -> bcopy::Result<CollectionResult> {
    let cancel = CancellationToken::new();
    if let Err(e) = cancel.cancel_on_signal() {
        warn!(error = %e, "failed to install interrupt handler");
    }

    let registry = LanguageRegistry::with_custom_languages(&config.languages);
    let options = CollectOptions::default()
        .with_max_depth(config.scanner.max_depth)
        .with_max_file_size_mb(config.limits.max_file_size_mb);
    let progress = CollectProgress::new();
    let collector = Collector::new(&registry, options).with_progress(progress.clone());

    let bar = CollectBar::new(quiet);
    let done = AtomicBool::new(false);

    let result = thread::scope(|scope| {
        if !bar.is_hidden() {
            scope.spawn(|| {
                while !done.load(Ordering::Relaxed) {
                    bar.update(&progress);
                    thread::sleep(PROGRESS_POLL_INTERVAL);
                }
            });
        }

        let result = collector.collect(root, filter, &cancel);
        done.store(true, Ordering::Relaxed);
        result
    });
    bar.finish();

    result
}

fn write_output(document: &str, output: Option<&Path>) -> bcopy::Result<()> {
    match output {
        Some(path) => fs::write(path, document).map_err(|source| BcopyError::WriteOutput {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(document.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}
