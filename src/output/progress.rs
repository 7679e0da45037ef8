use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};

use crate::collector::CollectProgress;

/// Progress bar mirroring a running collection's counters.
///
/// Disabled in quiet mode or when stderr is not a TTY.
#[derive(Clone)]
pub struct CollectBar {
    progress_bar: ProgressBar,
}

impl CollectBar {
    /// The bar draws on stderr so stdout stays clean for the document.
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(quiet, is_tty)
    }

    fn new_with_visibility(quiet: bool, is_tty: bool) -> Self {
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_visible_progress_bar()
        };

        Self { progress_bar }
    }

    fn create_visible_progress_bar() -> ProgressBar {
        let pb = ProgressBar::new(0);
        // The template is a static string; fall back to the default style if it is ever rejected.
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} Collecting [{bar:40.cyan/blue}] {pos}/{len} files ({msg})")
        {
            pb.set_style(style.progress_chars("█▓░"));
        }
        pb
    }

    /// Copy the current counter values onto the bar.
    pub fn update(&self, progress: &CollectProgress) {
        self.progress_bar.set_length(progress.discovered());
        self.progress_bar.set_position(progress.processed());
        self.progress_bar
            .set_message(format!("{} skipped", progress.skipped()));
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.progress_bar.is_hidden()
    }

    /// Finishes the progress bar and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
