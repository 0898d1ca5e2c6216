//! Spinners and progress bars for network operations.

use crate::printer::Printer;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// A spinner for indeterminate progress, such as fetching the release list.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    /// Create a new spinner drawing wherever the printer allows.
    pub fn new(message: impl Into<String>, printer: Printer) -> Self {
        let bar = ProgressBar::with_draw_target(None, printer.target());
        bar.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.cyan} {msg}")
                .expect("valid template"),
        );
        bar.set_message(message.into());
        if printer.progress_enabled() {
            bar.enable_steady_tick(Duration::from_millis(80));
        }
        Self { bar }
    }

    /// Finish the spinner with a failure message.
    pub fn finish_error(self, message: impl Into<String>) {
        self.bar.set_style(
            ProgressStyle::default_spinner()
                .template("{msg}")
                .expect("valid template"),
        );
        self.bar
            .finish_with_message(format!("{} {}", console::style("✗").red(), message.into()));
    }

    /// Finish and clear the spinner.
    pub fn finish_clear(self) {
        self.bar.finish_and_clear();
    }
}

/// A byte-oriented progress bar for downloads.
pub struct Progress {
    bar: ProgressBar,
}

impl Progress {
    /// Create a progress bar for a download of `total` bytes.
    pub fn new(total: u64, message: impl Into<String>, printer: Printer) -> Self {
        let bar = ProgressBar::with_draw_target(Some(total), printer.target());
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{bar:40.cyan/dim}] {bytes}/{total_bytes} ({bytes_per_sec})")
                .expect("valid template")
                .progress_chars("━━─"),
        );
        bar.set_message(message.into());
        Self { bar }
    }

    /// Advance by `delta` bytes.
    pub fn inc(&self, delta: u64) {
        self.bar.inc(delta);
    }

    /// Current position in bytes.
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Finish the progress bar.
    pub fn finish(self, message: impl Into<String>) {
        self.bar.finish_with_message(format!(
            "{} {}",
            console::style("✓").green(),
            message.into()
        ));
    }

    /// Abandon the bar, leaving it on screen as it was.
    pub fn abandon(self) {
        self.bar.abandon();
    }
}
