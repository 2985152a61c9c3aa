//! Stage spinner for long-running pipeline steps
//!
//! The direct transform is quadratic in the sample count, so reordering a
//! large palette can take a while; the spinner shows which stage is running.

use crate::io::configuration::SPINNER_TICK_MS;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {prefix:.bold} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Spinner tracking the current pipeline stage
pub struct StageProgress {
    bar: Option<ProgressBar>,
}

impl StageProgress {
    /// Create a visible spinner, or a silent one when `enabled` is false
    pub fn new(enabled: bool) -> Self {
        let bar = enabled.then(|| {
            let bar = ProgressBar::new_spinner();
            bar.set_style(STAGE_STYLE.clone());
            bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
            bar
        });
        Self { bar }
    }

    /// Whether anything is drawn
    pub const fn is_enabled(&self) -> bool {
        self.bar.is_some()
    }

    /// Announce the start of a stage
    pub fn start_stage(&self, stage: &'static str, detail: impl Into<String>) {
        if let Some(ref bar) = self.bar {
            bar.set_prefix(stage);
            bar.set_message(detail.into());
        }
    }

    /// Clear the spinner from the terminal
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}

impl Drop for StageProgress {
    fn drop(&mut self) {
        self.finish();
    }
}
