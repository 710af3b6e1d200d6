//! Progress display for survey runs

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_REDRAW_INTERVAL};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static TRIAL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Trials: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks completed survey trials and the running connectivity tally
///
/// A manager that was never initialized ignores updates, so callers can keep
/// one around regardless of whether progress is shown.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    completed: usize,
    connected: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no visible bar
    pub const fn new() -> Self {
        Self {
            bar: None,
            completed: 0,
            connected: 0,
        }
    }

    /// Show a bar sized for `trial_count` trials
    pub fn initialize(&mut self, trial_count: usize) {
        let bar = ProgressBar::new(trial_count as u64);
        bar.set_style(TRIAL_STYLE.clone());
        self.bar = Some(bar);
        self.completed = 0;
        self.connected = 0;
    }

    /// Record a finished trial and whether it ended connected
    pub fn complete_trial(&mut self, ended_connected: bool) {
        self.completed += 1;
        if ended_connected {
            self.connected += 1;
        }

        if let Some(ref bar) = self.bar {
            bar.inc(1);
            if self.completed % PROGRESS_REDRAW_INTERVAL == 0 {
                bar.set_message(format!("connected {}/{}", self.connected, self.completed));
            }
        }
    }

    /// Number of trials recorded so far
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Number of recorded trials that ended connected
    pub const fn connected(&self) -> usize {
        self.connected
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
