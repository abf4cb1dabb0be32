//! Per-cell progress display for a generation run

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks placed cells and the attempts they took
pub struct ProgressManager {
    bar: ProgressBar,
    total_attempts: usize,
}

impl ProgressManager {
    /// Create a bar for `cell_count` cells drawn on stderr
    pub fn new(cell_count: usize) -> Self {
        Self::with_target(cell_count, ProgressDrawTarget::stderr())
    }

    /// Create a bar that never draws
    pub fn hidden(cell_count: usize) -> Self {
        Self::with_target(cell_count, ProgressDrawTarget::hidden())
    }

    fn with_target(cell_count: usize, target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(cell_count as u64), target);
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_prefix("cells");
        Self {
            bar,
            total_attempts: 0,
        }
    }

    /// Record a filled cell
    pub fn cell_placed(&mut self, row: usize, col: usize, attempts: usize) {
        self.total_attempts += attempts;
        self.bar.inc(1);
        self.bar.set_message(format!(
            "({row}, {col}) in {attempts} attempts, {} total",
            self.total_attempts
        ));
    }

    /// Cells filled so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Attempts summed over filled cells
    pub const fn total_attempts(&self) -> usize {
        self.total_attempts
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
