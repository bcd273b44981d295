//! Live attempt counter for interactive runs.

use indicatif::{ProgressBar, ProgressStyle};

use santa_core::observer::ProgressObserver;
use santa_core::progress::AttemptUpdate;

/// Observer rendering a live `attempt i/max` counter via indicatif.
///
/// `ProgressBar` is internally synchronized, so the observer can be shared
/// across threads like any other.
pub struct AttemptCounter {
    bar: ProgressBar,
}

impl AttemptCounter {
    /// Create a counter sized to the attempt bound.
    #[must_use]
    pub fn new(max_attempts: u32) -> Self {
        let bar = ProgressBar::new(u64::from(max_attempts));
        let style = ProgressStyle::with_template("{spinner:.green} attempt {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);
        Self { bar }
    }

    /// Finish and clear the counter, leaving the terminal clean.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressObserver for AttemptCounter {
    fn on_attempt(&self, update: &AttemptUpdate) {
        self.bar.set_position(u64::from(update.attempt));
        if update.done {
            self.bar.finish_and_clear();
        }
    }
}
