//! Cosmetic progress counter for the loading overlay.
//!
//! The value is not tied to real upload or processing progress. It advances
//! one step per timer tick and stops at 100.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

/// Milliseconds between progress ticks.
pub const TICK_INTERVAL_MS: u64 = 50;

pub const MAX_PERCENT: u8 = 100;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadingProgress {
    percent: u8,
}

impl LoadingProgress {
    #[must_use]
    pub fn percent(self) -> u8 {
        self.percent
    }

    #[must_use]
    pub fn is_complete(self) -> bool {
        self.percent >= MAX_PERCENT
    }

    /// Advance one percent. Returns `false` once the bar is full so the
    /// caller can stop its timer.
    pub fn tick(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.percent += 1;
        true
    }

    /// CSS width value for the bar fill.
    #[must_use]
    pub fn width_style(self) -> String {
        format!("width: {}%", self.percent)
    }
}
