//! Consecutive-failure tracking.
//!
//! # State Transitions
//! ```text
//! success:              count := 0
//! failure:              count := count + 1
//! count >= threshold:   alert, count := 0
//! ```
//!
//! # Design Decisions
//! - One counter per URL, created lazily, never removed
//! - Increment, threshold check and reset happen under the entry lock, so
//!   overlapping cycles cannot both fire for the same streak
//! - Shared by every caller; there is no per-request isolation

use dashmap::DashMap;

/// Alert threshold used when none is configured.
pub const DEFAULT_FAILURE_THRESHOLD: u32 = 3;

#[derive(Debug)]
pub struct FailureTracker {
    counts: DashMap<String, u32>,
    threshold: u32,
}

impl FailureTracker {
    /// Create a tracker that alerts after `threshold` consecutive failures.
    /// A threshold of zero is treated as one.
    pub fn new(threshold: u32) -> Self {
        Self {
            counts: DashMap::new(),
            threshold: threshold.max(1),
        }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn record_success(&self, url: &str) {
        *self.counts.entry(url.to_string()).or_insert(0) = 0;
    }

    /// Count one failure. Returns `true` when this failure completes a streak
    /// of `threshold`; the counter is reset in the same step.
    pub fn record_failure(&self, url: &str) -> bool {
        let mut count = self.counts.entry(url.to_string()).or_insert(0);
        *count += 1;
        if *count >= self.threshold {
            *count = 0;
            true
        } else {
            false
        }
    }

    /// Current streak length for `url`; zero for URLs never probed.
    pub fn failures(&self, url: &str) -> u32 {
        self.counts.get(url).map(|c| *c).unwrap_or(0)
    }
}

impl Default for FailureTracker {
    fn default() -> Self {
        Self::new(DEFAULT_FAILURE_THRESHOLD)
    }
}
