//! Thread-safe progress logging for worker pools.
//!
//! Workers validating files concurrently share one [`ProgressTracker`]; it
//! logs whenever the combined count crosses an interval boundary, so a batch
//! of thousands of files produces a handful of progress lines instead of one
//! per file.

use log::info;
use std::sync::atomic::{AtomicU64, Ordering};

/// Shared counter that logs progress at interval boundaries.
///
/// # Example
/// ```
/// use fqcheck_lib::progress::ProgressTracker;
///
/// let tracker = ProgressTracker::new("Validated FASTQ files").with_interval(100);
/// for _ in 0..250 {
///     tracker.log_if_needed(1); // logs at 100 and 200
/// }
/// tracker.log_final(); // logs "Validated FASTQ files 250 (complete)"
/// ```
pub struct ProgressTracker {
    interval: u64,
    message: String,
    count: AtomicU64,
}

impl ProgressTracker {
    /// Creates a tracker with a count of zero and the default interval of 1,000.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { interval: 1_000, message: message.into(), count: AtomicU64::new(0) }
    }

    /// Sets the interval between progress lines.
    #[must_use]
    pub fn with_interval(mut self, interval: u64) -> Self {
        self.interval = interval;
        self
    }

    /// Adds `additional` to the count, logging once per interval boundary
    /// crossed. Safe to call from any number of threads; the boundary
    /// arithmetic runs on the values returned by a single atomic add, so
    /// concurrent callers never log the same milestone twice.
    ///
    /// Returns true when the new count sits exactly on an interval, which
    /// [`log_final`](Self::log_final) uses to avoid a redundant closing line.
    pub fn log_if_needed(&self, additional: u64) -> bool {
        if additional == 0 {
            let count = self.count.load(Ordering::Relaxed);
            return count > 0 && count % self.interval == 0;
        }

        let previous = self.count.fetch_add(additional, Ordering::Relaxed);
        let current = previous + additional;

        for crossed in (previous / self.interval + 1)..=(current / self.interval) {
            info!("{} {}", self.message, crossed * self.interval);
        }

        current % self.interval == 0
    }

    /// Logs the final count unless the last increment already landed on an
    /// interval boundary (in which case it was just logged).
    pub fn log_final(&self) {
        if !self.log_if_needed(0) {
            let count = self.count.load(Ordering::Relaxed);
            if count > 0 {
                info!("{} {} (complete)", self.message, count);
            }
        }
    }

    /// The current count.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }
}
