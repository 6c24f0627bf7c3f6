//! Adaptive progress logging
//!
//! A worker starts in `Count` mode and reports every `each` files. As soon as
//! more than `LOG_INTERVAL` passes between two reports it switches to
//! `Duration` mode for the rest of its range and reports once per interval
//! instead. Fast runs with small files stay quiet; slow runs still show a
//! heartbeat.

use serde::Serialize;
use std::time::{Duration, Instant};

/// Minimum time between reports in duration mode
pub const LOG_INTERVAL: Duration = Duration::from_secs(10);

/// Files above this size are reported individually in count mode (10 GiB)
pub const LARGE_FILE_THRESHOLD: u64 = 10 * 1024 * 1024 * 1024;

/// Reporting cadence of a worker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LogMode {
    /// Report every `each` files
    Count,
    /// Report whenever `LOG_INTERVAL` has passed; never left once entered
    Duration,
}

/// Per-worker progress state
///
/// Owned by exactly one worker and never shared, so it needs no locking.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    written: u64,
    last_log: Instant,
    mode: LogMode,
    each: u64,
    interval: Duration,
}

impl ProgressTracker {
    /// Create a tracker for files of `file_size` bytes, starting at `start`
    pub fn new(file_size: u64, start: Instant) -> Self {
        Self {
            written: 0,
            last_log: start,
            mode: LogMode::Count,
            each: report_every(file_size),
            interval: LOG_INTERVAL,
        }
    }

    /// Record one more attempted file and decide whether to report
    ///
    /// Only successful writes (`wrote == true`) raise the written count, but
    /// every attempt advances the time checks. Returns the number of files
    /// written so far when a progress line is due.
    pub fn record(&mut self, now: Instant, wrote: bool) -> Option<u64> {
        if wrote {
            self.written += 1;
        }

        let since_last = now.saturating_duration_since(self.last_log);
        if self.mode == LogMode::Count && since_last > self.interval {
            self.mode = LogMode::Duration;
        }

        let due = match self.mode {
            LogMode::Count => wrote && self.written % self.each == 0,
            LogMode::Duration => since_last > self.interval,
        };

        if due {
            self.last_log = now;
            Some(self.written)
        } else {
            None
        }
    }

    #[inline]
    pub fn mode(&self) -> LogMode {
        self.mode
    }

    #[inline]
    pub fn written(&self) -> u64 {
        self.written
    }
}

/// Count-mode cadence for a given file size
pub fn report_every(file_size: u64) -> u64 {
    if file_size > LARGE_FILE_THRESHOLD {
        1
    } else {
        10
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_every() {
        assert_eq!(report_every(16), 10);
        assert_eq!(report_every(LARGE_FILE_THRESHOLD), 10);
        assert_eq!(report_every(LARGE_FILE_THRESHOLD + 1), 1);
    }

    #[test]
    fn test_count_mode_reports_every_ten() {
        let start = Instant::now();
        let mut tracker = ProgressTracker::new(1024, start);

        let reports: Vec<u64> = (1..=35)
            .filter_map(|i| tracker.record(start + Duration::from_millis(i), true))
            .collect();

        assert_eq!(reports, vec![10, 20, 30]);
        assert_eq!(tracker.mode(), LogMode::Count);
        assert_eq!(tracker.written(), 35);
    }

    #[test]
    fn test_large_files_report_every_file() {
        let start = Instant::now();
        let mut tracker = ProgressTracker::new(LARGE_FILE_THRESHOLD + 1, start);

        for i in 1..=5 {
            assert_eq!(tracker.record(start + Duration::from_secs(i), true), Some(i));
        }
        assert_eq!(tracker.mode(), LogMode::Count);
    }

    #[test]
    fn test_slow_writes_switch_to_duration_mode() {
        let start = Instant::now();
        let mut tracker = ProgressTracker::new(1024, start);

        let mut now = start;
        for i in 1..=20 {
            now += Duration::from_secs(11);
            // Each file takes longer than the interval, so every record reports
            assert_eq!(tracker.record(now, true), Some(i));
            assert_eq!(tracker.mode(), LogMode::Duration);
        }
    }

    #[test]
    fn test_duration_mode_never_reverts() {
        let start = Instant::now();
        let mut tracker = ProgressTracker::new(1024, start);

        let mut now = start + Duration::from_secs(11);
        assert_eq!(tracker.record(now, true), Some(1));
        assert_eq!(tracker.mode(), LogMode::Duration);

        // Fast writes afterwards: no count-based reports, mode stays put
        for _ in 0..50 {
            now += Duration::from_millis(10);
            assert_eq!(tracker.record(now, true), None);
            assert_eq!(tracker.mode(), LogMode::Duration);
        }

        // Next report only once the interval has passed again
        now += Duration::from_secs(10);
        assert_eq!(tracker.record(now, true), Some(52));
        assert_eq!(tracker.mode(), LogMode::Duration);
    }

    #[test]
    fn test_exactly_interval_is_not_enough() {
        let start = Instant::now();
        let mut tracker = ProgressTracker::new(1024, start);

        assert_eq!(tracker.record(start + LOG_INTERVAL, true), None);
        assert_eq!(tracker.mode(), LogMode::Count);
    }

    #[test]
    fn test_failed_files_not_counted_as_written() {
        let start = Instant::now();
        let mut tracker = ProgressTracker::new(1024, start);

        // Every third file fails: 12 attempts, 8 written
        let reports: Vec<u64> = (1..=12)
            .filter_map(|i| tracker.record(start + Duration::from_millis(i), i % 3 != 0))
            .collect();

        assert_eq!(tracker.written(), 8);
        assert!(reports.is_empty());

        // The tenth successful write is the first to report
        assert_eq!(tracker.record(start + Duration::from_millis(13), true), None);
        assert_eq!(tracker.record(start + Duration::from_millis(14), true), Some(10));
    }

    #[test]
    fn test_failed_file_still_switches_to_duration_mode() {
        let start = Instant::now();
        let mut tracker = ProgressTracker::new(1024, start);

        assert_eq!(tracker.record(start + Duration::from_secs(11), false), Some(0));
        assert_eq!(tracker.mode(), LogMode::Duration);
        assert_eq!(tracker.written(), 0);
    }
}
