//! Run statistics
//!
//! Each worker returns its own `WorkerStats` when it finishes; the coordinator
//! folds them into a single `RunResult` after every worker has been joined.

use crate::util::time::calculate_throughput;
use crate::worker::progress::LogMode;
use serde::Serialize;
use std::time::Duration;

/// Counters collected by one worker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkerStats {
    pub worker_id: usize,
    pub files_written: u64,
    pub files_failed: u64,
    pub bytes_written: u64,
    /// Number of progress lines printed
    pub progress_reports: u64,
    /// Logging mode at the end of the worker's range
    pub log_mode: LogMode,
}

impl WorkerStats {
    pub fn new(worker_id: usize) -> Self {
        Self {
            worker_id,
            files_written: 0,
            files_failed: 0,
            bytes_written: 0,
            progress_reports: 0,
            log_mode: LogMode::Count,
        }
    }

    /// Files attempted, successful or not
    pub fn files_attempted(&self) -> u64 {
        self.files_written + self.files_failed
    }
}

/// Aggregate outcome of a run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    /// Bytes the run attempted to write (file count x file size)
    pub bytes_attempted: u64,
    /// Bytes that actually reached the filesystem
    pub bytes_written: u64,
    pub files_written: u64,
    pub files_failed: u64,
    pub workers: usize,
    pub elapsed: Duration,
    /// Bytes written per second of wall-clock time
    pub throughput: f64,
}

impl RunResult {
    /// Combine per-worker statistics
    pub fn aggregate(bytes_attempted: u64, workers: &[WorkerStats], elapsed: Duration) -> Self {
        let bytes_written = workers.iter().map(|w| w.bytes_written).sum();

        Self {
            bytes_attempted,
            bytes_written,
            files_written: workers.iter().map(|w| w.files_written).sum(),
            files_failed: workers.iter().map(|w| w.files_failed).sum(),
            workers: workers.len(),
            elapsed,
            throughput: calculate_throughput(bytes_written, elapsed),
        }
    }

    /// True if every file was written
    pub fn is_complete(&self) -> bool {
        self.files_failed == 0 && self.bytes_written == self.bytes_attempted
    }
}
