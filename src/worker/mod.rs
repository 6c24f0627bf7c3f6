//! Worker thread implementation
//!
//! A `Worker` owns one contiguous range of file indices and writes one file per
//! index, in increasing order, from the shared content buffer. Workers never
//! talk to each other: the buffer is read-only and every file name is unique,
//! so the only thing a worker hands back is its `WorkerStats`.
//!
//! # Example
//!
//! ```no_run
//! use writedisk::target::FileNamer;
//! use writedisk::util::ContentBuffer;
//! use writedisk::worker::{partition::WorkRange, Worker, WorkerOptions};
//!
//! let buffer = ContentBuffer::generate(4096);
//! let range = WorkRange { worker_id: 0, start: 0, end: 10 };
//! let worker = Worker::new(range, buffer, FileNamer::new("/tmp/fill"), WorkerOptions::default());
//!
//! let stats = worker.run();
//! println!("Wrote {} files", stats.files_written);
//! ```

pub mod partition;
pub mod progress;

use crate::error::WriteDiskError;
use crate::stats::WorkerStats;
use crate::target::FileNamer;
use crate::util::buffer::ContentBuffer;
use crate::util::time::{Clock, SystemClock};
use partition::WorkRange;
use progress::{LogMode, ProgressTracker};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Per-worker behavior switches
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkerOptions {
    /// Print adaptive progress lines
    pub logging: bool,
    /// fsync each file after writing it
    pub sync: bool,
}

/// Writes the files of one work range
pub struct Worker {
    range: WorkRange,
    buffer: ContentBuffer,
    namer: FileNamer,
    options: WorkerOptions,
}

impl Worker {
    pub fn new(range: WorkRange, buffer: ContentBuffer, namer: FileNamer, options: WorkerOptions) -> Self {
        Self {
            range,
            buffer,
            namer,
            options,
        }
    }

    /// Worker ID (0-based)
    pub fn id(&self) -> usize {
        self.range.worker_id
    }

    /// Write every file in the range using the wall clock
    pub fn run(self) -> WorkerStats {
        self.run_with_clock(&SystemClock)
    }

    /// Write every file in the range, reading time from `clock`
    ///
    /// A failed file is reported on stderr and counted; the worker continues
    /// with the next index.
    pub fn run_with_clock<C: Clock>(self, clock: &C) -> WorkerStats {
        let mut stats = WorkerStats::new(self.id());
        let file_size = self.buffer.len() as u64;
        let mut tracker = self
            .options
            .logging
            .then(|| ProgressTracker::new(file_size, clock.now()));

        for index in self.range.indices() {
            let path = self.namer.data_file(self.id(), index);

            let wrote = match write_file(&path, &self.buffer, self.options.sync) {
                Ok(()) => {
                    stats.files_written += 1;
                    stats.bytes_written += file_size;
                    true
                }
                Err(source) => {
                    stats.files_failed += 1;
                    eprintln!("Error: {}", WriteDiskError::FileWrite { path, source });
                    false
                }
            };

            if let Some(ref mut tracker) = tracker {
                if let Some(written) = tracker.record(clock.now(), wrote) {
                    println!("Worker {:3}: has written {:4} files", self.id() + 1, written);
                    stats.progress_reports += 1;
                }
            }
        }

        stats.log_mode = tracker.map_or(LogMode::Count, |t| t.mode());
        stats
    }
}

/// Create `path` and write the whole buffer to it
fn write_file(path: &Path, data: &[u8], sync: bool) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data)?;
    if sync {
        file.sync_all()?;
    }
    Ok(())
}
