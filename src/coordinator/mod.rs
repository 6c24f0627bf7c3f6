//! Coordinator module
//!
//! Orchestrates a run: probe the destination, build the shared buffer,
//! partition the file indices, start one worker thread per range, wait for
//! all of them and aggregate their statistics.

use crate::config::RunConfig;
use crate::error::WriteDiskError;
use crate::stats::{RunResult, WorkerStats};
use crate::target::{probe, FileNamer};
use crate::util::buffer::ContentBuffer;
use crate::worker::{partition, Worker, WorkerOptions};
use std::thread;
use std::time::Instant;

/// Runs one write job described by a `RunConfig`
pub struct Coordinator {
    config: RunConfig,
    namer: FileNamer,
}

impl Coordinator {
    /// Create a coordinator with a fresh per-run file name token
    pub fn new(config: RunConfig) -> Self {
        let namer = FileNamer::new(&config.path);
        Self { config, namer }
    }

    /// Create a coordinator with a caller-supplied namer
    pub fn with_namer(config: RunConfig, namer: FileNamer) -> Self {
        Self { config, namer }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn namer(&self) -> &FileNamer {
        &self.namer
    }

    /// Execute the run
    ///
    /// # Errors
    ///
    /// Probe failures abort the run before any worker starts. Individual file
    /// failures do not: they are counted in the returned `RunResult`.
    pub fn run(&self) -> Result<RunResult, WriteDiskError> {
        let config = &self.config;
        let file_size = usize::try_from(config.file_size).map_err(|_| {
            WriteDiskError::InvalidConfig(format!("file size {} too large", config.file_size))
        })?;

        let start = Instant::now();

        probe::probe(&self.namer, config.file_size)?;

        let workers = config.effective_workers();
        println!("Launching {} write operation threads...", workers);

        let buffer = ContentBuffer::generate(file_size);
        let ranges = partition::partition(config.file_count, workers)?;

        let options = WorkerOptions {
            logging: config.logging,
            sync: config.sync,
        };

        let handles: Vec<_> = ranges
            .into_iter()
            .map(|range| {
                let worker = Worker::new(range, buffer.clone(), self.namer.clone(), options);
                (range.worker_id, thread::spawn(move || worker.run()))
            })
            .collect();

        if config.logging {
            println!("Waiting for write operations to complete...");
        }

        // Join everything before reporting a panic so no thread is left running
        let mut stats: Vec<WorkerStats> = Vec::with_capacity(handles.len());
        let mut panicked = None;
        for (worker_id, handle) in handles {
            match handle.join() {
                Ok(worker_stats) => stats.push(worker_stats),
                Err(_) if panicked.is_none() => panicked = Some(worker_id),
                Err(_) => {}
            }
        }

        if let Some(worker_id) = panicked {
            return Err(WriteDiskError::WorkerPanicked(worker_id));
        }

        Ok(RunResult::aggregate(config.total_bytes(), &stats, start.elapsed()))
    }
}
