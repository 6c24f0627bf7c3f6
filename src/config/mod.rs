//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.

pub mod cli;
pub mod cli_convert;
pub mod toml;
pub mod validator;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Upper bound on the number of worker threads
pub const MAX_WORKERS: usize = 1024;

/// Default size of each file (10 MiB)
pub const DEFAULT_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Complete run configuration
///
/// Built once from CLI arguments (and optionally a TOML file) and never
/// modified after the run starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Destination directory for the generated files
    pub path: PathBuf,
    /// Number of files to write
    #[serde(default = "default_file_count")]
    pub file_count: u64,
    /// Size of each file in bytes
    #[serde(default = "default_file_size")]
    pub file_size: u64,
    /// Number of worker threads
    #[serde(default = "default_workers")]
    pub workers: usize,
    /// Print per-worker progress lines
    #[serde(default)]
    pub logging: bool,
    /// fsync every file after writing it
    #[serde(default)]
    pub sync: bool,
}

fn default_file_count() -> u64 {
    1
}

fn default_file_size() -> u64 {
    DEFAULT_FILE_SIZE
}

fn default_workers() -> usize {
    default_worker_count()
}

/// Default worker count: two threads per logical CPU
pub fn default_worker_count() -> usize {
    (num_cpus::get() * 2).clamp(1, MAX_WORKERS)
}

impl RunConfig {
    /// Create a configuration with default count, size and worker settings
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file_count: default_file_count(),
            file_size: default_file_size(),
            workers: default_workers(),
            logging: false,
            sync: false,
        }
    }

    pub fn with_file_count(mut self, file_count: u64) -> Self {
        self.file_count = file_count;
        self
    }

    pub fn with_file_size(mut self, file_size: u64) -> Self {
        self.file_size = file_size;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_logging(mut self, logging: bool) -> Self {
        self.logging = logging;
        self
    }

    pub fn with_sync(mut self, sync: bool) -> Self {
        self.sync = sync;
        self
    }

    /// Worker count actually used for the run
    ///
    /// Never exceeds the file count, so no worker is started with an empty range.
    pub fn effective_workers(&self) -> usize {
        let max_useful = usize::try_from(self.file_count).unwrap_or(usize::MAX);
        self.workers.min(max_useful).max(1)
    }

    /// Total number of bytes the run attempts to write
    pub fn total_bytes(&self) -> u64 {
        self.file_count.saturating_mul(self.file_size)
    }
}

impl fmt::Display for RunConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} files of {} bytes to {} ({} workers)",
            self.file_count,
            self.file_size,
            self.path.display(),
            self.effective_workers()
        )
    }
}
