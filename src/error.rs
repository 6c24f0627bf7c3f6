//! Error taxonomy for a run
//!
//! Fatal errors (`Directory`, `ProbeWrite`, `ProbeRemove`, `WorkerPanicked`) abort the
//! run. `FileWrite` is only ever reported by a worker and never stops a run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the write engine
#[derive(Debug, Error)]
pub enum WriteDiskError {
    /// Destination directory could not be created or accessed
    #[error("cannot create directory {}: {source}", .path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Probe file could not be written
    #[error("cannot write probe file {}: {source}", .path.display())]
    ProbeWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Probe file was written but could not be removed
    #[error("cannot remove probe file {}: {source}", .path.display())]
    ProbeRemove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A single data file failed to write
    #[error("cannot write file {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A worker thread panicked before returning its statistics
    #[error("worker {0} panicked")]
    WorkerPanicked(usize),

    /// Partition request outside 1 <= workers <= files
    #[error("cannot split {files} files across {workers} workers")]
    Partition { files: u64, workers: usize },

    /// Run configuration failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
