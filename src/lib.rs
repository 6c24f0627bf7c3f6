//! writedisk - Fill storage with fixed-size files
//!
//! writedisk writes a configurable number of same-sized files into a directory,
//! spreading the work over a pool of worker threads. Every file carries the same
//! content buffer: an incrementing byte sequence starting at a random offset, so
//! output from separate runs is easy to tell apart.
//!
//! # Architecture
//!
//! - **Probe**: validates the destination with a full-size trial write
//! - **Buffer**: one shared, immutable content buffer per run
//! - **Partitioner**: splits the file index space into contiguous ranges
//! - **Workers**: one thread per range with adaptive progress logging
//! - **Coordinator**: sequences the above and reports aggregate throughput

pub mod config;
pub mod coordinator;
pub mod error;
pub mod output;
pub mod stats;
pub mod target;
pub mod util;
pub mod worker;

// Re-export commonly used types
pub use config::RunConfig;
pub use coordinator::Coordinator;
pub use error::WriteDiskError;
pub use stats::RunResult;

/// Result type used by configuration and front-end code
pub type Result<T> = anyhow::Result<T>;
