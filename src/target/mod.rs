//! Target directory handling
//!
//! This module owns everything that touches the destination directory:
//! the per-run file naming scheme and the writability probe.

pub mod probe;

use std::path::{Path, PathBuf};

/// Extension used for every generated file, including the probe
pub const FILE_EXTENSION: &str = ".txt";

/// Builds collision-free file names for one run
///
/// Names have the form `<base>-<worker>-<index><ext>`, where `base` is a random
/// token shared by the whole run. Worker and file indices are shown 1-based.
/// Because every worker owns a distinct index range, no two workers ever
/// produce the same name and no coordination is needed between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNamer {
    dir: PathBuf,
    base: String,
}

impl FileNamer {
    /// Create a namer with a fresh random base token
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_base(dir, format!("file-{:08x}", rand::random::<u32>()))
    }

    /// Create a namer with an explicit base token
    pub fn with_base(dir: impl Into<PathBuf>, base: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            base: base.into(),
        }
    }

    /// Destination directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Per-run base token
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Path of the data file for `file_index`, written by `worker_id`
    pub fn data_file(&self, worker_id: usize, file_index: u64) -> PathBuf {
        self.dir.join(format!(
            "{}-{:03}-{:08}{}",
            self.base,
            worker_id + 1,
            file_index + 1,
            FILE_EXTENSION
        ))
    }

    /// Path of the writability probe file
    pub fn probe_file(&self) -> PathBuf {
        self.dir.join(format!("{}-probe{}", self.base, FILE_EXTENSION))
    }
}
