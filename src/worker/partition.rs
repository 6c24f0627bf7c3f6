//! Work partitioning
//!
//! Splits the file index space `[0, N)` into one contiguous range per worker.

use crate::error::WriteDiskError;
use std::ops::Range;

/// Contiguous, half-open range of file indices assigned to one worker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkRange {
    pub worker_id: usize,
    /// First file index (inclusive)
    pub start: u64,
    /// Last file index (exclusive)
    pub end: u64,
}

impl WorkRange {
    #[inline]
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn indices(&self) -> Range<u64> {
        self.start..self.end
    }
}

/// Split `file_count` files across `workers` workers
///
/// Range `k` is `[k*N/W, (k+1)*N/W)` with floor division, so the ranges are
/// disjoint, cover `[0, N)` exactly and differ in size by at most one file.
///
/// # Errors
///
/// Returns `WriteDiskError::Partition` unless `1 <= workers <= file_count`.
pub fn partition(file_count: u64, workers: usize) -> Result<Vec<WorkRange>, WriteDiskError> {
    if workers == 0 || workers as u64 > file_count {
        return Err(WriteDiskError::Partition {
            files: file_count,
            workers,
        });
    }

    let n = file_count as u128;
    let w = workers as u128;
    let bound = |k: u128| (k * n / w) as u64;

    Ok((0..workers)
        .map(|k| WorkRange {
            worker_id: k,
            start: bound(k as u128),
            end: bound(k as u128 + 1),
        })
        .collect())
}
