//! Configuration validation

use super::*;
use anyhow::Result;

/// Validate complete configuration
pub fn validate_config(config: &RunConfig) -> Result<()> {
    if config.path.as_os_str().is_empty() {
        anyhow::bail!("destination path must not be empty");
    }

    if config.file_count == 0 {
        anyhow::bail!("file_count must be at least 1");
    }

    if config.file_size == 0 {
        anyhow::bail!("file_size must be at least 1 byte");
    }

    if usize::try_from(config.file_size).is_err() {
        anyhow::bail!(
            "file_size {} does not fit in memory on this platform",
            config.file_size
        );
    }

    if config.workers == 0 || config.workers > MAX_WORKERS {
        anyhow::bail!(
            "workers must be between 1 and {}, got {}",
            MAX_WORKERS,
            config.workers
        );
    }

    if config.workers as u64 > config.file_count {
        eprintln!(
            "Warning: {} workers requested for {} files, using {}",
            config.workers,
            config.file_count,
            config.effective_workers()
        );
    }

    Ok(())
}
