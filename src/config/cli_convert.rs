//! CLI to Config conversion utilities

use crate::config::cli::Cli;
use crate::config::{default_worker_count, toml, RunConfig, DEFAULT_FILE_SIZE};
use anyhow::{Context, Result};

/// Parse a size string (e.g., "1G", "100M", "4k") to bytes
///
/// Suffixes are 1024-based and case-insensitive. A bare number is bytes.
pub fn parse_size(s: &str) -> Result<u64> {
    let s = s.trim().to_lowercase();

    // Longer suffixes first so "kb" is not read as "k" followed by junk
    const SUFFIXES: &[(&str, u64)] = &[
        ("kb", 1024),
        ("k", 1024),
        ("mb", 1024 * 1024),
        ("m", 1024 * 1024),
        ("gb", 1024 * 1024 * 1024),
        ("g", 1024 * 1024 * 1024),
        ("tb", 1024 * 1024 * 1024 * 1024),
        ("t", 1024 * 1024 * 1024 * 1024),
        ("b", 1),
    ];

    let (num_str, multiplier) = SUFFIXES
        .iter()
        .find_map(|&(suffix, multiplier)| s.strip_suffix(suffix).map(|num| (num, multiplier)))
        .unwrap_or((s.as_str(), 1));

    let num: u64 = num_str
        .trim()
        .parse()
        .with_context(|| format!("Invalid size: {}", s))?;

    num.checked_mul(multiplier)
        .with_context(|| format!("Size too large: {}", s))
}

/// Build the run configuration from CLI arguments
///
/// When `--config` is given the TOML file is loaded first and CLI flags are
/// applied on top of it.
pub fn build_config(cli: &Cli) -> Result<RunConfig> {
    match cli.config {
        Some(ref path) => {
            let config = toml::parse_toml_file(path)?;
            toml::merge_cli_with_config(cli, config)
        }
        None => config_from_cli(cli),
    }
}

/// Build the run configuration from CLI arguments alone
pub fn config_from_cli(cli: &Cli) -> Result<RunConfig> {
    let path = cli
        .destination()
        .cloned()
        .context("No output path specified")?;

    let file_size = match cli.size {
        Some(ref size) => parse_size(size).context("Invalid file size")?,
        None => DEFAULT_FILE_SIZE,
    };

    Ok(RunConfig::new(path)
        .with_file_count(cli.count.unwrap_or(1))
        .with_file_size(file_size)
        .with_workers(cli.threads.unwrap_or_else(default_worker_count))
        .with_logging(cli.verbose)
        .with_sync(cli.sync))
}
