//! TOML configuration file parsing

use super::*;
use crate::config::cli::Cli;
use crate::config::cli_convert::parse_size;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<RunConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<RunConfig> {
    let config: RunConfig = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Merge CLI arguments with TOML configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, mut config: RunConfig) -> Result<RunConfig> {
    if let Some(path) = cli.destination() {
        config.path = path.clone();
    }
    if let Some(count) = cli.count {
        config.file_count = count;
    }
    if let Some(ref size) = cli.size {
        config.file_size = parse_size(size).context("Invalid file size")?;
    }
    if let Some(threads) = cli.threads {
        config.workers = threads;
    }

    // Flags can only switch these on
    if cli.verbose {
        config.logging = true;
    }
    if cli.sync {
        config.sync = true;
    }

    Ok(config)
}
