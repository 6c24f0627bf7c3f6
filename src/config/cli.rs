//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// writedisk - create a number of files of a given size, filled with non-zero data
#[derive(Parser, Debug)]
#[command(name = "writedisk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output directory for the files
    #[arg(value_name = "PATH")]
    pub target: Option<PathBuf>,

    /// Output directory for the files (alternative to the positional PATH)
    #[arg(short = 'p', long = "path", conflicts_with = "target")]
    pub path: Option<PathBuf>,

    /// Number of files to create (default: 1)
    #[arg(short = 'c', long)]
    pub count: Option<u64>,

    /// Size of each file, e.g. 4096, 64k, 10M, 1G (default: 10M)
    #[arg(short = 's', long)]
    pub size: Option<String>,

    /// Number of worker threads (default: two per CPU)
    #[arg(short = 't', long)]
    pub threads: Option<usize>,

    /// Print per-worker progress
    #[arg(short = 'v', long, visible_alias = "logging", visible_short_alias = 'l')]
    pub verbose: bool,

    /// fsync each file after it is written
    #[arg(long)]
    pub sync: bool,

    /// TOML configuration file (CLI flags take precedence)
    #[arg(long, value_name = "FILE", env = "WRITEDISK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write the run result as JSON to this file
    #[arg(long, value_name = "FILE")]
    pub json_output: Option<PathBuf>,

    /// Validate and print the configuration without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print timing of the startup phases
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Destination directory from either the positional or the flag form
    pub fn destination(&self) -> Option<&PathBuf> {
        self.target.as_ref().or(self.path.as_ref())
    }

    /// Validate CLI arguments
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.destination().is_none() && self.config.is_none() {
            anyhow::bail!("No output path specified");
        }

        if self.count == Some(0) {
            anyhow::bail!("count must be at least 1");
        }

        if let Some(threads) = self.threads {
            if threads == 0 {
                anyhow::bail!("threads must be at least 1");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_path() {
        let cli = Cli::try_parse_from(["writedisk", "/tmp/out", "-c", "4"]).unwrap();
        assert_eq!(cli.destination(), Some(&PathBuf::from("/tmp/out")));
        assert_eq!(cli.count, Some(4));
        assert_eq!(cli.size, None);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_path_flag_and_logging_alias() {
        let cli = Cli::try_parse_from(["writedisk", "--path", "/data", "-l", "-s", "1g"]).unwrap();
        assert_eq!(cli.destination(), Some(&PathBuf::from("/data")));
        assert!(cli.verbose);
        assert_eq!(cli.size.as_deref(), Some("1g"));
    }

    #[test]
    fn test_missing_path_rejected() {
        let cli = Cli::try_parse_from(["writedisk", "-c", "2"]).unwrap();
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_zero_count_rejected() {
        let cli = Cli::try_parse_from(["writedisk", "/tmp/out", "-c", "0"]).unwrap();
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_zero_threads_rejected() {
        let cli = Cli::try_parse_from(["writedisk", "/tmp/out", "-t", "0"]).unwrap();
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_both_path_forms_conflict() {
        let result = Cli::try_parse_from(["writedisk", "/a", "--path", "/b"]);
        assert!(result.is_err());
    }
}
