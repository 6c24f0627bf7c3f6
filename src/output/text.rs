//! Human-readable text output

use crate::config::RunConfig;
use crate::stats::RunResult;
use crate::util::time::{format_duration, format_size, format_throughput};

/// Banner printed before a run starts
pub fn format_banner(config: &RunConfig) -> String {
    format!(
        "Writing {} files, for a total size of {}",
        format_number(config.file_count),
        format_size(config.total_bytes())
    )
}

/// Configuration summary shown when logging is enabled or on a dry run
pub fn print_configuration(config: &RunConfig) {
    println!("Configuration:");
    println!("  Path:       {}", config.path.display());
    println!("  Files:      {}", format_number(config.file_count));
    println!("  File size:  {}", format_size(config.file_size));
    println!("  Workers:    {}", config.effective_workers());
    println!("  Sync:       {}", if config.sync { "yes" } else { "no" });
}

/// One-line summary of a completed run
pub fn format_summary(result: &RunResult) -> String {
    format!(
        "Wrote {} in {}, {}",
        format_size(result.bytes_written),
        format_duration(result.elapsed),
        format_throughput(result.throughput)
    )
}

/// Print run results to console
pub fn print_results(result: &RunResult) {
    println!("{}", format_summary(result));

    if result.files_failed > 0 {
        println!(
            "  {} of {} files failed, {} not written",
            format_number(result.files_failed),
            format_number(result.files_written + result.files_failed),
            format_size(result.bytes_attempted.saturating_sub(result.bytes_written))
        );
    }
}

/// Format a number with thousands separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();

    for (count, c) in s.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_format_banner() {
        let config = RunConfig::new("/tmp/out")
            .with_file_count(1000)
            .with_file_size(1024 * 1024);
        assert_eq!(
            format_banner(&config),
            "Writing 1,000 files, for a total size of 1000.00 MB"
        );
    }

    #[test]
    fn test_format_summary() {
        let result = RunResult {
            bytes_attempted: 2 * 1024 * 1024,
            bytes_written: 2 * 1024 * 1024,
            files_written: 2,
            files_failed: 0,
            workers: 1,
            elapsed: Duration::from_secs(2),
            throughput: 1024.0 * 1024.0,
        };
        assert_eq!(format_summary(&result), "Wrote 2.00 MB in 2.00s, 1.00 MB/second");
    }
}
