//! JSON output formatting
//!
//! Writes the configuration and outcome of a run as one JSON document, for
//! collecting results from scripted benchmark runs.

use crate::config::RunConfig;
use crate::stats::RunResult;
use crate::util::time::{format_duration, format_size, format_throughput};
use crate::Result;
use anyhow::Context;
use serde::Serialize;
use std::fs::File;
use std::path::Path;
use std::time::Duration;

/// Duration with both microseconds and human-readable format
#[derive(Debug, Clone, Serialize)]
pub struct JsonDuration {
    pub micros: u64,
    pub human: String,
}

impl JsonDuration {
    pub fn from_duration(d: Duration) -> Self {
        Self {
            micros: d.as_micros() as u64,
            human: format_duration(d),
        }
    }
}

/// Throughput with bytes/sec and human-readable format
#[derive(Debug, Clone, Serialize)]
pub struct JsonThroughput {
    pub bytes_per_sec: u64,
    pub human: String,
}

impl JsonThroughput {
    pub fn new(bytes_per_sec: f64) -> Self {
        Self {
            bytes_per_sec: bytes_per_sec as u64,
            human: format_throughput(bytes_per_sec),
        }
    }
}

/// Outcome section of the document
#[derive(Debug, Clone, Serialize)]
pub struct JsonResult {
    pub files_written: u64,
    pub files_failed: u64,
    pub bytes_attempted: u64,
    pub bytes_written: u64,
    pub bytes_written_human: String,
    pub workers: usize,
    pub elapsed: JsonDuration,
    pub throughput: JsonThroughput,
}

/// Complete JSON document for one run
#[derive(Debug, Clone, Serialize)]
pub struct JsonRunOutput {
    pub tool: &'static str,
    pub version: &'static str,
    /// RFC 3339 completion time
    pub timestamp: String,
    pub config: RunConfig,
    pub result: JsonResult,
}

/// Build the JSON document for a finished run
pub fn build_run_output(config: &RunConfig, result: &RunResult) -> JsonRunOutput {
    JsonRunOutput {
        tool: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
        config: config.clone(),
        result: JsonResult {
            files_written: result.files_written,
            files_failed: result.files_failed,
            bytes_attempted: result.bytes_attempted,
            bytes_written: result.bytes_written,
            bytes_written_human: format_size(result.bytes_written),
            workers: result.workers,
            elapsed: JsonDuration::from_duration(result.elapsed),
            throughput: JsonThroughput::new(result.throughput),
        },
    }
}

/// Write the JSON document to `output_path`
pub fn write_json_output(output_path: &Path, output: &JsonRunOutput, pretty: bool) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create JSON output: {}", output_path.display()))?;

    if pretty {
        serde_json::to_writer_pretty(file, output)?;
    } else {
        serde_json::to_writer(file, output)?;
    }

    Ok(())
}
