//! Timing utilities
//!
//! Provides the clock abstraction used by workers for progress logging, plus
//! helpers for throughput calculation and human-readable formatting.

use std::time::{Duration, Instant};

/// Source of the current time
///
/// Workers read time through this trait so that the adaptive progress logic
/// can be driven by a synthetic clock in tests.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock backed by `Instant::now()`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Format a duration in human-readable form
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use writedisk::util::time::format_duration;
///
/// assert_eq!(format_duration(Duration::from_micros(2500)), "2.50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m30.00s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();

    if nanos < 1_000 {
        format!("{}ns", nanos)
    } else if nanos < 1_000_000 {
        format!("{:.2}us", nanos as f64 / 1_000.0)
    } else if nanos < 1_000_000_000 {
        format!("{:.2}ms", nanos as f64 / 1_000_000.0)
    } else if duration.as_secs() < 60 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let minutes = duration.as_secs() / 60;
        let seconds = duration.as_secs_f64() - (minutes * 60) as f64;
        if minutes < 60 {
            format!("{}m{:.2}s", minutes, seconds)
        } else {
            format!("{}h{}m{:.2}s", minutes / 60, minutes % 60, seconds)
        }
    }
}

/// Calculate throughput from bytes transferred and duration
///
/// # Returns
///
/// Bytes per second, or 0.0 for a zero duration
pub fn calculate_throughput(bytes: u64, duration: Duration) -> f64 {
    let seconds = duration.as_secs_f64();
    if seconds > 0.0 {
        bytes as f64 / seconds
    } else {
        0.0
    }
}

/// Format a byte count with 1024-based units
///
/// # Examples
///
/// ```
/// use writedisk::util::time::format_size;
///
/// assert_eq!(format_size(512), "512 bytes");
/// assert_eq!(format_size(1536), "1.50 KB");
/// assert_eq!(format_size(10 * 1024 * 1024), "10.00 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    if bytes >= TB {
        format!("{:.2} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

/// Format throughput in human-readable form
///
/// # Examples
///
/// ```
/// use writedisk::util::time::format_throughput;
///
/// assert_eq!(format_throughput(500.0), "500 bytes/second");
/// assert_eq!(format_throughput(2_621_440.0), "2.50 MB/second");
/// ```
pub fn format_throughput(bytes_per_sec: f64) -> String {
    format!("{}/second", format_size(bytes_per_sec as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_advances() {
        let clock = SystemClock;
        let t1 = clock.now();
        let t2 = clock.now();
        assert!(t2 >= t1);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_nanos(500)), "500ns");
        assert_eq!(format_duration(Duration::from_nanos(1500)), "1.50us");
        assert_eq!(format_duration(Duration::from_micros(1500)), "1.50ms");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
        assert_eq!(format_duration(Duration::from_secs(75)), "1m15.00s");
        assert_eq!(format_duration(Duration::from_secs(3725)), "1h2m5.00s");
    }

    #[test]
    fn test_calculate_throughput() {
        let duration = Duration::from_secs(10);
        let throughput = calculate_throughput(1024 * 1024 * 10, duration);
        assert_eq!(throughput, 1024.0 * 1024.0);
    }

    #[test]
    fn test_calculate_throughput_fractional() {
        let duration = Duration::from_millis(250);
        let throughput = calculate_throughput(1000, duration);
        assert!((throughput - 4000.0).abs() < 1e-9);
    }

    #[test]
    fn test_calculate_throughput_zero_duration() {
        assert_eq!(calculate_throughput(1000, Duration::ZERO), 0.0);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 bytes");
        assert_eq!(format_size(1023), "1023 bytes");
        assert_eq!(format_size(1024), "1.00 KB");
        assert_eq!(format_size(1536 * 1024), "1.50 MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3.00 GB");
        assert_eq!(format_size(2 * 1024 * 1024 * 1024 * 1024), "2.00 TB");
    }

    #[test]
    fn test_format_throughput() {
        assert_eq!(format_throughput(1536.0), "1.50 KB/second");
        assert_eq!(format_throughput(1536.0 * 1024.0 * 1024.0), "1.50 GB/second");
    }
}
