//! Shared utilities: content buffer and timing helpers

pub mod buffer;
pub mod time;

pub use buffer::ContentBuffer;
pub use time::{Clock, SystemClock};
