//! Result reporting: console text and optional JSON file

pub mod json;
pub mod text;
