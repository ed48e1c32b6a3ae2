//! Output formatting for diagnostic results.
//!
//! Supports tree, wide, JSON and YAML output.

mod output;

pub use output::{OutputFormat, format_result, format_result_to_string};
