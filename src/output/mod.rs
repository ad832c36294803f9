//! Output formatting module
//!
//! Handles different output formats: table, JSON, YAML

mod common;
mod contexts;

pub use contexts::{output_context_details, output_contexts};
