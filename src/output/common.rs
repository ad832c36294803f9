//! Common utilities for output formatters

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Format a timestamp for table output
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Print a value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}

/// Print a value as YAML
pub fn print_yaml<T: Serialize + ?Sized>(value: &T) {
    match serde_yml::to_string(value) {
        Ok(yaml) => print!("{}", yaml),
        Err(e) => eprintln!("Error serializing to YAML: {}", e),
    }
}
