//! UI utilities for terminal output
//!
//! This module provides user interface components like progress spinners
//! and confirmation prompts.

mod confirm;
mod spinner;

pub use confirm::{confirm_action, prompt_secret};
pub use spinner::{create_spinner, finish_spinner};
