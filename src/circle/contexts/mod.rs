//! Context module

mod api;
mod commands;
mod models;

pub use commands::run_context_command;
pub use models::Context;
