//! Context environment variable module

mod api;
mod models;

pub use models::EnvironmentVariable;
