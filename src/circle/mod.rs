//! CircleCI API client module
//!
//! This module provides typed access to contexts and their environment
//! variables on the CircleCI v2 REST API.

mod client;
mod config_file;
pub mod contexts;
mod credentials;
pub mod env_vars;
mod host;
pub mod pagination;
mod response;
#[cfg(test)]
pub(crate) mod test_support;
pub mod traits;
pub mod transport;

pub use client::CircleClient;
pub use config_file::ConfigFile;
pub use contexts::{run_context_command, Context};
pub use credentials::TokenResolver;
pub use env_vars::EnvironmentVariable;
pub use host::HostResolver;
pub use pagination::{owner_slug, ListingParams, Page, Pager};
pub use traits::CircleResource;
pub use transport::{ApiRequest, RawResponse, ReqwestTransport, Transport};
