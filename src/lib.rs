//! circlectx - Manage CircleCI contexts and their environment variables
//!
//! A typed client for the CircleCI v2 context API plus a small CLI on top.
//!
//! # Features
//!
//! - List, look up, create and delete contexts
//! - List, store and remove context environment variables
//! - Automatic cursor pagination (`next_page_token`)
//! - Pluggable HTTP transport for testing
//!
//! # Example
//!
//! ```bash
//! # List all contexts of an organization
//! circlectx context list github my-org
//!
//! # Show a context and its variable names as JSON
//! circlectx context show github my-org deploy -o json
//!
//! # Store a secret from stdin
//! echo -n "$NPM_TOKEN" | circlectx context store-secret github my-org deploy NPM_TOKEN
//! ```

pub mod circle;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod ui;

pub use circle::{
    owner_slug, run_context_command, CircleClient, CircleResource, ConfigFile, Context,
    EnvironmentVariable, HostResolver, ListingParams, Page, Pager, TokenResolver, Transport,
};
pub use cli::{Cli, Command, ContextAction, OutputFormat};
pub use error::{CircleError, Result};
