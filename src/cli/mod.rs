//! CLI argument parsing

mod common;
mod context;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use common::OutputFormat;
pub use context::{
    ContextAction, CreateContextArgs, DeleteContextArgs, ListContextsArgs, OwnerArgs,
    RemoveSecretArgs, ShowContextArgs, StoreSecretArgs,
};

/// CircleCI contexts CLI
#[derive(Parser, Debug)]
#[command(name = "circlectx")]
#[command(version)]
#[command(
    about = "Manage CircleCI contexts and their environment variables",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// CircleCI host URL (default: https://circleci.com)
    #[arg(short = 'H', long, global = true)]
    pub host: Option<String>,

    /// API token (overrides env var and config file)
    #[arg(short = 't', long, global = true)]
    pub token: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL, global = true)]
    pub log_level: String,

    /// Batch mode: no spinners, no interactive prompts
    #[arg(long, default_value_t = false, global = true)]
    pub batch: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage contexts and their environment variables
    #[command(visible_alias = "ctx")]
    Context {
        #[command(subcommand)]
        action: ContextAction,
    },
}
