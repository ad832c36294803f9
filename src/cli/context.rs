//! Context CLI arguments

use clap::{Args, Parser, Subcommand};

use super::common::OutputFormat;

/// Context subcommands
#[derive(Subcommand, Debug)]
pub enum ContextAction {
    /// List all contexts of an organization
    #[command(visible_alias = "ls")]
    List(ListContextsArgs),

    /// Show a context and the names of its environment variables
    Show(ShowContextArgs),

    /// Create a new context
    Create(CreateContextArgs),

    /// Delete a context by name
    #[command(visible_alias = "rm")]
    Delete(DeleteContextArgs),

    /// Store an environment variable in a context (value read from stdin unless --value)
    #[command(name = "store-secret")]
    StoreSecret(StoreSecretArgs),

    /// Remove an environment variable from a context
    #[command(name = "remove-secret")]
    RemoveSecret(RemoveSecretArgs),
}

/// Organization the context belongs to
#[derive(Args, Debug)]
pub struct OwnerArgs {
    /// VCS provider (e.g. github, bitbucket, gh, bb)
    pub vcs: String,
    /// Organization name
    pub org: String,
}

/// Arguments for 'context list'
#[derive(Parser, Debug)]
pub struct ListContextsArgs {
    #[command(flatten)]
    pub owner: OwnerArgs,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'context show'
#[derive(Parser, Debug)]
pub struct ShowContextArgs {
    #[command(flatten)]
    pub owner: OwnerArgs,

    /// Context name
    pub name: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'context create'
#[derive(Parser, Debug)]
pub struct CreateContextArgs {
    #[command(flatten)]
    pub owner: OwnerArgs,

    /// Name of the new context
    pub name: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'context delete'
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        circlectx context delete github my-org deploy-keys\n  \
        circlectx context delete github my-org deploy-keys -y   # no confirmation")]
pub struct DeleteContextArgs {
    #[command(flatten)]
    pub owner: OwnerArgs,

    /// Context name
    pub name: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}

/// Arguments for 'context store-secret'
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        echo -n \"$TOKEN\" | circlectx context store-secret github my-org deploy NPM_TOKEN\n  \
        circlectx context store-secret github my-org deploy NPM_TOKEN --value abc123")]
pub struct StoreSecretArgs {
    #[command(flatten)]
    pub owner: OwnerArgs,

    /// Context name
    pub context: String,

    /// Environment variable name
    pub name: String,

    /// Secret value (read from stdin when omitted)
    #[arg(long)]
    pub value: Option<String>,
}

/// Arguments for 'context remove-secret'
#[derive(Parser, Debug)]
pub struct RemoveSecretArgs {
    #[command(flatten)]
    pub owner: OwnerArgs,

    /// Context name
    pub context: String,

    /// Environment variable name
    pub name: String,
}
