//! circlectx - Main entry point

use clap::Parser;
use log::{debug, info};

use circlectx::config::api;
use circlectx::{run_context_command, Cli, CircleClient, ConfigFile, HostResolver, TokenResolver};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting circlectx v{}", env!("CARGO_PKG_VERSION"));

    let config = ConfigFile::load_default()?;
    let host = HostResolver::resolve(cli.host.as_deref(), &config);
    let token = TokenResolver::new(&host).resolve(cli.token.as_deref(), &config)?;

    let server = api::server_url(&host);
    debug!("Using API server: {}", server);
    let client = CircleClient::new(&server, &token);

    run_context_command(&client, cli).await
}
