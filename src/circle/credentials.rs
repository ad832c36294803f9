//! API token resolution from multiple sources

use log::debug;

use crate::config::credentials;
use crate::error::{CircleError, Result};

use super::config_file::ConfigFile;

/// Token resolution with fallback logic
pub struct TokenResolver {
    host: String,
}

impl TokenResolver {
    /// Create a new token resolver for the given host
    pub fn new(host: &str) -> Self {
        Self {
            host: host.to_string(),
        }
    }

    /// Resolve token from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variable (CIRCLECI_CLI_TOKEN)
    /// 3. Config file (~/.circleci/cli.yml)
    pub fn resolve(&self, cli_token: Option<&str>, config: &ConfigFile) -> Result<String> {
        let env_token = std::env::var(credentials::TOKEN_ENV_VAR).ok();
        self.resolve_from(cli_token, env_token, config)
    }

    fn resolve_from(
        &self,
        cli_token: Option<&str>,
        env_token: Option<String>,
        config: &ConfigFile,
    ) -> Result<String> {
        if let Some(token) = cli_token {
            debug!("Using token from CLI argument");
            return Ok(token.to_string());
        }

        if let Some(token) = env_token.filter(|t| !t.is_empty()) {
            debug!(
                "Using token from {} environment variable",
                credentials::TOKEN_ENV_VAR
            );
            return Ok(token);
        }

        if let Some(token) = config.token.as_deref().filter(|t| !t.is_empty()) {
            debug!("Using token from config file");
            return Ok(token.to_string());
        }

        Err(CircleError::TokenNotFound(self.token_not_found_message()))
    }

    /// Generate helpful error message when token is not found
    fn token_not_found_message(&self) -> String {
        format!(
            "No API token found for host '{}'. Please provide a token using one of:\n\
             \n\
             1. CLI argument:      circlectx --token <TOKEN>\n\
             2. Environment var:   export {}=<TOKEN>\n\
             3. Config file:       token: <TOKEN>  in ~/{}",
            self.host,
            credentials::TOKEN_ENV_VAR,
            credentials::CONFIG_FILE_PATH
        )
    }
}
