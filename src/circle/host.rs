//! Host resolution from multiple sources

use log::debug;

use crate::config::{credentials, defaults};

use super::config_file::ConfigFile;

/// Host resolution with fallback logic
pub struct HostResolver;

impl HostResolver {
    /// Resolve host from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variable (CIRCLECI_CLI_HOST)
    /// 3. Config file
    /// 4. Default host (https://circleci.com)
    pub fn resolve(cli_host: Option<&str>, config: &ConfigFile) -> String {
        let env_host = std::env::var(credentials::HOST_ENV_VAR).ok();
        Self::resolve_from(cli_host, env_host, config)
    }

    fn resolve_from(cli_host: Option<&str>, env_host: Option<String>, config: &ConfigFile) -> String {
        if let Some(host) = cli_host {
            debug!("Using host from CLI argument: {}", host);
            return host.to_string();
        }

        if let Some(host) = env_host.filter(|h| !h.is_empty()) {
            debug!(
                "Using host from {} environment variable: {}",
                credentials::HOST_ENV_VAR,
                host
            );
            return host;
        }

        if let Some(host) = config.host.as_deref().filter(|h| !h.is_empty()) {
            debug!("Using host from config file: {}", host);
            return host.to_string();
        }

        debug!("Using default host: {}", defaults::HOST);
        defaults::HOST.to_string()
    }
}
