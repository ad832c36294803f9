//! CLI config file (`~/.circleci/cli.yml`)

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::credentials;
use crate::error::{CircleError, Result};

/// Settings read from the CLI config file
///
/// Unknown keys are ignored so the file can be shared with other tools.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

impl ConfigFile {
    /// Default config file path (~/.circleci/cli.yml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(credentials::CONFIG_FILE_PATH))
    }

    /// Load the default config file; a missing file (or HOME) yields empty settings
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load settings from `path`. Returns Default if the file doesn't exist,
    /// errors on corrupt YAML.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            CircleError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yml::from_str(&content).map_err(|e| {
            CircleError::Config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })
    }
}
