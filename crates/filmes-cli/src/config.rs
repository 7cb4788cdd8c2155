use anyhow::{Context, Result};
use filmes::{Credentials, DEFAULT_SECRET_ENV, FILMS_COLLECTION};
use serde::Deserialize;

use std::path::{Path, PathBuf};
use std::str::FromStr;

/// File read when no `--config` is given. Its absence is not an error.
pub const DEFAULT_CONFIG_FILE: &str = "Filmes.toml";

/// Configuration for the dashboard, read from `Filmes.toml`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Collection holding the films
    pub collection: String,

    /// File containing the credential blob. Takes precedence over
    /// `secret_env` when set.
    pub credentials_path: Option<PathBuf>,

    /// Environment variable containing the credential blob
    pub secret_env: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            collection: FILMS_COLLECTION.to_string(),
            credentials_path: None,
            secret_env: DEFAULT_SECRET_ENV.to_string(),
        }
    }
}

impl Config {
    /// Load an explicit config file, or `Filmes.toml` from the working
    /// directory when it exists, or the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::load_file(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => Ok(Self::default()),
        }
    }

    fn load_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        contents
            .parse()
            .with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Read the credential blob from wherever this config points.
    pub fn credentials(&self) -> filmes::Result<Credentials> {
        match &self.credentials_path {
            Some(path) => Credentials::from_file(path),
            None => Credentials::from_env(&self.secret_env),
        }
    }
}

impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}
