//! Error handler for accounts.

use application::error::ApplicationError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures while reading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot open configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors surfaced by the `accounts` binary.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Application(#[from] ApplicationError),
    #[error("cannot encode output: {0}")]
    Output(#[from] serde_json::Error),
}
