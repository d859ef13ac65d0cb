//! Configuration manager for accounts.

use std::fs::File;
use std::path::{Path, PathBuf};

use adapters::outbound::id::UuidVersion;
use domain::auth::password::PasswordPolicy;
use domain::identity::email::EmailPolicy;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Instance name.
    pub name: String,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Related to Argon2 configuration.
    pub argon2: Argon2,
    /// Password strength rules.
    pub password: PasswordPolicy,
    /// Email normalization rules.
    pub email: EmailPolicy,
    /// Identifier generation.
    pub id: Id,
    /// Related to PostgreSQL configuration.
    /// Accounts are kept in memory when absent.
    #[serde(skip_serializing)]
    pub postgres: Option<Postgres>,
    #[serde(skip)]
    path: PathBuf,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").into(),
            log_level: DEFAULT_LOG_LEVEL.into(),
            argon2: Argon2::default(),
            password: PasswordPolicy::default(),
            email: EmailPolicy::default(),
            id: Id::default(),
            postgres: None,
            path: PathBuf::new(),
        }
    }
}

/// PostgreSQL configuration.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct Postgres {
    /// Hostname:(?port) for PostgreSQL instance.
    pub address: String,
    /// Database name.
    pub database: Option<String>,
    /// Username credential to connect.
    pub username: Option<String>,
    /// Password credential to connect.
    pub password: Option<String>,
    /// Maximum pool connections.
    pub pool_size: Option<u32>,
}

impl Postgres {
    pub const DEFAULT_CREDENTIALS: &'static str = "postgres";
    pub const DEFAULT_DATABASE_NAME: &'static str = "accounts";
    pub const DEFAULT_POOL_SIZE: u32 = 10;

    /// Connection string built from the entry, with defaults filled in.
    pub fn url(&self) -> String {
        let username =
            self.username.as_deref().unwrap_or(Self::DEFAULT_CREDENTIALS);
        let password =
            self.password.as_deref().unwrap_or(Self::DEFAULT_CREDENTIALS);
        let database =
            self.database.as_deref().unwrap_or(Self::DEFAULT_DATABASE_NAME);

        let address = &self.address;

        format!("postgres://{username}:{password}@{address}/{database}")
    }

    pub fn pool_size(&self) -> u32 {
        self.pool_size.unwrap_or(Self::DEFAULT_POOL_SIZE)
    }
}

/// Argon2 configuration.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Argon2 {
    /// Memory used while hashing, in KiB.
    pub memory_cost: u32,
    /// Iterations of hash.
    pub iterations: u32,
    /// Parallelism degree.
    pub parallelism: u32,
    /// Output hash length.
    pub hash_length: usize,
}

impl Default for Argon2 {
    fn default() -> Self {
        Self {
            memory_cost: 1024 * 64, // 64 MiB.
            iterations: 4,
            parallelism: 2,
            hash_length: 32,
        }
    }
}

/// Identifier configuration.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Id {
    pub version: UuidVersion,
}

impl Configuration {
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Parse the file set with [`Configuration::path`], or
    /// [`DEFAULT_CONFIG_PATH`] if it is not a file.
    pub fn load(&self) -> Result<Self, ConfigError> {
        let file_path = self.file_path();
        let file = File::open(file_path)?;
        let mut config: Configuration = serde_yaml::from_reader(file)?;
        config.path = file_path.to_path_buf();

        Ok(config)
    }

    fn file_path(&self) -> &Path {
        if self.path.is_file() {
            return &self.path;
        }

        let default = Path::new(DEFAULT_CONFIG_PATH);
        if !self.path.as_os_str().is_empty() && self.path != default {
            tracing::warn!(
                path = %self.path.display(),
                fallback = DEFAULT_CONFIG_PATH,
                "configuration path is not a file"
            );
        }

        default
    }

    /// Like [`Configuration::load`], falling back to defaults on failure.
    pub fn read(self) -> Self {
        match self.load() {
            Ok(config) => config,
            Err(err) => self.fallback(err),
        }
    }

    /// Return a default configuration as fallback.
    pub fn fallback(&self, err: ConfigError) -> Self {
        tracing::error!(
            error = %err,
            path = %self.path.display(),
            "cannot read configuration file, using defaults"
        );
        Self::default().path(self.path.clone())
    }
}
