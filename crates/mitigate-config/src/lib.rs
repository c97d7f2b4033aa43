//! # mitigate-config
//!
//! Layered configuration loading for Mitigate using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`MITIGATE_*` prefix, `__` as separator)
//! 2. Project-level `.mitigate/config.toml`
//! 3. User-level `~/.config/mitigate/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `MITIGATE_SERVER__PORT` -> `server.port`,
//! `MITIGATE_STORE__PATH` -> `store.path`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use mitigate_config::MitigateConfig;
//!
//! let config = MitigateConfig::load_with_dotenv().expect("config");
//! println!("listening on {}", config.server.address());
//! ```

mod error;
mod server;
mod store;

pub use error::ConfigError;
pub use server::ServerConfig;
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MitigateConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

impl MitigateConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// Load configuration after reading a `.env` file from the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction or validation fails.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".mitigate/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("MITIGATE_").split("__"))
    }

    /// Reject values that would only fail later at bind or open time.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".into(),
                reason: "port must be non-zero".into(),
            });
        }
        if self.store.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "store.path".into(),
                reason: "path must not be empty".into(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mitigate").join("config.toml"))
    }
}
