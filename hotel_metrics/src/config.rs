//! Application configuration: TOML file plus environment overrides.
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! working setup pointing at `hotel_saas.db` with 50 rooms. Two environment
//! variables override the file:
//! - `HOTEL_INSIGHTS_DATABASE_URL` -> [`AppConfig::database_url`]
//! - `HOTEL_INSIGHTS_DEFAULT_ROOMS` -> [`AppConfig::default_rooms`]
//!
//! The room count is handed explicitly to seeding ([`AppConfig::seed_config`])
//! and to the simulator; nothing reads it from a global.

use std::{path::Path, time::Duration};

use serde::{Deserialize, Serialize};
use shared_utils::env::{EnvError, get_env_var_opt, parse_env_var};
use thiserror::Error;

use crate::seed::SeedConfig;

/// Env var overriding [`AppConfig::database_url`].
pub const ENV_DATABASE_URL: &str = "HOTEL_INSIGHTS_DATABASE_URL";
/// Env var overriding [`AppConfig::default_rooms`].
pub const ENV_DEFAULT_ROOMS: &str = "HOTEL_INSIGHTS_DEFAULT_ROOMS";

/// Errors raised while building an [`AppConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("could not read config file {path}: {source}")]
    Read {
        /// File that failed.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The config file is not valid TOML for [`AppConfig`].
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    /// An environment override is malformed.
    #[error(transparent)]
    Env(#[from] EnvError),
    /// A value parsed but is out of range.
    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// Runtime settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// SQLite database path (or `:memory:`).
    pub database_url: String,
    /// Room count used for seeding and as the simulator/record default.
    pub default_rooms: i32,
    /// Days of synthetic history written into an empty store.
    pub seed_days: u32,
    /// Lifetime of cached `load_all` snapshots, in seconds.
    pub cache_ttl_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: "hotel_saas.db".to_string(),
            default_rooms: 50,
            seed_days: 30,
            cache_ttl_secs: 600,
        }
    }
}

impl AppConfig {
    /// Apply `HOTEL_INSIGHTS_*` environment overrides.
    pub fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(url) = get_env_var_opt(ENV_DATABASE_URL) {
            self.database_url = url;
        }
        if let Some(rooms) = parse_env_var::<i32>(ENV_DEFAULT_ROOMS)? {
            self.default_rooms = rooms;
        }
        Ok(self)
    }

    /// Reject values that parse but make no sense.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::Invalid("database_url must not be empty".into()));
        }
        if self.default_rooms < 0 {
            return Err(ConfigError::Invalid(format!(
                "default_rooms must not be negative, got {}",
                self.default_rooms
            )));
        }
        Ok(())
    }

    /// Seeding parameters derived from this config.
    pub fn seed_config(&self) -> SeedConfig {
        SeedConfig {
            days: self.seed_days,
            rooms_total: self.default_rooms,
        }
    }

    /// Cache lifetime as a [`Duration`].
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

/// Parse + validate from a TOML string (no env overrides).
pub fn load_config_str(s: &str) -> Result<AppConfig, ConfigError> {
    let cfg: AppConfig = toml::from_str(s)?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load from an optional file, then apply env overrides and validate.
///
/// A missing `path` means "defaults only".
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let cfg = match path {
        Some(p) => {
            let s = std::fs::read_to_string(p).map_err(|source| ConfigError::Read {
                path: p.display().to_string(),
                source,
            })?;
            toml::from_str(&s)?
        }
        None => AppConfig::default(),
    };
    let cfg = cfg.with_env_overrides()?;
    cfg.validate()?;
    Ok(cfg)
}
