//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::AppResult;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Company tariff configuration.
    #[serde(default)]
    pub company: CompanySettings,
    /// Projection cache configuration.
    #[serde(default)]
    pub cache: CacheSettings,
    /// Logging configuration.
    #[serde(default)]
    pub log: LogSettings,
}

/// Company-wide tariff settings maintained by an administrator.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanySettings {
    /// Freight price per chargeable kilogram.
    #[serde(default)]
    pub cost_per_kg: Decimal,
    /// Official exchange rate (informational only).
    #[serde(default)]
    pub bcv_rate: Decimal,
    /// Bumped by the administrator on every tariff update.
    #[serde(default)]
    pub version: u64,
}

/// Projection cache settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    /// Maximum number of cached projections.
    #[serde(default = "default_cache_capacity")]
    pub capacity: u64,
    /// Time-to-live for each cached projection, in seconds.
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
}

fn default_cache_capacity() -> u64 {
    64
}

fn default_cache_ttl() -> u64 {
    300 // 5 minutes
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            capacity: default_cache_capacity(),
            ttl_secs: default_cache_ttl(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    /// Default `tracing` filter when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON-formatted log lines.
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "freightbooks=info".to_string()
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from `.env`, config files, and environment.
    ///
    /// Sources, later ones overriding earlier ones:
    /// `config/default`, `config/{RUN_MODE}`, `FREIGHTBOOKS__*` variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FREIGHTBOOKS").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
