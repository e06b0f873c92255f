//! Service configuration
//!
//! Values come from built-in defaults overridden by `API_`-prefixed
//! environment variables (`API_HOST`, `API_PORT`, `API_UTC_OFFSET_MINUTES`).

use chrono::FixedOffset;
use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Offset of Asia/Taipei, which has not observed daylight saving since 1979
const DEFAULT_UTC_OFFSET_MINUTES: i64 = 8 * 60;

/// API service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Interface to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Offset from UTC, in minutes, used to render creation timestamps
    pub utc_offset_minutes: i32,
}

impl ApiConfig {
    /// Load the configuration from defaults and the environment
    pub fn load() -> Result<Self, ConfigError> {
        let config: ApiConfig = Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 3000_i64)?
            .set_default("utc_offset_minutes", DEFAULT_UTC_OFFSET_MINUTES)?
            .add_source(Environment::with_prefix("API").try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.utc_offset()?;
        Ok(config)
    }

    /// Socket address string for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Fixed offset used to localize creation timestamps
    pub fn utc_offset(&self) -> Result<FixedOffset, ConfigError> {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                ConfigError::Message(format!(
                    "utc_offset_minutes out of range: {}",
                    self.utc_offset_minutes
                ))
            })
    }
}
