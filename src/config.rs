//! Configuration management for the address book demo.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Only logging is configurable; the address book itself has no
//! tunables.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Environment variable holding the default log level.
pub const LOG_LEVEL_VAR: &str = "ADDRESS_BOOK_LOG_LEVEL";

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration for the address book demo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level used when `RUST_LOG` is unset (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_LOG_LEVEL`: one of trace, debug, info, warn, error,
    ///   off (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let log_level = match env::var(LOG_LEVEL_VAR) {
            Ok(val) => Self::parse_log_level(&val)?,
            Err(_) => Self::default().log_level,
        };

        Ok(Config { log_level })
    }

    fn parse_log_level(value: &str) -> ConfigResult<String> {
        let level = value.trim().to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: LOG_LEVEL_VAR.to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join(", "), value),
            });
        }
        Ok(level)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "warn".to_string(),
        }
    }
}
