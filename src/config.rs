//! Configuration management for the contact book.
//!
//! Settings come from environment variables, optionally seeded from a
//! `.env` file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use crate::models::DEFAULT_PAGE_SIZE;
use std::env;
use std::path::PathBuf;

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the contacts file (default: "contacts.txt")
    pub contacts_file: PathBuf,

    /// Records shown per `showall` page (default: 2)
    pub page_size: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_FILE`: Path of the contacts file (default: "contacts.txt")
    /// - `PAGE_SIZE`: Records per page, at least 1 (default: 2)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let contacts_file = match env::var("CONTACTS_FILE") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACTS_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                })
            }
            Ok(val) => PathBuf::from(val),
            Err(_) => defaults.contacts_file,
        };

        let page_size = Self::parse_env_usize("PAGE_SIZE", defaults.page_size)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "PAGE_SIZE".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            contacts_file,
            page_size,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            contacts_file: PathBuf::from("contacts.txt"),
            page_size: DEFAULT_PAGE_SIZE,
            log_level: "error".to_string(),
        }
    }
}
