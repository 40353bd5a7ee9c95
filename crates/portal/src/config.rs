//! Portal configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CLUBDESK_DATA_DIR` - Directory holding the per-key JSON store
//!   (default: `.clubdesk`)

use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Portal application configuration.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Directory the file-backed storage keeps one `<key>.json` per slot in.
    pub data_dir: PathBuf,
}

impl PortalConfig {
    /// Data directory used when `CLUBDESK_DATA_DIR` is not set.
    pub const DEFAULT_DATA_DIR: &'static str = ".clubdesk";

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `CLUBDESK_DATA_DIR` is set but empty or not
    /// valid unicode.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = match env::var("CLUBDESK_DATA_DIR") {
            Ok(value) if value.trim().is_empty() => {
                return Err(ConfigError::InvalidEnvVar(
                    "CLUBDESK_DATA_DIR".to_owned(),
                    "must not be empty".to_owned(),
                ));
            }
            Ok(value) => PathBuf::from(value),
            Err(env::VarError::NotPresent) => PathBuf::from(Self::DEFAULT_DATA_DIR),
            Err(err) => {
                return Err(ConfigError::InvalidEnvVar(
                    "CLUBDESK_DATA_DIR".to_owned(),
                    err.to_string(),
                ));
            }
        };

        Ok(Self { data_dir })
    }
}
