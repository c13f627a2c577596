//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STYLEHUB_STORAGE_PATH` - File backing the durable key-value store;
//!   in-memory storage is used when unset
//! - `STYLEHUB_REPLY_DELAY_MS` - Simulated chat typing delay in
//!   milliseconds (default: 700)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::chat::timer::DEFAULT_REPLY_DELAY;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable was set but unparseable.
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront runtime configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// File backing the durable key-value store; `None` means in-memory.
    pub storage_path: Option<PathBuf>,
    /// Simulated typing delay before a chat reply.
    pub reply_delay: Duration,
}

impl StorefrontConfig {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] if `STYLEHUB_REPLY_DELAY_MS`
    /// is set but not a number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let storage_path = std::env::var_os("STYLEHUB_STORAGE_PATH").map(PathBuf::from);

        let reply_delay = match std::env::var("STYLEHUB_REPLY_DELAY_MS") {
            Ok(raw) => {
                let millis: u64 = raw.trim().parse().map_err(|e| {
                    ConfigError::InvalidEnvVar(
                        "STYLEHUB_REPLY_DELAY_MS".to_owned(),
                        format!("{e}"),
                    )
                })?;
                Duration::from_millis(millis)
            }
            Err(_) => DEFAULT_REPLY_DELAY,
        };

        Ok(Self {
            storage_path,
            reply_delay,
        })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            storage_path: None,
            reply_delay: DEFAULT_REPLY_DELAY,
        }
    }
}
