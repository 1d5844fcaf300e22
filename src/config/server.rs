//! HTTP server settings.
//!
//! Values come from the environment (a `.env` file is loaded by `main` first).

use std::path::PathBuf;

/// Address the server binds to when `PETCLINIC_BIND_ADDRESS` is unset
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

/// Seed file used when `PETCLINIC_SEED_FILE` is unset
pub const DEFAULT_SEED_FILE: &str = "config.toml";

/// Runtime settings for the web server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// `host:port` the listener binds to
    pub bind_address: String,
    /// TOML file holding bootstrap data
    pub seed_file: PathBuf,
}

impl ServerConfig {
    /// Reads the settings from process environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the settings from an arbitrary key lookup, applying defaults for missing keys.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            bind_address: lookup("PETCLINIC_BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            seed_file: lookup("PETCLINIC_SEED_FILE")
                .map_or_else(|| PathBuf::from(DEFAULT_SEED_FILE), PathBuf::from),
        }
    }
}
