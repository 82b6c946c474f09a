//! Host server configuration parsed from environment variables.
//!
//! Required:
//! - `SUPABASE_URL`: base URL of the hosted backend project
//! - `SUPABASE_ANON_KEY`: public anon key handed to the browser
//!
//! Optional:
//! - `PORT`: listen port, default 3000

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use client::net::config::BackendConfig;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is required")]
    Missing { var: &'static str },
    #[error("invalid PORT '{0}'")]
    InvalidPort(String),
    #[error("invalid backend configuration: {0}")]
    Backend(#[from] client::net::config::ConfigError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub backend: BackendConfig,
    pub port: u16,
}

impl ServerConfig {
    /// Build typed server config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a value
    /// fails validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |var: &'static str| {
            lookup(var)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing { var })
        };
        let url = required("SUPABASE_URL")?;
        let anon_key = required("SUPABASE_ANON_KEY")?;
        let backend = BackendConfig::new(&url, &anon_key)?;
        let port = match lookup("PORT") {
            Some(raw) if !raw.trim().is_empty() => {
                raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?
            }
            _ => DEFAULT_PORT,
        };
        Ok(Self { backend, port })
    }
}
