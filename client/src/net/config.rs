//! Backend endpoint configuration shared by the host server and the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host server parses `SUPABASE_URL` / `SUPABASE_ANON_KEY` into a
//! `BackendConfig` and renders it into the page head as meta tags. The
//! hydrated client reads the same tags back, so the WASM bundle carries no
//! baked-in project URL.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Meta tag carrying the backend base URL.
pub const META_URL: &str = "medsupply:supabase-url";
/// Meta tag carrying the public anon key.
pub const META_ANON_KEY: &str = "medsupply:supabase-anon-key";

/// Errors raised while validating backend configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required value was empty.
    #[error("missing value: {0}")]
    Missing(&'static str),

    /// The backend URL is not an absolute http(s) URL.
    #[error("invalid backend url '{0}' (expected http:// or https://)")]
    InvalidUrl(String),
}

/// Base URL and anon key of the hosted backend project.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
}

impl BackendConfig {
    /// Validate and normalize a backend URL + anon key pair.
    ///
    /// # Errors
    ///
    /// Returns an error if either value is blank or the URL is not http(s).
    pub fn new(url: &str, anon_key: &str) -> Result<Self, ConfigError> {
        let url = url.trim().trim_end_matches('/');
        let anon_key = anon_key.trim();
        if url.is_empty() {
            return Err(ConfigError::Missing("backend url"));
        }
        if anon_key.is_empty() {
            return Err(ConfigError::Missing("anon key"));
        }
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::InvalidUrl(url.to_owned()));
        }
        Ok(Self { url: url.to_owned(), anon_key: anon_key.to_owned() })
    }

    /// `false` for the empty default used when no configuration was rendered.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.anon_key.is_empty()
    }

    /// Data endpoint for a table, e.g. `{url}/rest/v1/medical_supplies`.
    #[must_use]
    pub fn rest_endpoint(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.url)
    }

    /// Auth endpoint, e.g. `{url}/auth/v1/signup`.
    #[must_use]
    pub fn auth_endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.url, path.trim_start_matches('/'))
    }

    /// Read the configuration rendered into the document head.
    /// Returns `None` outside the browser or when the tags are absent/invalid.
    #[must_use]
    pub fn from_document() -> Option<Self> {
        #[cfg(feature = "hydrate")]
        {
            let doc = web_sys::window()?.document()?;
            let read = |name: &str| {
                doc.query_selector(&format!("meta[name=\"{name}\"]"))
                    .ok()
                    .flatten()
                    .and_then(|el| el.get_attribute("content"))
            };
            let url = read(META_URL)?;
            let anon_key = read(META_ANON_KEY)?;
            match Self::new(&url, &anon_key) {
                Ok(config) => Some(config),
                Err(e) => {
                    leptos::logging::warn!("backend config rejected: {e}");
                    None
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}
