//! REST client for the hosted backend (data + auth services).
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call returns
//! `BackendError::Unavailable`, since the browser is the only place that
//! holds a user session.
//!
//! ERROR HANDLING
//! ==============
//! Non-success responses are decoded with `parse_error_message` so the
//! backend's own wording reaches the toast layer unchanged.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::backend::{AuthBackend, BackendError, SupplyStore};
use super::config::BackendConfig;
#[cfg(feature = "hydrate")]
use super::types::{SUPPLY_TABLE, parse_error_message, parse_session, parse_sign_up, parse_supply_rows};
use super::types::{Credentials, Session, SignUpOutcome, SupplyItem, SupplyPayload};

#[cfg(any(test, feature = "hydrate"))]
const PREFER_REPRESENTATION: &str = "return=representation";

#[cfg(any(test, feature = "hydrate"))]
fn select_all_query() -> [(&'static str, &'static str); 1] {
    [("select", "*")]
}

#[cfg(any(test, feature = "hydrate"))]
fn id_filter(id: &str) -> String {
    format!("eq.{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn token_path(grant_type: &str) -> String {
    format!("token?grant_type={grant_type}")
}

#[cfg(any(test, feature = "hydrate"))]
fn refresh_body(refresh_token: &str) -> serde_json::Value {
    serde_json::json!({ "refresh_token": refresh_token })
}

/// Current wall-clock time in unix seconds.
#[must_use]
pub fn now_secs() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let secs = (js_sys::Date::now() / 1000.0) as i64;
        secs
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
    }
}

/// Thin facade over the data and auth REST services.
#[derive(Clone, Debug)]
pub struct SupabaseClient {
    config: BackendConfig,
    access_token: Option<String>,
}

impl SupabaseClient {
    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        Self { config, access_token: None }
    }

    /// Authorize data calls as the session's user instead of the anon role.
    #[must_use]
    pub fn with_session(mut self, session: Option<&Session>) -> Self {
        self.access_token = session.map(|s| s.access_token.clone());
        self
    }

    /// `Authorization` header value: the user token, else the anon key.
    #[must_use]
    pub fn bearer(&self) -> String {
        let token = self.access_token.as_deref().unwrap_or(&self.config.anon_key);
        format!("Bearer {token}")
    }

    fn ensure_configured(&self) -> Result<(), BackendError> {
        if self.config.is_configured() { Ok(()) } else { Err(BackendError::Unavailable) }
    }
}

#[cfg(feature = "hydrate")]
impl SupabaseClient {
    fn authorized(&self, builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        builder
            .header("apikey", &self.config.anon_key)
            .header("Authorization", &self.bearer())
            .header("Accept", "application/json")
    }

    async fn post_auth(&self, path: &str, body: &serde_json::Value) -> Result<String, BackendError> {
        let request = self
            .authorized(gloo_net::http::Request::post(&self.config.auth_endpoint(path)))
            .json(body)
            .map_err(|e| BackendError::Transport(e.to_string()))?;
        send(request).await
    }
}

#[cfg(feature = "hydrate")]
async fn send(request: gloo_net::http::Request) -> Result<String, BackendError> {
    let resp = request
        .send()
        .await
        .map_err(|e| BackendError::Transport(e.to_string()))?;
    let ok = resp.ok();
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| BackendError::Transport(e.to_string()))?;
    if !ok {
        return Err(BackendError::Api { status, message: parse_error_message(status, &body) });
    }
    Ok(body)
}

#[async_trait(?Send)]
impl SupplyStore for SupabaseClient {
    async fn fetch_all(&self) -> Result<Vec<SupplyItem>, BackendError> {
        self.ensure_configured()?;
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.rest_endpoint(SUPPLY_TABLE);
            let request = self
                .authorized(gloo_net::http::Request::get(&url).query(select_all_query()))
                .build()
                .map_err(|e| BackendError::Transport(e.to_string()))?;
            let body = send(request).await?;
            parse_supply_rows(&body).map_err(BackendError::Parse)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(BackendError::Unavailable)
        }
    }

    async fn insert(&self, payload: &SupplyPayload) -> Result<(), BackendError> {
        self.ensure_configured()?;
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.rest_endpoint(SUPPLY_TABLE);
            let request = self
                .authorized(gloo_net::http::Request::post(&url))
                .header("Prefer", PREFER_REPRESENTATION)
                .json(&[payload])
                .map_err(|e| BackendError::Transport(e.to_string()))?;
            send(request).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            Err(BackendError::Unavailable)
        }
    }

    async fn update(&self, id: &str, payload: &SupplyPayload) -> Result<(), BackendError> {
        self.ensure_configured()?;
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.rest_endpoint(SUPPLY_TABLE);
            let filter = id_filter(id);
            let request = self
                .authorized(gloo_net::http::Request::patch(&url).query([("id", filter.as_str())]))
                .header("Prefer", PREFER_REPRESENTATION)
                .json(payload)
                .map_err(|e| BackendError::Transport(e.to_string()))?;
            send(request).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, payload);
            Err(BackendError::Unavailable)
        }
    }
}

#[async_trait(?Send)]
impl AuthBackend for SupabaseClient {
    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, BackendError> {
        self.ensure_configured()?;
        #[cfg(feature = "hydrate")]
        {
            let body = serde_json::to_value(credentials).map_err(|e| BackendError::Parse(e.to_string()))?;
            let text = self.post_auth(&token_path("password"), &body).await?;
            parse_session(&text, now_secs()).map_err(BackendError::Parse)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(BackendError::Unavailable)
        }
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<SignUpOutcome, BackendError> {
        self.ensure_configured()?;
        #[cfg(feature = "hydrate")]
        {
            let body = serde_json::to_value(credentials).map_err(|e| BackendError::Parse(e.to_string()))?;
            let text = self.post_auth("signup", &body).await?;
            parse_sign_up(&text, now_secs()).map_err(BackendError::Parse)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(BackendError::Unavailable)
        }
    }

    async fn sign_out(&self, session: &Session) -> Result<(), BackendError> {
        self.ensure_configured()?;
        #[cfg(feature = "hydrate")]
        {
            let scoped = self.clone().with_session(Some(session));
            let request = scoped
                .authorized(gloo_net::http::Request::post(&scoped.config.auth_endpoint("logout")))
                .build()
                .map_err(|e| BackendError::Transport(e.to_string()))?;
            send(request).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
            Err(BackendError::Unavailable)
        }
    }

    async fn refresh(&self, refresh_token: &str) -> Result<Session, BackendError> {
        self.ensure_configured()?;
        #[cfg(feature = "hydrate")]
        {
            let text = self
                .post_auth(&token_path("refresh_token"), &refresh_body(refresh_token))
                .await?;
            parse_session(&text, now_secs()).map_err(BackendError::Parse)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = refresh_token;
            Err(BackendError::Unavailable)
        }
    }
}
