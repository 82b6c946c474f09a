//! Seams between UI flows and the hosted backend.
//!
//! DESIGN
//! ======
//! Flows in `state` are generic over these traits so they can run against
//! the real `SupabaseClient` in the browser and against in-memory fakes in
//! tests. Futures are `?Send` because browser fetch futures are not `Send`.

use async_trait::async_trait;

use super::types::{Credentials, Session, SignUpOutcome, SupplyItem, SupplyPayload};

/// Errors produced by backend calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// The request never produced a response (network, CORS, DNS).
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success status. `message` is the
    /// backend's own text and is shown to users verbatim.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// No backend is reachable from this context (server rendering, or no
    /// configuration was rendered into the page).
    #[error("backend unavailable")]
    Unavailable,
}

/// Read/insert/update access to the inventory collection.
#[async_trait(?Send)]
pub trait SupplyStore {
    /// Fetch every record. Filtering happens client-side.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] on transport, status, or decode failure.
    async fn fetch_all(&self) -> Result<Vec<SupplyItem>, BackendError>;

    /// Insert one record. The backend assigns its id.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] on transport or status failure.
    async fn insert(&self, payload: &SupplyPayload) -> Result<(), BackendError>;

    /// Replace every column of the record with the given id.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] on transport or status failure.
    async fn update(&self, id: &str, payload: &SupplyPayload) -> Result<(), BackendError>;
}

/// Credential and session operations of the auth backend.
#[async_trait(?Send)]
pub trait AuthBackend {
    /// Exchange email + password for a session.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`]; `Api` carries the backend's message.
    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, BackendError>;

    /// Register a new account.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`]; `Api` carries the backend's message.
    async fn sign_up(&self, credentials: &Credentials) -> Result<SignUpOutcome, BackendError>;

    /// Revoke the session on the backend.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] on transport or status failure.
    async fn sign_out(&self, session: &Session) -> Result<(), BackendError>;

    /// Trade a refresh token for a fresh session.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if the token is rejected or the call fails.
    async fn refresh(&self, refresh_token: &str) -> Result<Session, BackendError>;
}
