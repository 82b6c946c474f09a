//! Browser persistence of the auth session.
//!
//! The session is stored as JSON in `localStorage` so a reload keeps the
//! user signed in. Server rendering and native tests have no storage; reads
//! return `None` and writes no-op there.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. A storage quota error or a corrupt entry
//! degrades to "signed out" rather than surfacing an error.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::net::types::Session;

/// `localStorage` key holding the serialized session.
pub const SESSION_KEY: &str = "medsupply.auth";

/// Serialize a session for storage.
#[must_use]
pub fn encode_session(session: &Session) -> Option<String> {
    serde_json::to_string(session).ok()
}

/// Decode a stored entry. Corrupt entries read as absent.
#[must_use]
pub fn decode_session(raw: &str) -> Option<Session> {
    serde_json::from_str(raw).ok()
}

/// Read the persisted session, if any.
pub fn load_session() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        let raw = storage.get_item(SESSION_KEY).ok()??;
        decode_session(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist `session`, or clear the entry when `None`.
pub fn save_session(session: Option<&Session>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let result = match session.and_then(encode_session) {
            Some(raw) => storage.set_item(SESSION_KEY, &raw),
            None => storage.remove_item(SESSION_KEY),
        };
        if result.is_err() {
            leptos::logging::warn!("session storage write failed");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}
