//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host never calls the backend itself; it only carries the settings the
//! server-rendered shell hands to the browser.

use std::sync::Arc;

use client::net::config::BackendConfig;
use leptos::prelude::LeptosOptions;

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<BackendConfig>,
    pub leptos_options: LeptosOptions,
}

impl AppState {
    #[must_use]
    pub fn new(backend: BackendConfig, leptos_options: LeptosOptions) -> Self {
        Self { backend: Arc::new(backend), leptos_options }
    }
}

impl axum::extract::FromRef<AppState> for LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.clone()
    }
}
