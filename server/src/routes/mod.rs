//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the health-check and redirect endpoints with Leptos SSR
//! rendering under a single Axum router. The WASM bundle and stylesheet are
//! served from `/pkg`; other static assets (the logo) come from the site
//! root, and any unknown path renders the app's not-found page.


use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use leptos::prelude::provide_context;
use leptos_axum::{LeptosRoutes, file_and_error_handler_with_context, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Routes that do not render the app.
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/protected", get(redirect_protected_to_dashboard))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn redirect_protected_to_dashboard() -> Redirect {
    Redirect::permanent(client::util::auth::DASHBOARD_PATH)
}

/// Full host router: API routes, Leptos SSR, and static assets.
pub fn app(state: AppState) -> Router {
    let routes = generate_route_list(client::app::App);
    let site_root = PathBuf::from(state.leptos_options.site_root.as_ref());
    let backend = state.backend.clone();
    let provide_backend = move || provide_context((*backend).clone());

    api_routes()
        .leptos_routes_with_context(&state, routes, provide_backend.clone(), {
            let options = state.leptos_options.clone();
            move || client::app::shell(options.clone())
        })
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback(file_and_error_handler_with_context::<AppState, _>(provide_backend, client::app::shell))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
