mod config;
mod routes;
mod state;

use leptos::prelude::get_configuration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine; the process environment still applies.
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenv {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = config::ServerConfig::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
    })?;
    let leptos_options = get_configuration(None)?.leptos_options;

    tracing::info!(backend = %config.backend.url, "backend configured");
    let state = state::AppState::new(config.backend, leptos_options);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!(port = config.port, "medsupply listening");
    axum::serve(listener, app).await?;
    Ok(())
}
