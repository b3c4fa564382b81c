mod ai;
mod completions;
mod config;
mod envelope;
mod errors;
mod notifications;
mod routes;
mod state;

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::completions::CompletionClient;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; a missing credential is not fatal here
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting AutoTasker gateway v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the completion client, if a credential is present. Without
    // one the gateway still serves; AI routes answer 400 per request.
    let completions = match config.openai_api_key.clone() {
        Some(key) => {
            info!("Completion client initialized (model: {})", completions::MODEL);
            Some(CompletionClient::new(
                key,
                &config.openai_base_url,
                config.completion_timeout_secs.map(Duration::from_secs),
            ))
        }
        None => {
            warn!("OPENAI_API_KEY is not set; AI routes will reject requests");
            None
        }
    };

    // Build app state
    let state = AppState { completions };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
