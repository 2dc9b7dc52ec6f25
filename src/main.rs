//! persona-service server entry point.
//!
//! Starts the Axum HTTP server with the persona CRUD endpoints.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use persona_service::api;
use persona_service::app_state::AppState;
use persona_service::config::ServiceConfig;
use persona_service::persistence::Connector;
use persona_service::service::PersonaService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = ServiceConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting persona-service");

    // Build service layer; connections are opened per request, so no
    // store round-trip happens at startup.
    let persona_service = Arc::new(PersonaService::new(Connector::new(config.database_url)));

    // Build application state
    let app_state = AppState { persona_service };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
