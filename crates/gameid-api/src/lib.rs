//! GameID API /v1: identifier validation over HTTP
pub mod config;
pub mod handlers;
pub mod metrics;
pub mod middleware;

use axum::{
    routing::{get, post},
    Router,
};
use config::ApiConfig;
use gameid_core::Registry;
use metrics::ValidationMetrics;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
    pub metrics: Arc<ValidationMetrics>,
}

impl AppState {
    pub fn new(registry: Arc<Registry>) -> Result<Self, prometheus::Error> {
        Ok(Self {
            registry,
            metrics: Arc::new(ValidationMetrics::new()?),
        })
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/v1/validate", post(handlers::validate))
        .route("/v1/games", get(handlers::list_games))
        .route("/v1/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .layer(axum::middleware::from_fn(middleware::log_requests))
        .layer(middleware::cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn load_registry(config: &ApiConfig) -> anyhow::Result<Registry> {
    match &config.catalog_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading catalog");
            Ok(Registry::load(path)?)
        }
        None => Ok(Registry::builtin().clone()),
    }
}

pub async fn run(config: ApiConfig) -> anyhow::Result<()> {
    let registry = load_registry(&config)?;
    let state = AppState::new(Arc::new(registry))?;
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    tracing::info!("GameID API listening on {}", config.addr);
    axum::serve(listener, app).await?;
    Ok(())
}
