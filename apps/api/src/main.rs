mod config;
mod embeddings;
mod errors;
mod extraction;
mod routes;
mod scan;
mod scoring;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::embeddings::HttpEmbedder;
use crate::routes::build_router;
use crate::scoring::ScoringConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Scanner API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the embedding backend client
    let embedder = Arc::new(HttpEmbedder::new(
        config.embeddings_url.clone(),
        config.embeddings_api_key.clone(),
        config.embeddings_model.clone(),
    ));
    info!(
        "Embedding client initialized (model: {})",
        config.embeddings_model
    );

    // Scoring constants: weights, thresholds, bonus/penalty table
    let scoring = Arc::new(ScoringConfig::default());
    info!(
        "Scoring weights: skill={} experience={} semantic={}",
        scoring.skill_weight, scoring.experience_weight, scoring.semantic_weight
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        embedder,
        scoring,
    };

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
