pub mod health;

use axum::{routing::get, routing::post, Router};

use crate::scan::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/scan", post(handlers::handle_scan))
        .route("/api/v1/extract", post(handlers::handle_extract))
        .with_state(state)
}
