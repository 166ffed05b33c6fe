use std::sync::Arc;

use crate::config::Config;
use crate::embeddings::Embedder;
use crate::scoring::ScoringConfig;

/// Shared application state injected into all route handlers via Axum
/// extractors. Read-only after startup; scans never mutate it.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// The sentence-embedding backend. Swappable seam: production uses
    /// `HttpEmbedder`, tests stub it.
    pub embedder: Arc<dyn Embedder>,
    /// Weights, thresholds, and bonus constants shared by every scan.
    pub scoring: Arc<ScoringConfig>,
}
