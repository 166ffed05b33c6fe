//! Semantic sub-score: cosine similarity between sentence embeddings of the
//! resume and the job description, scaled to [0,100].
//!
//! Failure policy: an embedding-backend failure never fails the scan. The
//! score falls closed to 0 and `degraded` is set, which tells the combiner
//! to renormalize the remaining weights.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::embeddings::{cosine_similarity, Embedder};
use crate::scoring::{round2, ScoringConfig};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticScore {
    /// Cosine similarity x 100, clamped below at 0. Negative similarity is
    /// not meaningful for matching.
    pub score: f64,
    /// True when the embedding backend failed and the score is a fail-closed
    /// default rather than a measurement.
    pub degraded: bool,
}

/// Embeds both texts (truncated, prefixed) and scores their similarity.
/// Empty input on either side is a valid degenerate case and scores 0
/// without touching the backend.
pub async fn score_semantic(
    resume_text: &str,
    job_description: &str,
    embedder: &dyn Embedder,
    config: &ScoringConfig,
) -> SemanticScore {
    if resume_text.trim().is_empty() || job_description.trim().is_empty() {
        return SemanticScore {
            score: 0.0,
            degraded: false,
        };
    }

    let resume_input = format!("Resume: {}", truncate(resume_text, config.semantic_max_chars));
    let jd_input = format!("Job: {}", truncate(job_description, config.semantic_max_chars));

    let resume_embedding = match embedder.embed(&resume_input).await {
        Ok(v) => v,
        Err(e) => {
            warn!("Resume embedding failed, semantic score degraded: {e}");
            return SemanticScore {
                score: 0.0,
                degraded: true,
            };
        }
    };
    let jd_embedding = match embedder.embed(&jd_input).await {
        Ok(v) => v,
        Err(e) => {
            warn!("JD embedding failed, semantic score degraded: {e}");
            return SemanticScore {
                score: 0.0,
                degraded: true,
            };
        }
    };

    let similarity = cosine_similarity(&resume_embedding, &jd_embedding) as f64;
    SemanticScore {
        score: round2((similarity * 100.0).max(0.0)),
        degraded: false,
    }
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
