//! Embedding client — the single point of entry for all sentence-embedding
//! calls in the scanner.
//!
//! No other module may call the embedding backend directly. Scoring code
//! sees only the `Embedder` trait, so the semantic scorer stays testable
//! with a deterministic stub.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Default sentence-embedding model requested from the backend.
/// Overridable via EMBEDDINGS_MODEL for backends that serve several models.
pub const DEFAULT_MODEL: &str = "all-MiniLM-L6-v2";
const MAX_RETRIES: u32 = 3;
/// Bound on the content-hash embedding cache. Oldest-insertion-order is not
/// tracked; the cache is simply cleared when full, which is fine for a
/// per-process memo of hot (resume, JD) pairs.
const CACHE_CAPACITY: usize = 1000;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Backend returned no embedding vectors")]
    EmptyResponse,

    #[error("Backend unavailable after {retries} retries")]
    Unavailable { retries: u32 },
}

/// Narrow seam over the external sentence-embedding model.
///
/// Implementations must be safe for concurrent use; the service holds one
/// instance in `AppState` for the process lifetime. Determinism is assumed
/// by the idempotence guarantee of scoring — a backend that returns
/// different vectors for identical text is a known limitation, not a bug
/// in the scorers.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;
}

#[derive(Debug, Serialize)]
struct EmbeddingsRequest<'a> {
    model: &'a str,
    input: Vec<&'a str>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingsResponse {
    data: Vec<EmbeddingRow>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingRow {
    embedding: Vec<f32>,
}

#[derive(Debug, Deserialize)]
struct BackendError {
    error: BackendErrorBody,
}

#[derive(Debug, Deserialize)]
struct BackendErrorBody {
    message: String,
}

/// HTTP embedder speaking the OpenAI-compatible `/embeddings` wire format
/// (also served by text-embeddings-inference and LocalAI for
/// sentence-transformers models). Retries 429 and 5xx with exponential
/// backoff; other failures surface immediately.
pub struct HttpEmbedder {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    model: String,
    cache: Mutex<HashMap<u64, Vec<f32>>>,
}

impl HttpEmbedder {
    pub fn new(endpoint: String, api_key: Option<String>, model: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            endpoint,
            api_key,
            model,
            cache: Mutex::new(HashMap::new()),
        }
    }

    fn cache_key(&self, text: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.model.hash(&mut hasher);
        text.hash(&mut hasher);
        hasher.finish()
    }

    fn cache_get(&self, key: u64) -> Option<Vec<f32>> {
        self.cache.lock().ok()?.get(&key).cloned()
    }

    fn cache_put(&self, key: u64, vector: Vec<f32>) {
        if let Ok(mut cache) = self.cache.lock() {
            if cache.len() >= CACHE_CAPACITY {
                cache.clear();
            }
            cache.insert(key, vector);
        }
    }

    async fn call_backend(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let request_body = EmbeddingsRequest {
            model: &self.model,
            input: vec![text],
        };

        let mut last_error: Option<EmbeddingError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "Embedding call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let mut request = self
                .client
                .post(&self.endpoint)
                .header("content-type", "application/json")
                .json(&request_body);
            if let Some(key) = &self.api_key {
                request = request.bearer_auth(key);
            }

            let response = match request.send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(EmbeddingError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Embedding backend returned {}: {}", status, body);
                last_error = Some(EmbeddingError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<BackendError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(EmbeddingError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let parsed: EmbeddingsResponse = response.json().await?;
            let vector = parsed
                .data
                .into_iter()
                .next()
                .map(|row| row.embedding)
                .ok_or(EmbeddingError::EmptyResponse)?;

            debug!("Embedding call succeeded: dims={}", vector.len());
            return Ok(vector);
        }

        Err(last_error.unwrap_or(EmbeddingError::Unavailable {
            retries: MAX_RETRIES,
        }))
    }
}

#[async_trait]
impl Embedder for HttpEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let key = self.cache_key(text);
        if let Some(hit) = self.cache_get(key) {
            debug!("Embedding cache hit");
            return Ok(hit);
        }

        let vector = self.call_backend(text).await?;
        self.cache_put(key, vector.clone());
        Ok(vector)
    }
}

/// Standard normalized dot product. Returns 0.0 for mismatched or
/// zero-magnitude vectors rather than NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.is_empty() || a.len() != b.len() {
        return 0.0;
    }

    let mut dot = 0.0_f32;
    let mut norm_a = 0.0_f32;
    let mut norm_b = 0.0_f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denominator = norm_a.sqrt() * norm_b.sqrt();
    if denominator == 0.0 {
        return 0.0;
    }
    dot / denominator
}
