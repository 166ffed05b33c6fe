use anyhow::{Context, Result};

use crate::embeddings::DEFAULT_MODEL;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenAI-compatible `/embeddings` endpoint of the sentence-embedding
    /// backend.
    pub embeddings_url: String,
    /// Optional bearer token for the embedding backend.
    pub embeddings_api_key: Option<String>,
    pub embeddings_model: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            embeddings_url: require_env("EMBEDDINGS_URL")?,
            embeddings_api_key: std::env::var("EMBEDDINGS_API_KEY").ok(),
            embeddings_model: std::env::var("EMBEDDINGS_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
