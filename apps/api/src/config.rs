use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Missing required variables fail at startup, never per-request.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    /// Directory scanned for resume PDFs at index-build time.
    pub knowledge_dir: String,
    /// Directory holding the persisted vector index.
    pub vector_dir: String,
    /// Append-only feedback log file.
    pub feedback_log: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            knowledge_dir: std::env::var("KNOWLEDGE_DIR")
                .unwrap_or_else(|_| "knowledge_base".to_string()),
            vector_dir: std::env::var("VECTOR_DIR")
                .unwrap_or_else(|_| "vector_store".to_string()),
            feedback_log: std::env::var("FEEDBACK_LOG")
                .unwrap_or_else(|_| "questions_log.txt".to_string()),
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
