use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Loaded once at startup and passed explicitly to client constructors;
/// read-only thereafter.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            google_api_key: require_env("GOOGLE_API_KEY")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
