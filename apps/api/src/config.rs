use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_MODEL;

/// Storage key of the saved-outfit list when `WARDROBE_KEY` is not set.
pub const DEFAULT_WARDROBE_KEY: &str = "fashionmate.savedOutfits";

/// Application configuration loaded from environment variables.
/// Only `PORT` can fail at startup; every other variable has a fallback.
#[derive(Debug, Clone)]
pub struct Config {
    /// `None` runs the service on the built-in sample recommender.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    /// `None` keeps the wardrobe in process memory.
    pub redis_url: Option<String>,
    pub wardrobe_key: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            gemini_model: optional_env("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            redis_url: optional_env("REDIS_URL"),
            wardrobe_key: optional_env("WARDROBE_KEY")
                .unwrap_or_else(|| DEFAULT_WARDROBE_KEY.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an env var, treating unset and blank values alike.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
