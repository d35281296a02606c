use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::export::pdf::FontAssets;

/// Application configuration loaded from environment variables.
/// Fails at startup if a required variable is missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    /// Text-generation inference endpoint.
    pub textgen_url: String,
    pub textgen_api_token: Option<String>,
    /// Model served by the endpoint. Logged only; the endpoint decides.
    pub textgen_model: String,
    pub max_new_tokens: u32,
    pub pdf_fonts: FontAssets,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            textgen_url: require_env("TEXTGEN_URL")?,
            textgen_api_token: std::env::var("TEXTGEN_API_TOKEN")
                .ok()
                .filter(|t| !t.is_empty()),
            textgen_model: env_or("TEXTGEN_MODEL", "sshleifer/tiny-gpt2"),
            max_new_tokens: env_or("MAX_NEW_TOKENS", "300")
                .parse::<u32>()
                .context("MAX_NEW_TOKENS must be a positive integer")?,
            pdf_fonts: FontAssets {
                regular: PathBuf::from(env_or("PDF_FONT_REGULAR", "assets/DejaVuSans.ttf")),
                bold: PathBuf::from(env_or("PDF_FONT_BOLD", "assets/DejaVuSans-Bold.ttf")),
            },
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
