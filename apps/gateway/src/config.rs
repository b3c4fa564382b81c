use anyhow::{Context, Result};

use crate::completions::DEFAULT_BASE_URL;

/// Application configuration loaded from environment variables.
///
/// The provider credential is deliberately optional: a process started
/// without one still serves `/` and `/notification/send`, and the AI routes
/// answer with a client error per request instead of failing at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    /// Outbound completion timeout. `None` leaves the transport default.
    pub completion_timeout_secs: Option<u64>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            completion_timeout_secs: match std::env::var("COMPLETION_TIMEOUT_SECS") {
                Ok(value) => Some(
                    value
                        .parse::<u64>()
                        .context("COMPLETION_TIMEOUT_SECS must be a whole number of seconds")?,
                ),
                Err(_) => None,
            },
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
