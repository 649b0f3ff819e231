//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! A `.env` file in the working directory is honored (loaded in `main.rs`).
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `STATIC_DIR` - Directory served under `/app` (default: `static`)
//! - `MAX_CHIRP_LENGTH` - Maximum chirp body length in bytes (default: 140)
//! - `BANNED_WORDS` - Comma-separated words to mask
//!   (default: `kerfuffle,sharbert,fornax`)

use anyhow::Result;
use std::env;
use std::path::PathBuf;

use crate::application::services::ChirpValidator;
use crate::domain::profanity::DEFAULT_BANNED_WORDS;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Root directory for the static file server mounted at `/app`.
    pub static_dir: PathBuf,
    /// Chirps longer than this many bytes are rejected.
    pub max_chirp_length: usize,
    /// Words masked in accepted chirps, matched case-insensitively.
    pub banned_words: Vec<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparseable numeric values fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("static"));

        let max_chirp_length = env::var("MAX_CHIRP_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(ChirpValidator::DEFAULT_MAX_LENGTH);

        let banned_words = env::var("BANNED_WORDS")
            .map(|v| parse_word_list(&v))
            .unwrap_or_else(|_| DEFAULT_BANNED_WORDS.iter().map(|w| w.to_string()).collect());

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            static_dir,
            max_chirp_length,
            banned_words,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `max_chirp_length` is 0
    /// - `banned_words` is empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.max_chirp_length == 0 {
            anyhow::bail!("MAX_CHIRP_LENGTH must be greater than 0");
        }

        if self.banned_words.is_empty() {
            anyhow::bail!("BANNED_WORDS must contain at least one word");
        }

        Ok(())
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Static dir: {}", self.static_dir.display());
        tracing::info!("  Max chirp length: {}", self.max_chirp_length);
        tracing::info!("  Banned words: {}", self.banned_words.len());
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Splits a comma-separated list, trimming entries and dropping empty ones.
fn parse_word_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
