//! Environment-driven configuration for the demo binary.

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Directory holding the persisted key-value state file.
pub const DATA_DIR_VAR: &str = "MAINMARKET_DATA_DIR";

/// Base URL for the video-chat hand-off.
pub const VIDEO_CHAT_URL_VAR: &str = "MAINMARKET_VIDEO_CHAT_URL";

const DEFAULT_DATA_DIR: &str = "./.mainmarket";
const DEFAULT_VIDEO_CHAT_URL: &str = "https://mainmarket.example/video-chat";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Where the JSON state file lives.
    pub data_dir: PathBuf,
    /// Video-chat destination passed through to the catalog controller.
    pub video_chat_url: Url,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = lookup(DATA_DIR_VAR).unwrap_or_else(|| DEFAULT_DATA_DIR.to_owned());

        let raw_url =
            lookup(VIDEO_CHAT_URL_VAR).unwrap_or_else(|| DEFAULT_VIDEO_CHAT_URL.to_owned());
        let video_chat_url = Url::parse(&raw_url).map_err(|e| {
            ConfigError::InvalidEnvVar(VIDEO_CHAT_URL_VAR.to_owned(), e.to_string())
        })?;

        Ok(Self {
            data_dir: PathBuf::from(data_dir),
            video_chat_url,
        })
    }
}
