use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub youtube: YouTubeConfig,
    #[serde(default)]
    pub collect: CollectConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Deserialize)]
pub struct YouTubeConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    // Loaded from env
    #[serde(skip)]
    pub api_key: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct CollectConfig {
    #[serde(default)]
    pub on_video_error: FailurePolicy,
}

/// What to do when comment or reply pagination fails for one video.
/// Playlist resolution is always best-effort and is not governed by this.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Abort the whole run; no partial table is produced.
    #[default]
    Abort,
    /// Drop the failing video's records, log a warning, keep going.
    SkipVideo,
}

#[derive(Debug, Deserialize)]
pub struct ExportConfig {
    pub output_path: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("comments.csv"),
        }
    }
}

fn default_base_url() -> String {
    "https://www.googleapis.com/youtube/v3".to_string()
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config_text =
            std::fs::read_to_string("config.toml").context("Failed to read config.toml")?;
        let mut config: AppConfig =
            toml::from_str(&config_text).context("Failed to parse config.toml")?;

        config.youtube.api_key =
            std::env::var("YOUTUBE_API_KEY").context("YOUTUBE_API_KEY not set")?;

        Ok(config)
    }
}
