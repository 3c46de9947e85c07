//! Resolved settings: CLI overrides > environment > config file > defaults.

use std::env;
use std::path::PathBuf;

use reqwest::Url;

use super::file::FileConfig;
use crate::core::{ChatTarget, Result, TelegoyError};

pub const DEFAULT_API_URL: &str = "http://localhost:8081";
pub const DEFAULT_STATIC_CAPTION_PATH: &str = "static_caption.txt";
/// Telegram rejects thumbnails larger than 320px on either side.
pub const MAX_THUMBNAIL_SIZE: u32 = 320;

/// Values given on the command line; `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config_path: Option<PathBuf>,
    pub chat_id: Option<String>,
    pub api_url: Option<String>,
    pub bot_token: Option<String>,
    pub static_caption_path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Settings {
    /// TELEGOY_CHAT_ID
    pub chat_id: Option<String>,
    /// TELEGOY_API_URL; base URL of the Bot API server
    pub api_url: String,
    /// TELEGOY_BOT_TOKEN, TELOXIDE_TOKEN or BOT_TOKEN
    pub bot_token: Option<String>,
    /// TELEGOY_STATIC_CAPTION_PATH; appended to every caption
    pub static_caption_path: PathBuf,
    /// TELEGOY_FFMPEG
    pub ffmpeg: String,
    /// TELEGOY_FFPROBE
    pub ffprobe: String,
    /// TELEGOY_THUMBNAIL_SIZE; bounding box of generated video thumbnails
    pub thumbnail_size: u32,
    /// TELEGOY_LOG_FILE or LOG_FILE
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            chat_id: None,
            api_url: DEFAULT_API_URL.to_string(),
            bot_token: None,
            static_caption_path: PathBuf::from(DEFAULT_STATIC_CAPTION_PATH),
            ffmpeg: "ffmpeg".to_string(),
            ffprobe: "ffprobe".to_string(),
            thumbnail_size: MAX_THUMBNAIL_SIZE,
            log_file: None,
        }
    }
}

/// Trimmed value, `None` when blank.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// First non-empty variable among `keys`.
fn env_var(keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| non_blank(env::var(k).ok()))
}

impl Settings {
    /// Loads the config file, then applies environment variables, then `overrides`.
    pub fn load(overrides: Overrides) -> Result<Self> {
        let file = FileConfig::load(overrides.config_path.as_deref())?;
        let defaults = Settings::default();

        let thumbnail_size = match env_var(&["TELEGOY_THUMBNAIL_SIZE"]) {
            Some(s) => s.parse().map_err(|_| {
                TelegoyError::Config(format!("TELEGOY_THUMBNAIL_SIZE is not a number: {}", s))
            })?,
            None => file.thumbnail_size.unwrap_or(defaults.thumbnail_size),
        };

        Ok(Self {
            chat_id: non_blank(overrides.chat_id)
                .or_else(|| env_var(&["TELEGOY_CHAT_ID"]))
                .or_else(|| non_blank(file.chat_id())),
            api_url: non_blank(overrides.api_url)
                .or_else(|| env_var(&["TELEGOY_API_URL"]))
                .or_else(|| non_blank(file.api_url))
                .unwrap_or(defaults.api_url),
            bot_token: non_blank(overrides.bot_token)
                .or_else(|| env_var(&["TELEGOY_BOT_TOKEN", "TELOXIDE_TOKEN", "BOT_TOKEN"]))
                .or_else(|| non_blank(file.bot_token)),
            static_caption_path: overrides
                .static_caption_path
                .or_else(|| env_var(&["TELEGOY_STATIC_CAPTION_PATH"]).map(PathBuf::from))
                .or(file.static_caption_path)
                .unwrap_or(defaults.static_caption_path),
            ffmpeg: env_var(&["TELEGOY_FFMPEG"])
                .or(file.ffmpeg)
                .unwrap_or(defaults.ffmpeg),
            ffprobe: env_var(&["TELEGOY_FFPROBE"])
                .or(file.ffprobe)
                .unwrap_or(defaults.ffprobe),
            thumbnail_size,
            log_file: env_var(&["TELEGOY_LOG_FILE", "LOG_FILE"])
                .map(PathBuf::from)
                .or(file.log_file),
        })
    }

    /// Checks values that do not depend on the command. Call after load() to fail fast.
    pub fn validate(&self) -> Result<()> {
        self.api_url()?;
        if self.thumbnail_size == 0 || self.thumbnail_size > MAX_THUMBNAIL_SIZE {
            return Err(TelegoyError::Config(format!(
                "thumbnail_size must be between 1 and {}, got {}",
                MAX_THUMBNAIL_SIZE, self.thumbnail_size
            )));
        }
        Ok(())
    }

    pub fn api_url(&self) -> Result<Url> {
        let url = Url::parse(&self.api_url).map_err(|e| {
            TelegoyError::Config(format!("api_url is not a valid URL ({}): {}", e, self.api_url))
        })?;
        if url.cannot_be_a_base() {
            return Err(TelegoyError::Config(format!(
                "api_url must be an absolute http(s) URL: {}",
                self.api_url
            )));
        }
        Ok(url)
    }

    pub fn chat_target(&self) -> Result<ChatTarget> {
        self.chat_id
            .as_deref()
            .ok_or_else(|| {
                TelegoyError::Config(
                    "chat id not found in CLI (--chat-id), env (TELEGOY_CHAT_ID) or config file"
                        .to_string(),
                )
            })?
            .parse()
    }

    /// Non-blank token; a blank value counts as missing.
    pub fn bot_token(&self) -> Result<&str> {
        self.bot_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                TelegoyError::Config(
                    "bot token not found in CLI (--token), env (TELEGOY_BOT_TOKEN, TELOXIDE_TOKEN, BOT_TOKEN) or config file"
                        .to_string(),
                )
            })
    }
}
