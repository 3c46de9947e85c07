//! Optional TOML config file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::{Result, TelegoyError};

/// Read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// `chat_id` may be written as a TOML integer or string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ChatIdValue {
    Int(i64),
    Str(String),
}

/// Raw file contents; every key optional, unknown keys rejected.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    chat_id: Option<ChatIdValue>,
    pub api_url: Option<String>,
    pub bot_token: Option<String>,
    pub static_caption_path: Option<PathBuf>,
    pub ffmpeg: Option<String>,
    pub ffprobe: Option<String>,
    pub thumbnail_size: Option<u32>,
    pub log_file: Option<PathBuf>,
}

impl FileConfig {
    /// Loads `explicit` (must exist) or `./config.toml` when present; otherwise an empty config.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(TelegoyError::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                Self::read(path)
            }
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    Self::read(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
            .map_err(|e| TelegoyError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn parse(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn chat_id(&self) -> Option<String> {
        self.chat_id.as_ref().map(|v| match v {
            ChatIdValue::Int(id) => id.to_string(),
            ChatIdValue::Str(s) => s.clone(),
        })
    }
}
