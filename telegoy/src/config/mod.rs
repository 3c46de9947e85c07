//! Configuration: optional TOML file, environment variables and CLI overrides merged into [`Settings`].

mod file;
mod settings;

#[cfg(test)]
mod tests;

pub use file::{FileConfig, DEFAULT_CONFIG_FILE};
pub use settings::{
    Overrides, Settings, DEFAULT_API_URL, DEFAULT_STATIC_CAPTION_PATH, MAX_THUMBNAIL_SIZE,
};
