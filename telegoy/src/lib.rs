//! # telegoy
//!
//! Uploads photos and videos to a Telegram chat as media-group albums through a Bot API server
//! (by default a local `telegram-bot-api` on port 8081). Captions come from a sidecar `.txt` per
//! file plus a shared static caption; videos are probed with ffprobe and get an ffmpeg thumbnail.

pub mod album;
pub mod cli;
pub mod config;
pub mod core;
pub mod doctor;
pub mod media;
pub mod probe;
pub mod runner;
pub mod telegram;

pub use cli::{load_settings, Cli, Commands, ConfigArgs};
pub use config::{Overrides, Settings};
pub use crate::core::{
    init_tracing, ChatTarget, MediaError, MediaItem, MediaKind, MediaSender, Result, TelegoyError,
    VideoMeta,
};
pub use probe::{FfmpegProbe, VideoProbe};
pub use runner::{deliver, prepare, run_send, send_files, UploadPlan, UploadReport};
pub use telegram::TelegramSender;
