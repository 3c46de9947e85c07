//! Core types and traits: MediaSender, media items, chat target, error, logger.

pub mod error;
pub mod logger;
pub mod sender;
pub mod types;

pub use error::{MediaError, Result, TelegoyError};
pub use logger::init_tracing;
pub use sender::MediaSender;
pub use types::{ChatTarget, MediaItem, MediaKind, VideoMeta};
