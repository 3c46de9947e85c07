//! Core types: upload destination and media items.

mod chat;
mod media;

pub use chat::ChatTarget;
pub use media::{MediaItem, MediaKind, VideoMeta};
