//! Transport abstraction for delivering media.
//!
//! [`MediaSender`] is transport-agnostic; [`crate::telegram::TelegramSender`] implements it via teloxide.
//! Tests substitute a recording implementation.

use async_trait::async_trait;

use super::error::Result;
use super::types::{ChatTarget, MediaItem};

/// Sends media to a chat. Message ids are transport-specific (Telegram: numeric).
#[async_trait]
pub trait MediaSender: Send + Sync {
    /// Sends 2..=10 items as one album. Returns the ids of the created messages.
    async fn send_album(&self, chat: &ChatTarget, items: &[MediaItem]) -> Result<Vec<i32>>;

    /// Sends one item as a standalone photo or video message.
    async fn send_single(&self, chat: &ChatTarget, item: &MediaItem) -> Result<i32>;

    /// Returns the bot's username; used to verify token and server reachability.
    async fn whoami(&self) -> Result<String>;
}
