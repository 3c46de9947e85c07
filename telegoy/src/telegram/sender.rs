//! Wraps teloxide::Bot and implements [`crate::core::MediaSender`].

use async_trait::async_trait;
use reqwest::Url;
use teloxide::payloads::{SendPhotoSetters, SendVideoSetters};
use teloxide::prelude::*;
use teloxide::types::{ChatId, InputFile, InputMedia, InputMediaPhoto, InputMediaVideo, Recipient};

use crate::core::{ChatTarget, MediaItem, MediaKind, MediaSender, Result, TelegoyError};

/// Thin wrapper around teloxide::Bot pointed at the configured Bot API server.
pub struct TelegramSender {
    bot: teloxide::Bot,
}

impl TelegramSender {
    pub fn new(token: &str, api_url: Url) -> Self {
        Self {
            bot: teloxide::Bot::new(token).set_api_url(api_url),
        }
    }
}

pub fn recipient(chat: &ChatTarget) -> Recipient {
    match chat {
        ChatTarget::Id(id) => Recipient::Id(ChatId(*id)),
        ChatTarget::Username(name) => Recipient::ChannelUsername(name.clone()),
    }
}

fn thumbnail_file(bytes: &[u8]) -> InputFile {
    InputFile::memory(bytes.to_vec()).file_name("thumb.jpg")
}

/// Maps an item to its media-group entry. Videos are marked streamable.
pub fn to_input_media(item: &MediaItem) -> InputMedia {
    let file = InputFile::file(item.path.clone());
    match &item.kind {
        MediaKind::Photo => {
            let mut media = InputMediaPhoto::new(file);
            if let Some(caption) = &item.caption {
                media = media.caption(caption.clone());
            }
            InputMedia::Photo(media)
        }
        MediaKind::Video { meta, thumbnail } => {
            let mut media = InputMediaVideo::new(file).supports_streaming(true);
            if let Some(caption) = &item.caption {
                media = media.caption(caption.clone());
            }
            if let Some(bytes) = thumbnail {
                media = media.thumbnail(thumbnail_file(bytes));
            }
            if let Some(w) = meta.width {
                media = media.width(w);
            }
            if let Some(h) = meta.height {
                media = media.height(h);
            }
            if let Some(d) = meta.duration {
                media = media.duration(d);
            }
            InputMedia::Video(media)
        }
    }
}

fn transport_error(e: teloxide::RequestError) -> TelegoyError {
    TelegoyError::Telegram(e.to_string())
}

#[async_trait]
impl MediaSender for TelegramSender {
    async fn send_album(&self, chat: &ChatTarget, items: &[MediaItem]) -> Result<Vec<i32>> {
        let media: Vec<InputMedia> = items.iter().map(to_input_media).collect();
        let sent = self
            .bot
            .send_media_group(recipient(chat), media)
            .await
            .map_err(transport_error)?;
        Ok(sent.iter().map(|m| m.id.0).collect())
    }

    async fn send_single(&self, chat: &ChatTarget, item: &MediaItem) -> Result<i32> {
        let file = InputFile::file(item.path.clone());
        let sent = match &item.kind {
            MediaKind::Photo => {
                let mut req = self.bot.send_photo(recipient(chat), file);
                if let Some(caption) = &item.caption {
                    req = req.caption(caption.clone());
                }
                req.await.map_err(transport_error)?
            }
            MediaKind::Video { meta, thumbnail } => {
                let mut req = self
                    .bot
                    .send_video(recipient(chat), file)
                    .supports_streaming(true);
                if let Some(caption) = &item.caption {
                    req = req.caption(caption.clone());
                }
                if let Some(bytes) = thumbnail {
                    req = req.thumbnail(thumbnail_file(bytes));
                }
                if let Some(w) = meta.width {
                    req = req.width(u32::from(w));
                }
                if let Some(h) = meta.height {
                    req = req.height(u32::from(h));
                }
                if let Some(d) = meta.duration {
                    req = req.duration(u32::from(d));
                }
                req.await.map_err(transport_error)?
            }
        };
        Ok(sent.id.0)
    }

    async fn whoami(&self) -> Result<String> {
        let me = self.bot.get_me().await.map_err(transport_error)?;
        Ok(me.username().to_string())
    }
}
