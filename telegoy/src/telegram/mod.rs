//! Telegram transport: teloxide-backed [`MediaSender`](crate::core::MediaSender).

mod sender;

pub use sender::{recipient, to_input_media, TelegramSender};
