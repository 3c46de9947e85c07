//! Mock implementation of [`telegoy::MediaSender`] for integration tests.
//!
//! Records every album and single send so tests can assert on batching and captions without
//! hitting Telegram.

use std::sync::Mutex;

use async_trait::async_trait;
use telegoy::{ChatTarget, MediaItem, MediaSender, Result, TelegoyError};

/// One recorded send.
#[derive(Debug, Clone)]
pub enum SentCall {
    Album { chat: ChatTarget, items: Vec<MediaItem> },
    Single { chat: ChatTarget, item: MediaItem },
}

impl SentCall {
    pub fn items(&self) -> Vec<MediaItem> {
        match self {
            SentCall::Album { items, .. } => items.clone(),
            SentCall::Single { item, .. } => vec![item.clone()],
        }
    }
}

/// Mock sender that hands out increasing message ids. `fail_on_call` makes the n-th call (0-based) fail.
#[derive(Default)]
pub struct MockSender {
    calls: Mutex<Vec<SentCall>>,
    next_id: Mutex<i32>,
    fail_on_call: Option<usize>,
}

impl MockSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(call: usize) -> Self {
        Self {
            fail_on_call: Some(call),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<SentCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: SentCall, count: usize) -> Result<Vec<i32>> {
        let mut calls = self.calls.lock().unwrap();
        if self.fail_on_call == Some(calls.len()) {
            return Err(TelegoyError::Telegram("Bad Request: simulated".to_string()));
        }
        calls.push(call);
        let mut next = self.next_id.lock().unwrap();
        let ids = (0..count as i32).map(|i| *next + i + 1).collect();
        *next += count as i32;
        Ok(ids)
    }
}

#[async_trait]
impl MediaSender for MockSender {
    async fn send_album(&self, chat: &ChatTarget, items: &[MediaItem]) -> Result<Vec<i32>> {
        self.record(
            SentCall::Album {
                chat: chat.clone(),
                items: items.to_vec(),
            },
            items.len(),
        )
    }

    async fn send_single(&self, chat: &ChatTarget, item: &MediaItem) -> Result<i32> {
        let ids = self.record(
            SentCall::Single {
                chat: chat.clone(),
                item: item.clone(),
            },
            1,
        )?;
        Ok(ids[0])
    }

    async fn whoami(&self) -> Result<String> {
        Ok("mock_bot".to_string())
    }
}
