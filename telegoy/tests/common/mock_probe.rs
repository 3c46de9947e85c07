//! Fixed-answer [`telegoy::VideoProbe`] so tests do not need ffmpeg.

use std::path::Path;

use async_trait::async_trait;
use telegoy::{VideoMeta, VideoProbe};

pub struct MockProbe {
    pub meta: VideoMeta,
    pub thumbnail: Option<Vec<u8>>,
}

impl MockProbe {
    pub fn hd() -> Self {
        Self {
            meta: VideoMeta {
                width: Some(1920),
                height: Some(1080),
                duration: Some(15),
            },
            thumbnail: Some(vec![0xFF, 0xD8, 0xFF, 0xD9]),
        }
    }
}

#[async_trait]
impl VideoProbe for MockProbe {
    async fn metadata(&self, _path: &Path) -> VideoMeta {
        self.meta
    }

    async fn thumbnail(&self, _path: &Path) -> Option<Vec<u8>> {
        self.thumbnail.clone()
    }
}
