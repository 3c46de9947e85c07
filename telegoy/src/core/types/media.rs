//! Media items as they travel from the file system to the Telegram API.

use std::path::PathBuf;

/// Video stream properties reported by the probe. `None` when unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VideoMeta {
    pub width: Option<u16>,
    pub height: Option<u16>,
    /// Seconds, rounded.
    pub duration: Option<u16>,
}

/// What kind of album entry a file becomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaKind {
    Photo,
    Video {
        meta: VideoMeta,
        /// JPEG bytes of the preview frame.
        thumbnail: Option<Vec<u8>>,
    },
}

/// One file ready to be uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    pub path: PathBuf,
    pub kind: MediaKind,
    pub caption: Option<String>,
}

impl MediaItem {
    pub fn photo(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: MediaKind::Photo,
            caption: None,
        }
    }

    pub fn video(path: impl Into<PathBuf>, meta: VideoMeta, thumbnail: Option<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            kind: MediaKind::Video { meta, thumbnail },
            caption: None,
        }
    }

    pub fn with_caption(mut self, caption: Option<String>) -> Self {
        self.caption = caption;
        self
    }

    /// Short label for logs and dry-run output.
    pub fn kind_label(&self) -> &'static str {
        match self.kind {
            MediaKind::Photo => "photo",
            MediaKind::Video { .. } => "video",
        }
    }
}
