//! Captions: a per-file sidecar `.txt` followed by a shared static caption.

use std::path::Path;

use tracing::{debug, warn};

/// Telegram caption limit, in characters.
pub const MAX_CAPTION_CHARS: usize = 1024;

/// Reads `<file>.txt` next to the media file. Missing or unreadable → empty.
pub async fn file_caption(media_path: &Path) -> String {
    let caption_path = media_path.with_extension("txt");
    read_or_empty(&caption_path).await
}

/// Reads the static caption file. Missing → empty.
pub async fn static_caption(path: &Path) -> String {
    read_or_empty(path).await
}

async fn read_or_empty(path: &Path) -> String {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "No caption file");
            String::new()
        }
    }
}

/// Joins the two parts; `None` when nothing but whitespace remains. Truncates to [`MAX_CAPTION_CHARS`].
pub fn compose(file_caption: &str, static_caption: &str) -> Option<String> {
    let full = format!("{}{}", file_caption, static_caption);
    if full.trim().is_empty() {
        return None;
    }
    let count = full.chars().count();
    if count > MAX_CAPTION_CHARS {
        warn!(
            chars = count,
            limit = MAX_CAPTION_CHARS,
            "Caption too long, truncating"
        );
        return Some(full.chars().take(MAX_CAPTION_CHARS).collect());
    }
    Some(full)
}
