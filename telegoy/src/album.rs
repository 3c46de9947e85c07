//! Splits media items into Telegram albums.

use crate::core::MediaItem;

/// Telegram accepts 2..=10 items per media group.
pub const MAX_ALBUM_SIZE: usize = 10;

/// Near-equal batch sizes for `n` items: `ceil(n / 10)` batches, earlier ones larger by at most one.
pub fn batch_sizes(n: usize) -> Vec<usize> {
    if n == 0 {
        return Vec::new();
    }
    let batches = n.div_ceil(MAX_ALBUM_SIZE);
    let base = n / batches;
    let extra = n % batches;
    (0..batches)
        .map(|i| if i < extra { base + 1 } else { base })
        .collect()
}

/// Groups items in input order. Only the first item of each batch keeps its caption, so Telegram
/// shows it as the album caption.
pub fn plan(items: Vec<MediaItem>) -> Vec<Vec<MediaItem>> {
    let mut iter = items.into_iter();
    batch_sizes(iter.len())
        .into_iter()
        .map(|size| {
            iter.by_ref()
                .take(size)
                .enumerate()
                .map(|(i, item)| if i == 0 { item } else { item.with_caption(None) })
                .collect()
        })
        .collect()
}
