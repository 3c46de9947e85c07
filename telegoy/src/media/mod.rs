//! Input files: classification and captions.

pub mod caption;
pub mod classify;

pub use caption::{compose, file_caption, static_caption, MAX_CAPTION_CHARS};
pub use classify::{check_inputs, classify, FileClass, PHOTO_EXTENSIONS, VIDEO_EXTENSIONS};
