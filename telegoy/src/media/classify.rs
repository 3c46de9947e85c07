//! Decides what each input path becomes, by extension.

use std::path::{Path, PathBuf};

use crate::core::{MediaError, Result};

pub const PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "mkv"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileClass {
    Photo,
    Video,
    Unsupported,
}

/// Classifies by lower-cased extension. No extension is unsupported.
pub fn classify(path: &Path) -> FileClass {
    let ext = path
        .extension()
        .and_then(|os| os.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    if PHOTO_EXTENSIONS.contains(&ext.as_str()) {
        FileClass::Photo
    } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        FileClass::Video
    } else {
        FileClass::Unsupported
    }
}

/// Fails when any path is missing or is not a regular file. Every bad path is reported at once.
pub fn check_inputs(paths: &[PathBuf]) -> Result<()> {
    let mut missing = Vec::new();
    let mut not_files = Vec::new();
    for path in paths {
        if !path.exists() {
            missing.push(path.clone());
        } else if !path.is_file() {
            not_files.push(path.clone());
        }
    }

    let err = match (missing.is_empty(), not_files.is_empty()) {
        (true, true) => return Ok(()),
        (false, true) => MediaError::NotFound(missing),
        (true, false) => MediaError::NotAFile(not_files),
        (false, false) => MediaError::Invalid { missing, not_files },
    };
    Err(err.into())
}
