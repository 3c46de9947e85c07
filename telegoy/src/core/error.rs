//! Error types for telegoy.
//!
//! [`TelegoyError`] is the top-level error; [`MediaError`] covers problems with the input files.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error (config, media input, probing, Telegram transport, IO).
#[derive(Error, Debug)]
pub enum TelegoyError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Media error: {0}")]
    Media(#[from] MediaError),

    #[error("Probe error: {0}")]
    Probe(String),

    #[error("Telegram error: {0}")]
    Telegram(String),

    #[error("No valid media found to send")]
    NoMedia,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors about the files passed on the command line.
#[derive(Error, Debug)]
pub enum MediaError {
    #[error("File(s) not found: {}", display_paths(.0))]
    NotFound(Vec<PathBuf>),

    #[error("Not a regular file: {}", display_paths(.0))]
    NotAFile(Vec<PathBuf>),

    #[error(
        "File(s) not found: {}; not a regular file: {}",
        display_paths(missing),
        display_paths(not_files)
    )]
    Invalid {
        missing: Vec<PathBuf>,
        not_files: Vec<PathBuf>,
    },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for library operations; uses [`TelegoyError`].
pub type Result<T> = std::result::Result<T, TelegoyError>;
