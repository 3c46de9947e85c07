//! Video inspection: stream dimensions, duration and a preview frame.
//!
//! [`VideoProbe`] is the seam; [`FfmpegProbe`] shells out to `ffprobe` / `ffmpeg`. Probing is
//! best effort: every failure degrades to "unknown" and the video is still uploaded.

use std::ffi::OsStr;
use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::config::Settings;
use crate::core::{Result, TelegoyError, VideoMeta};

#[async_trait]
pub trait VideoProbe: Send + Sync {
    /// Width, height and rounded duration; unknown fields are `None`.
    async fn metadata(&self, path: &Path) -> VideoMeta;

    /// JPEG bytes of the first frame, fitted into the thumbnail box.
    async fn thumbnail(&self, path: &Path) -> Option<Vec<u8>>;
}

/// Probe backed by the ffmpeg command line tools.
#[derive(Debug, Clone)]
pub struct FfmpegProbe {
    ffmpeg: String,
    ffprobe: String,
    thumbnail_size: u32,
}

impl FfmpegProbe {
    pub fn new(ffmpeg: impl Into<String>, ffprobe: impl Into<String>, thumbnail_size: u32) -> Self {
        Self {
            ffmpeg: ffmpeg.into(),
            ffprobe: ffprobe.into(),
            thumbnail_size,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.ffmpeg.clone(),
            settings.ffprobe.clone(),
            settings.thumbnail_size,
        )
    }

    async fn probe_dimensions(&self, path: &Path) -> Result<(Option<u16>, Option<u16>)> {
        let out = run(
            &self.ffprobe,
            [
                OsStr::new("-v"),
                OsStr::new("error"),
                OsStr::new("-select_streams"),
                OsStr::new("v:0"),
                OsStr::new("-show_entries"),
                OsStr::new("stream=width,height"),
                OsStr::new("-of"),
                OsStr::new("default=noprint_wrappers=1:nokey=1"),
                path.as_os_str(),
            ],
        )
        .await?;
        Ok(parse_dimensions(&out))
    }

    async fn probe_duration(&self, path: &Path) -> Result<Option<u16>> {
        let out = run(
            &self.ffprobe,
            [
                OsStr::new("-v"),
                OsStr::new("error"),
                OsStr::new("-show_entries"),
                OsStr::new("format=duration"),
                OsStr::new("-of"),
                OsStr::new("default=noprint_wrappers=1:nokey=1"),
                path.as_os_str(),
            ],
        )
        .await?;
        Ok(parse_duration(&out))
    }

    async fn extract_frame(&self, path: &Path) -> Result<Vec<u8>> {
        let temp = tempfile::Builder::new()
            .prefix("telegoy_thumb_")
            .suffix(".jpg")
            .tempfile()?;
        let scale = format!(
            "scale={size}:{size}:force_original_aspect_ratio=decrease",
            size = self.thumbnail_size
        );

        run(
            &self.ffmpeg,
            [
                OsStr::new("-hide_banner"),
                OsStr::new("-v"),
                OsStr::new("error"),
                OsStr::new("-y"),
                OsStr::new("-i"),
                path.as_os_str(),
                OsStr::new("-ss"),
                OsStr::new("00:00:00.000"),
                OsStr::new("-frames:v"),
                OsStr::new("1"),
                OsStr::new("-update"),
                OsStr::new("1"),
                OsStr::new("-vf"),
                OsStr::new(&scale),
                OsStr::new("-q:v"),
                OsStr::new("2"),
                temp.path().as_os_str(),
            ],
        )
        .await?;

        let bytes = tokio::fs::read(temp.path()).await?;
        if bytes.is_empty() {
            return Err(TelegoyError::Probe(format!(
                "ffmpeg produced no frame for {}",
                path.display()
            )));
        }
        Ok(bytes)
    }
}

#[async_trait]
impl VideoProbe for FfmpegProbe {
    async fn metadata(&self, path: &Path) -> VideoMeta {
        let (width, height) = self.probe_dimensions(path).await.unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "Could not read video dimensions");
            (None, None)
        });
        let duration = self.probe_duration(path).await.unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "Could not read video duration");
            None
        });
        let meta = VideoMeta {
            width,
            height,
            duration,
        };
        debug!(path = %path.display(), ?meta, "Probed video");
        meta
    }

    async fn thumbnail(&self, path: &Path) -> Option<Vec<u8>> {
        match self.extract_frame(path).await {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Could not generate thumbnail");
                None
            }
        }
    }
}

/// Runs `program` and returns its stdout; non-zero exit is an error carrying stderr.
async fn run<I, S>(program: &str, args: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|e| TelegoyError::Probe(format!("failed to run {}: {}", program, e)))?;

    if !output.status.success() {
        return Err(TelegoyError::Probe(format!(
            "{} exited with {}: {}",
            program,
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn positive_u16(s: Option<&str>) -> Option<u16> {
    s?.trim().parse::<u16>().ok().filter(|v| *v > 0)
}

/// Parses `ffprobe ... stream=width,height` output: width on the first line, height on the second.
pub fn parse_dimensions(text: &str) -> (Option<u16>, Option<u16>) {
    let mut lines = text.lines();
    let width = positive_u16(lines.next());
    let height = positive_u16(lines.next());
    (width, height)
}

/// Parses `ffprobe ... format=duration` output (fractional seconds) into rounded seconds.
pub fn parse_duration(text: &str) -> Option<u16> {
    let secs = text.trim().parse::<f64>().ok()?;
    if !secs.is_finite() || secs <= 0.0 {
        return None;
    }
    let rounded = secs.round();
    if rounded < 1.0 || rounded > f64::from(u16::MAX) {
        return None;
    }
    Some(rounded as u16)
}
