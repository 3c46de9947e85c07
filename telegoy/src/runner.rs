//! Upload pipeline: validate inputs, build captioned items, probe videos, split into albums, send.

use std::fmt;
use std::path::PathBuf;

use anyhow::Context;
use tracing::{info, instrument, warn};

use crate::album;
use crate::config::Settings;
use crate::core::{ChatTarget, MediaItem, MediaKind, MediaSender, Result, TelegoyError};
use crate::media::{self, FileClass};
use crate::probe::{FfmpegProbe, VideoProbe};
use crate::telegram::TelegramSender;

/// Albums ready to send, in input order.
#[derive(Debug, Clone, Default)]
pub struct UploadPlan {
    pub batches: Vec<Vec<MediaItem>>,
    /// Inputs with an unsupported extension.
    pub skipped: Vec<PathBuf>,
}

impl UploadPlan {
    pub fn item_count(&self) -> usize {
        self.batches.iter().map(Vec::len).sum()
    }
}

/// Human-readable listing used by `--dry-run`.
impl fmt::Display for UploadPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, batch) in self.batches.iter().enumerate() {
            writeln!(f, "Batch {} ({} item(s)):", n + 1, batch.len())?;
            for item in batch {
                write!(f, "  {:<5} {}", item.kind_label(), item.path.display())?;
                if let MediaKind::Video { meta, thumbnail } = &item.kind {
                    if let (Some(w), Some(h)) = (meta.width, meta.height) {
                        write!(f, "  {}x{}", w, h)?;
                    }
                    if let Some(d) = meta.duration {
                        write!(f, "  {}s", d)?;
                    }
                    if thumbnail.is_some() {
                        f.write_str("  +thumb")?;
                    }
                }
                if let Some(caption) = &item.caption {
                    write!(f, "  caption: {:?}", caption)?;
                }
                writeln!(f)?;
            }
        }
        for path in &self.skipped {
            writeln!(f, "Skipped (unsupported type): {}", path.display())?;
        }
        Ok(())
    }
}

/// Outcome of a real upload.
#[derive(Debug, Clone, Default)]
pub struct UploadReport {
    /// Message ids per sent batch.
    pub message_ids: Vec<Vec<i32>>,
    pub items_sent: usize,
    pub skipped: Vec<PathBuf>,
}

/// Builds the upload plan. Fails before any network I/O when a path is missing or nothing is sendable.
#[instrument(skip(settings, probe))]
pub async fn prepare(
    settings: &Settings,
    files: &[PathBuf],
    probe: &dyn VideoProbe,
) -> Result<UploadPlan> {
    media::check_inputs(files)?;

    let static_caption = media::static_caption(&settings.static_caption_path).await;
    let mut items = Vec::with_capacity(files.len());
    let mut skipped = Vec::new();

    for path in files {
        info!(path = %path.display(), "Processing file");
        let item = match media::classify(path) {
            FileClass::Photo => MediaItem::photo(path.clone()),
            FileClass::Video => {
                let thumbnail = probe.thumbnail(path).await;
                let meta = probe.metadata(path).await;
                MediaItem::video(path.clone(), meta, thumbnail)
            }
            FileClass::Unsupported => {
                warn!(path = %path.display(), "Skipping unsupported file type");
                skipped.push(path.clone());
                continue;
            }
        };
        let file_caption = media::file_caption(path).await;
        items.push(item.with_caption(media::compose(&file_caption, &static_caption)));
    }

    if items.is_empty() {
        return Err(TelegoyError::NoMedia);
    }

    Ok(UploadPlan {
        batches: album::plan(items),
        skipped,
    })
}

/// Sends every batch in order; a single-item batch goes out as a standalone message.
/// Stops at the first failed batch.
#[instrument(skip(plan, sender), fields(batches = plan.batches.len()))]
pub async fn deliver(
    plan: &UploadPlan,
    chat: &ChatTarget,
    sender: &dyn MediaSender,
) -> Result<Vec<Vec<i32>>> {
    let total = plan.batches.len();
    let mut sent = Vec::with_capacity(total);

    for (n, batch) in plan.batches.iter().enumerate() {
        info!(
            batch = n + 1,
            total,
            items = batch.len(),
            chat = %chat,
            "Sending media"
        );
        let ids = match batch.as_slice() {
            [single] => vec![sender.send_single(chat, single).await?],
            items => sender.send_album(chat, items).await?,
        };
        info!(batch = n + 1, messages = ids.len(), "Batch sent");
        sent.push(ids);
    }

    Ok(sent)
}

/// Main entry for `send`: prepare, then deliver.
pub async fn send_files(
    settings: &Settings,
    files: &[PathBuf],
    chat: &ChatTarget,
    sender: &dyn MediaSender,
    probe: &dyn VideoProbe,
) -> Result<UploadReport> {
    let plan = prepare(settings, files, probe).await?;
    info!(
        items = plan.item_count(),
        batches = plan.batches.len(),
        skipped = plan.skipped.len(),
        "Upload plan ready"
    );

    let message_ids = deliver(&plan, chat, sender).await?;
    Ok(UploadReport {
        message_ids,
        items_sent: plan.item_count(),
        skipped: plan.skipped,
    })
}

/// Entry point for the `send` command: validate, build the real sender and probe, upload.
/// The chat id is always required; with `dry_run` the plan is printed, nothing is sent and no
/// token is needed.
#[instrument(skip(settings, files))]
pub async fn run_send(settings: Settings, files: Vec<PathBuf>, dry_run: bool) -> anyhow::Result<()> {
    settings.validate()?;
    let chat = settings.chat_target()?;
    let probe = FfmpegProbe::from_settings(&settings);

    if dry_run {
        let plan = prepare(&settings, &files, &probe).await?;
        print!("{}", plan);
        return Ok(());
    }

    let sender = TelegramSender::new(settings.bot_token()?, settings.api_url()?);
    info!(chat = %chat, api_url = %settings.api_url, "Starting uploader");

    let report = send_files(&settings, &files, &chat, &sender, &probe)
        .await
        .context("Failed to send media")?;

    info!(
        items = report.items_sent,
        batches = report.message_ids.len(),
        "Successfully sent media"
    );
    println!(
        "Sent {} item(s) in {} batch(es) to {}",
        report.items_sent,
        report.message_ids.len(),
        chat
    );
    Ok(())
}
