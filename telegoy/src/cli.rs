//! CLI parser and settings loading.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::config::{Overrides, Settings};

#[derive(Parser, Debug)]
#[command(name = "telegoy")]
#[command(about = "Upload photos and videos to a Telegram chat as albums", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload files (space separated) as one or more albums.
    Send {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        config: ConfigArgs,

        /// Print the albums that would be sent and exit.
        #[arg(long)]
        dry_run: bool,
    },
    /// Check tools, configuration and (optionally) the Bot API server.
    Doctor {
        #[command(flatten)]
        config: ConfigArgs,

        /// Also call getMe on the configured server.
        #[arg(long)]
        online: bool,
    },
}

/// Options that override config file and environment values.
#[derive(Args, Debug, Default, Clone)]
pub struct ConfigArgs {
    /// Config file (TOML). Default: ./config.toml when present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Chat id or @username (overrides config/env). Negative ids are accepted.
    #[arg(short, long, allow_hyphen_values = true)]
    pub chat_id: Option<String>,

    /// Static caption file appended to every caption (overrides config/env).
    #[arg(short, long)]
    pub static_caption_path: Option<PathBuf>,

    /// Bot API server base URL (overrides config/env).
    #[arg(long)]
    pub api_url: Option<String>,

    /// Bot token (overrides config/env).
    #[arg(short, long)]
    pub token: Option<String>,
}

impl ConfigArgs {
    pub fn into_overrides(self) -> Overrides {
        Overrides {
            config_path: self.config,
            chat_id: self.chat_id,
            api_url: self.api_url,
            bot_token: self.token,
            static_caption_path: self.static_caption_path,
        }
    }
}

/// Load Settings from config file and environment, with CLI values taking precedence.
pub fn load_settings(args: ConfigArgs) -> Result<Settings> {
    Ok(Settings::load(args.into_overrides())?)
}
