//! Settings precedence tests. Environment is process-global, so every test is serialized.

use std::env;
use std::fs;
use std::path::PathBuf;

use serial_test::serial;

use crate::config::{Overrides, Settings, DEFAULT_API_URL};
use crate::core::ChatTarget;

const VARS: &[&str] = &[
    "TELEGOY_CHAT_ID",
    "TELEGOY_API_URL",
    "TELEGOY_BOT_TOKEN",
    "TELOXIDE_TOKEN",
    "BOT_TOKEN",
    "TELEGOY_STATIC_CAPTION_PATH",
    "TELEGOY_FFMPEG",
    "TELEGOY_FFPROBE",
    "TELEGOY_THUMBNAIL_SIZE",
    "TELEGOY_LOG_FILE",
    "LOG_FILE",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

fn write_config(dir: &tempfile::TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, body).unwrap();
    path
}

#[test]
#[serial]
fn test_load_with_defaults() {
    clear_env();

    let settings = Settings::load(Overrides::default()).unwrap();

    assert!(settings.chat_id.is_none());
    assert_eq!(settings.api_url, DEFAULT_API_URL);
    assert!(settings.bot_token.is_none());
    assert_eq!(settings.static_caption_path, PathBuf::from("static_caption.txt"));
    assert_eq!(settings.ffmpeg, "ffmpeg");
    assert_eq!(settings.ffprobe, "ffprobe");
    assert_eq!(settings.thumbnail_size, 320);
    assert!(settings.log_file.is_none());
    assert!(settings.validate().is_ok());
    assert!(settings.chat_target().is_err());
    assert!(settings.bot_token().is_err());
}

#[test]
#[serial]
fn test_env_overrides_file() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        "chat_id = 111\napi_url = \"http://file:8081\"\nbot_token = \"file_token\"\nffmpeg = \"/opt/ffmpeg\"\n",
    );
    env::set_var("TELEGOY_CHAT_ID", "222");
    env::set_var("TELEGOY_API_URL", "http://env:8081");

    let settings = Settings::load(Overrides {
        config_path: Some(path),
        ..Overrides::default()
    })
    .unwrap();

    assert_eq!(settings.chat_id.as_deref(), Some("222"));
    assert_eq!(settings.api_url, "http://env:8081");
    assert_eq!(settings.bot_token.as_deref(), Some("file_token"));
    assert_eq!(settings.ffmpeg, "/opt/ffmpeg");

    clear_env();
}

#[test]
#[serial]
fn test_cli_overrides_env() {
    clear_env();
    env::set_var("TELEGOY_CHAT_ID", "222");
    env::set_var("BOT_TOKEN", "env_token");
    env::set_var("TELEGOY_STATIC_CAPTION_PATH", "env_caption.txt");

    let settings = Settings::load(Overrides {
        chat_id: Some("@cli_channel".to_string()),
        bot_token: Some("cli_token".to_string()),
        static_caption_path: Some(PathBuf::from("cli_caption.txt")),
        ..Overrides::default()
    })
    .unwrap();

    assert_eq!(
        settings.chat_target().unwrap(),
        ChatTarget::Username("@cli_channel".to_string())
    );
    assert_eq!(settings.bot_token().unwrap(), "cli_token");
    assert_eq!(settings.static_caption_path, PathBuf::from("cli_caption.txt"));

    clear_env();
}

#[test]
#[serial]
fn test_token_variable_priority() {
    clear_env();
    env::set_var("BOT_TOKEN", "bot_token");
    env::set_var("TELOXIDE_TOKEN", "teloxide_token");

    let settings = Settings::load(Overrides::default()).unwrap();
    assert_eq!(settings.bot_token().unwrap(), "teloxide_token");

    env::set_var("TELEGOY_BOT_TOKEN", "telegoy_token");
    let settings = Settings::load(Overrides::default()).unwrap();
    assert_eq!(settings.bot_token().unwrap(), "telegoy_token");

    clear_env();
}

#[test]
#[serial]
fn test_empty_env_values_are_ignored() {
    clear_env();
    env::set_var("TELEGOY_CHAT_ID", "   ");

    let settings = Settings::load(Overrides::default()).unwrap();
    assert!(settings.chat_id.is_none());

    clear_env();
}

#[test]
#[serial]
fn test_validate_rejects_invalid_api_url() {
    clear_env();
    env::set_var("TELEGOY_API_URL", "not-a-valid-url");

    let settings = Settings::load(Overrides::default()).unwrap();
    assert!(settings.validate().is_err());

    clear_env();
}

#[test]
#[serial]
fn test_thumbnail_size_bounds() {
    clear_env();
    env::set_var("TELEGOY_THUMBNAIL_SIZE", "640");
    let settings = Settings::load(Overrides::default()).unwrap();
    assert!(settings.validate().is_err());

    env::set_var("TELEGOY_THUMBNAIL_SIZE", "abc");
    assert!(Settings::load(Overrides::default()).is_err());

    env::set_var("TELEGOY_THUMBNAIL_SIZE", "160");
    let settings = Settings::load(Overrides::default()).unwrap();
    assert_eq!(settings.thumbnail_size, 160);
    assert!(settings.validate().is_ok());

    clear_env();
}

#[test]
#[serial]
fn test_log_file_from_env() {
    clear_env();
    env::set_var("LOG_FILE", "logs/telegoy.log");

    let settings = Settings::load(Overrides::default()).unwrap();
    assert_eq!(settings.log_file, Some(PathBuf::from("logs/telegoy.log")));

    clear_env();
}

#[test]
#[serial]
fn test_blank_cli_and_file_tokens_count_as_missing() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "bot_token = \"  \"\nchat_id = \"\"\n");

    let settings = Settings::load(Overrides {
        config_path: Some(path),
        bot_token: Some(String::new()),
        ..Overrides::default()
    })
    .unwrap();

    assert!(settings.bot_token.is_none());
    assert!(settings.chat_id.is_none());
    let err = settings.bot_token().unwrap_err();
    assert!(err.to_string().contains("bot token not found"));
}

#[test]
#[serial]
fn test_blank_cli_token_falls_back_to_env() {
    clear_env();
    env::set_var("BOT_TOKEN", "env_token");

    let settings = Settings::load(Overrides {
        bot_token: Some("   ".to_string()),
        ..Overrides::default()
    })
    .unwrap();
    assert_eq!(settings.bot_token().unwrap(), "env_token");

    clear_env();
}

#[test]
fn test_blank_token_set_directly_is_rejected() {
    let settings = Settings {
        bot_token: Some(" ".to_string()),
        ..Settings::default()
    };
    assert!(settings.bot_token().is_err());
}
