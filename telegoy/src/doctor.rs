//! Environment and configuration health checks (`telegoy doctor`).
//!
//! Checks performed:
//!
//! - `ffmpeg` / `ffprobe` resolvable (optional; only videos need them)
//! - configuration loads and validates
//! - chat id and bot token present and well-formed
//! - with `--online`: `getMe` against the configured Bot API server

use std::fmt;

use crate::config::{Overrides, Settings};
use crate::core::MediaSender;
use crate::telegram::TelegramSender;

/// Result of a single health check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub message: String,
    /// Optional checks are reported but never fail the run.
    pub required: bool,
}

impl CheckResult {
    pub fn pass(name: impl Into<String>, message: impl Into<String>) -> Self {
        CheckResult {
            name: name.into(),
            passed: true,
            message: message.into(),
            required: true,
        }
    }

    pub fn fail(name: impl Into<String>, message: impl Into<String>) -> Self {
        CheckResult {
            name: name.into(),
            passed: false,
            message: message.into(),
            required: true,
        }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct DoctorReport {
    pub checks: Vec<CheckResult>,
}

impl DoctorReport {
    /// True when every required check passed.
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed || !c.required)
    }
}

impl fmt::Display for DoctorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for check in &self.checks {
            let status = match (check.passed, check.required) {
                (true, _) => " OK ",
                (false, true) => "FAIL",
                (false, false) => "WARN",
            };
            writeln!(f, "[{}] {}: {}", status, check.name, check.message)?;
        }
        Ok(())
    }
}

/// Locates an external tool on PATH (or at the configured absolute path).
pub fn check_tool(name: &str, program: &str) -> CheckResult {
    match which::which(program) {
        Ok(path) => CheckResult::pass(name, path.display().to_string()),
        Err(_) => CheckResult::fail(
            name,
            format!("{} not found; videos will be sent without thumbnail and metadata", program),
        )
        .optional(),
    }
}

/// Checks a loaded configuration: validation, chat id, token.
pub fn config_checks(settings: &Settings) -> Vec<CheckResult> {
    let mut checks = Vec::new();

    checks.push(match settings.validate() {
        Ok(()) => CheckResult::pass("config", format!("api_url {}", settings.api_url)),
        Err(e) => CheckResult::fail("config", e.to_string()),
    });
    checks.push(match settings.chat_target() {
        Ok(chat) => CheckResult::pass("chat id", chat.to_string()),
        Err(e) => CheckResult::fail("chat id", e.to_string()),
    });
    checks.push(match settings.bot_token() {
        Ok(_) => CheckResult::pass("bot token", "set"),
        Err(e) => CheckResult::fail("bot token", e.to_string()),
    });

    checks
}

/// Calls `getMe` through the sender.
pub async fn online_check(sender: &dyn MediaSender) -> CheckResult {
    match sender.whoami().await {
        Ok(username) => CheckResult::pass("bot api", format!("authorized as @{}", username)),
        Err(e) => CheckResult::fail("bot api", e.to_string()),
    }
}

/// Runs all checks. Never returns early: a broken config is reported like any other failure.
pub async fn run(overrides: Overrides, online: bool) -> DoctorReport {
    let mut report = DoctorReport::default();

    let settings = match Settings::load(overrides) {
        Ok(settings) => settings,
        Err(e) => {
            report.checks.push(CheckResult::fail("config", e.to_string()));
            let defaults = Settings::default();
            report.checks.push(check_tool("ffmpeg", &defaults.ffmpeg));
            report.checks.push(check_tool("ffprobe", &defaults.ffprobe));
            return report;
        }
    };

    report.checks.push(check_tool("ffmpeg", &settings.ffmpeg));
    report.checks.push(check_tool("ffprobe", &settings.ffprobe));
    report.checks.extend(config_checks(&settings));

    if online {
        match (settings.bot_token(), settings.api_url()) {
            (Ok(token), Ok(url)) => {
                let sender = TelegramSender::new(token, url);
                report.checks.push(online_check(&sender).await);
            }
            _ => report.checks.push(CheckResult::fail(
                "bot api",
                "skipped: token or api_url missing/invalid",
            )),
        }
    }

    report
}
