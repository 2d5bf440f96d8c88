// pathkit: PATH-list environment and file copy helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Logging through the `tracing` ecosystem.
//!
//! ```text
//! GlobalConfig --> LogConfig --> init_logging()
//!                                   |
//!                     +-------------+-------------+
//!                     v                           v
//!                  stderr                     log file (append)
//!        no timestamps, ANSI on a tty      non_blocking, targets
//!                     |                           |
//!                     +------ directive() --------+
//!                          "warn,pathkit=<level>"
//!
//! LogLevel:  0=Off  1=Error  2=Warn  3=Info  4=Debug  5=Trace
//! ```
//!
//! Only pathkit's own events go above `warn`; stdout is left to command
//! output.

use std::fs::OpenOptions;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::Context;
use bon::Builder;
use serde::{Deserialize, Serialize};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::types::GlobalConfig;
use crate::error::{ConfigError, Result};

/// Verbosity, configured as an integer from 0 to 5.
///
/// `Debug` reports every copied file and touched entry, `Trace` adds skipped
/// pseudo-entries and created directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum LogLevel {
    Off = 0,
    Error = 1,
    #[default]
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl LogLevel {
    /// Get the configured integer value.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Filter directive for this level: pathkit's events at this level,
    /// everything else capped at `warn`.
    #[must_use]
    pub fn directive(self) -> String {
        let others = self.min(Self::Warn);
        format!("{},pathkit={}", others.name(), self.name())
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = ConfigError;

    fn try_from(value: u8) -> std::result::Result<Self, ConfigError> {
        Ok(match value {
            0 => LogLevel::Off,
            1 => LogLevel::Error,
            2 => LogLevel::Warn,
            3 => LogLevel::Info,
            4 => LogLevel::Debug,
            5 => LogLevel::Trace,
            _ => {
                return Err(ConfigError::InvalidValue {
                    section: "global".to_string(),
                    key: "log_level".to_string(),
                    message: format!("log level must be 0-5, got {value}"),
                });
            }
        })
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> Self {
        level.as_u8()
    }
}

/// Logging setup derived from the `[global]` options.
#[derive(Debug, Clone, Builder)]
pub struct LogConfig {
    #[builder(setters(name = with_console_level), default)]
    console_level: LogLevel,
    #[builder(setters(name = with_file_level), default = LogLevel::Debug)]
    file_level: LogLevel,
    #[builder(setters(name = with_log_file))]
    log_file: Option<PathBuf>,
}

impl From<&GlobalConfig> for LogConfig {
    fn from(global: &GlobalConfig) -> Self {
        Self::builder()
            .with_console_level(global.log_level)
            .with_file_level(global.file_log_level)
            .maybe_with_log_file(global.log_file.clone())
            .build()
    }
}

/// Keeps the file writer alive; pending lines are flushed on drop.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Installs the global subscriber for `config`.
///
/// The log file is opened for appending, so repeated runs accumulate in one
/// file. Its parent directories are created.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
///
/// # Example
///
/// ```no_run
/// use pathkit::logging::{LogConfig, LogLevel, init_logging};
///
/// let config = LogConfig::builder()
///     .with_console_level(LogLevel::Info)
///     .with_log_file("pathkit.log".into())
///     .build();
///
/// let _guard = init_logging(&config)?;
/// tracing::info!("logging ready");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_filter(EnvFilter::new(config.console_level.directive()));

    let (file_layer, file_guard) = match config.log_file.as_deref() {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(open_log_file(path)?);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(EnvFilter::new(config.file_level.directive()));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install global tracing subscriber")?;

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}

fn open_log_file(path: &Path) -> Result<std::fs::File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}

#[cfg(test)]
mod tests;
