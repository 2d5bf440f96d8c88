// pathkit: PATH-list environment and file copy helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for pathkit.
//!
//! ```text
//! Config: GlobalConfig, EnvConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::env::types::PathOp;
use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-5).
    pub log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            file_log_level: LogLevel::Debug,
            log_file: None,
        }
    }
}

/// Defaults for the `env` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvConfig {
    /// Variable to operate on when none is given.
    pub variable: String,
    /// Operation to use when none is given.
    pub op: PathOp,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            variable: "PATH".to_string(),
            op: PathOp::Prepend,
        }
    }
}
