// pathkit: PATH-list environment and file copy helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for pathkit.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. pathkit.toml (cwd, optional)
//! 3. --ini FILE (repeatable)
//! 4. PATHKIT_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! PATHKIT_GLOBAL__LOG_LEVEL=4   → global.log_level = 4
//! PATHKIT_ENV__VARIABLE=GOPATH  → env.variable = "GOPATH"
//! PATHKIT_ENV__OP=append        → env.op = "append"
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::env::is_variable_name;
use crate::error::ConfigError;

use types::{EnvConfig, GlobalConfig};

/// Every option key accepted by `--set`, in display order.
pub const OPTION_KEYS: [&str; 5] = [
    "env.op",
    "env.variable",
    "global.file_log_level",
    "global.log_file",
    "global.log_level",
];

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// `env` command defaults.
    pub env: EnvConfig,
}

impl Config {
    /// Checks values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an `env.variable` that is
    /// not shaped like an entry name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_variable_name(&self.env.variable) {
            return Err(ConfigError::InvalidValue {
                section: "env".to_string(),
                key: "variable".to_string(),
                message: format!(
                    "{:?} is not a variable name (letters, digits, '_')",
                    self.env.variable
                ),
            });
        }
        Ok(())
    }

    /// Current value of the option `key`, one of [`OPTION_KEYS`].
    #[must_use]
    pub fn option(&self, key: &str) -> Option<String> {
        let value = match key {
            "env.op" => self.env.op.to_string(),
            "env.variable" => self.env.variable.clone(),
            "global.file_log_level" => self.global.file_log_level.as_u8().to_string(),
            "global.log_file" => self
                .global
                .log_file
                .as_ref()
                .map_or_else(|| "<unset>".to_string(), |p| p.display().to_string()),
            "global.log_level" => self.global.log_level.as_u8().to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Format configuration options for display, one `key = value` per line,
    /// keys aligned.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let width = OPTION_KEYS.iter().map(|k| k.len()).max().unwrap_or(0);
        OPTION_KEYS
            .iter()
            .filter_map(|key| {
                self.option(key)
                    .map(|value| format!("{key:<width$} = {value}"))
            })
            .collect()
    }
}
