// pathkit: PATH-list environment and file copy helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for PATH-like variable manipulation.
//!
//! ```text
//! PathOp: Prepend | Append | Replace
//!   apply(existing, values) --> new value
//! PATH_LIST_SEPARATOR: ";" (Windows) / ":" (elsewhere)
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Separator joining the segments of a PATH-like variable.
pub const PATH_LIST_SEPARATOR: &str = if cfg!(windows) { ";" } else { ":" };

/// How new values are combined with the existing value of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathOp {
    /// New values go in front of the existing value.
    #[default]
    Prepend,
    /// New values go after the existing value.
    Append,
    /// New values discard the existing value.
    Replace,
}

impl PathOp {
    /// Combines `existing` with `values` according to this operation.
    #[must_use]
    pub fn apply(self, existing: &str, values: &[&str]) -> String {
        match self {
            Self::Prepend => super::path_list::prepend_path_env(existing, values),
            Self::Append => super::path_list::append_path_env(existing, values),
            Self::Replace => super::path_list::replace_path_env(existing, values),
        }
    }
}

impl std::fmt::Display for PathOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prepend => write!(f, "prepend"),
            Self::Append => write!(f, "append"),
            Self::Replace => write!(f, "replace"),
        }
    }
}

impl std::str::FromStr for PathOp {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "prepend" => Ok(Self::Prepend),
            "append" => Ok(Self::Append),
            "replace" => Ok(Self::Replace),
            _ => Err(ConfigError::InvalidValue {
                section: "env".to_string(),
                key: "op".to_string(),
                message: format!("expected 'prepend', 'append', or 'replace', got '{s}'"),
            }),
        }
    }
}
