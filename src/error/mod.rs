// pathkit: PATH-list environment and file copy helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//! env         InvalidEnvError { entry, message }
//! utility::fs FsError: Io (transparent), NotADirectory
//! config      ConfigError: ParseError, InvalidValue
//!        \          |          /
//!         v         v         v
//!        anyhow::Error (cmd layer, main)
//! ```
//!
//! Library operations return their narrow error types directly; the
//! command layer adds context and works with `anyhow` through [`Result`].

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type for filesystem operations.
pub type FsResult<T> = std::result::Result<T, FsError>;

// --- Environment Errors ---

/// An environment entry that is not shaped like `name=value`.
///
/// Carries the literal text of the offending entry so the caller can report it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{entry:?} is an invalid env: {message}")]
pub struct InvalidEnvError {
    /// The offending entry, verbatim.
    pub entry: String,
    /// Human-readable reason.
    pub message: String,
}

impl InvalidEnvError {
    pub fn new(entry: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            entry: entry.into(),
            message: message.into(),
        }
    }
}

/// Reports whether `err` is, or wraps, an [`InvalidEnvError`].
#[must_use]
pub fn is_invalid_env(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| cause.is::<InvalidEnvError>())
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Failure reported by the operating system, passed through untouched.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A path required to be a directory is missing or is something else.
    #[error("{} is not a directory", .path.display())]
    NotADirectory { path: PathBuf },
}

impl FsError {
    /// Returns the underlying I/O error kind, if any.
    #[must_use]
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Self::Io(e) => Some(e.kind()),
            Self::NotADirectory { .. } => None,
        }
    }
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration source.
    #[error("failed to parse config '{source_name}': {message}")]
    ParseError {
        source_name: String,
        message: String,
    },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

#[cfg(test)]
mod tests;
