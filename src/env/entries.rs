// pathkit: PATH-list environment and file copy helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Applying a [`PathOp`] to one variable inside an ordered list of
//! `name=value` entries.
//!
//! ```text
//! for entry in entries:
//!   "=C:=C:\dir"    --> skipped (drive pseudo-variable)
//!   not name=value  --> InvalidEnvError, scan stops
//!   name matches    --> rewritten in place, done
//! not found         --> "name=" + op("", values) pushed at the end
//! ```

use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, trace};

use super::types::PathOp;
use crate::error::InvalidEnvError;

static ENTRY_REGEX: OnceLock<std::result::Result<Regex, String>> = OnceLock::new();

/// Reports whether `name` can name an entry, i.e. matches the name part of
/// `name=value`.
#[must_use]
pub fn is_variable_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Splits an entry into its name and value.
///
/// # Errors
///
/// Returns an [`InvalidEnvError`] carrying the entry text if it is not
/// shaped like `name=value`.
pub fn split_entry(entry: &str) -> Result<(&str, &str), InvalidEnvError> {
    let regex = ENTRY_REGEX
        .get_or_init(|| Regex::new(r"^([0-9A-Za-z_]+)=(.*)$").map_err(|e| e.to_string()))
        .as_ref()
        .map_err(|e| InvalidEnvError::new(entry, format!("entry pattern unavailable: {e}")))?;
    let caps = regex
        .captures(entry)
        .ok_or_else(|| InvalidEnvError::new(entry, "entry is not shaped like name=value"))?;
    match (caps.get(1), caps.get(2)) {
        (Some(name), Some(value)) => Ok((name.as_str(), value.as_str())),
        _ => Err(InvalidEnvError::new(entry, "entry is not shaped like name=value")),
    }
}

/// Applies `op` to the variable `name` within `entries`.
///
/// Entries starting with `=` are Windows per-drive current directories
/// (`=C:=C:\dir`); they are skipped and never touched. The first entry
/// named `name` is rewritten in place. If there is none, a new entry is
/// appended at the end. Order of all other entries is preserved.
///
/// # Errors
///
/// Returns an [`InvalidEnvError`] for the first entry met before the match
/// that is not shaped like `name=value`. Entries are not modified in that case.
pub fn apply_path_envs(
    op: PathOp,
    entries: &mut Vec<String>,
    name: &str,
    values: &[&str],
) -> Result<(), InvalidEnvError> {
    for entry in entries.iter_mut() {
        if entry.find('=') == Some(0) {
            trace!(entry = %entry, "skipping pseudo-variable");
            continue;
        }
        let (entry_name, old) = split_entry(entry)?;
        if entry_name != name {
            continue;
        }
        let updated = format!("{name}={}", op.apply(old, values));
        debug!(%op, name, "updated environment entry");
        *entry = updated;
        return Ok(());
    }

    debug!(%op, name, "appended environment entry");
    entries.push(format!("{name}={}", op.apply("", values)));
    Ok(())
}

/// Prepends `values` to the variable `name`, adding it if missing.
///
/// # Errors
///
/// See [`apply_path_envs`].
pub fn prepend_path_envs(
    entries: &mut Vec<String>,
    name: &str,
    values: &[&str],
) -> Result<(), InvalidEnvError> {
    apply_path_envs(PathOp::Prepend, entries, name, values)
}

/// Appends `values` to the variable `name`, adding it if missing.
///
/// # Errors
///
/// See [`apply_path_envs`].
pub fn append_path_envs(
    entries: &mut Vec<String>,
    name: &str,
    values: &[&str],
) -> Result<(), InvalidEnvError> {
    apply_path_envs(PathOp::Append, entries, name, values)
}

/// Replaces the value of `name` with `values`, adding it if missing.
///
/// # Errors
///
/// See [`apply_path_envs`].
pub fn replace_path_envs(
    entries: &mut Vec<String>,
    name: &str,
    values: &[&str],
) -> Result<(), InvalidEnvError> {
    apply_path_envs(PathOp::Replace, entries, name, values)
}
