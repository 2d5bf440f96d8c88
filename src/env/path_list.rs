// pathkit: PATH-list environment and file copy helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pure string operations on PATH-like values.
//!
//! None of these ever leave a stray separator at either end: an empty side
//! contributes nothing, separator included.

use super::types::PATH_LIST_SEPARATOR;

/// Returns `existing` with `values` put in front of it.
///
/// # Example
/// ```
/// use pathkit::env::path_list::prepend_path_env;
/// use pathkit::env::types::PATH_LIST_SEPARATOR as SEP;
///
/// let existing = format!("p1{SEP}p2");
/// assert_eq!(
///     prepend_path_env(&existing, &["p3", "p4"]),
///     format!("p3{SEP}p4{SEP}p1{SEP}p2"),
/// );
/// ```
#[must_use]
pub fn prepend_path_env(existing: &str, values: &[&str]) -> String {
    let mut path = values.join(PATH_LIST_SEPARATOR);
    if !existing.is_empty() {
        if !path.is_empty() {
            path.push_str(PATH_LIST_SEPARATOR);
        }
        path.push_str(existing);
    }
    path
}

/// Returns `existing` with `values` put after it.
#[must_use]
pub fn append_path_env(existing: &str, values: &[&str]) -> String {
    let joined = values.join(PATH_LIST_SEPARATOR);
    if existing.is_empty() {
        return joined;
    }
    let mut path = existing.to_string();
    if !joined.is_empty() {
        path.push_str(PATH_LIST_SEPARATOR);
        path.push_str(&joined);
    }
    path
}

/// Returns `values` joined, ignoring `existing`.
#[must_use]
pub fn replace_path_env(_existing: &str, values: &[&str]) -> String {
    values.join(PATH_LIST_SEPARATOR)
}
