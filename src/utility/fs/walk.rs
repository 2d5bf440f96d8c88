// pathkit: PATH-list environment and file copy helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{FsError, FsResult};
use ignore::{DirEntry, Walk, WalkBuilder};
use std::io;
use std::path::Path;

/// Sequential walker over everything below `root`, siblings in lexical order.
/// Hidden and ignored files are included; symlinks are reported, not followed.
fn sorted_walker(root: &Path) -> Walk {
    WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build()
}

/// Walks `root` depth-first in pre-order, directory entries in lexical order,
/// and calls `visit` for every entry including the root itself.
///
/// The first error, from the walk or from `visit`, stops the walk and is
/// returned.
///
/// # Errors
///
/// Returns the walk error for an unreadable entry, or whatever `visit` returns.
///
/// # Example
/// ```no_run
/// use pathkit::utility::fs::walk::walk_sorted;
///
/// walk_sorted("/path/to/tree", |entry| {
///     println!("{}", entry.path().display());
///     Ok(())
/// })?;
/// # Ok::<(), pathkit::error::FsError>(())
/// ```
pub fn walk_sorted<P, F>(root: P, mut visit: F) -> FsResult<()>
where
    P: AsRef<Path>,
    F: FnMut(&DirEntry) -> FsResult<()>,
{
    for entry in sorted_walker(root.as_ref()) {
        let entry = entry.map_err(walk_error)?;
        visit(&entry)?;
    }
    Ok(())
}

/// Converts an `ignore` error into the I/O error it wraps, if there is one.
pub(super) fn walk_error(err: ignore::Error) -> FsError {
    let message = err.to_string();
    FsError::Io(
        err.into_io_error()
            .unwrap_or_else(|| io::Error::other(message)),
    )
}
