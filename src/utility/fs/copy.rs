// pathkit: PATH-list environment and file copy helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{FsError, FsResult};
use std::fs::{self, File, Permissions};
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempPath;
use tracing::{debug, trace, warn};

use super::path::{clean_path, is_dir, is_the_same};
use super::walk::{walk_error, walk_sorted};

/// Copies `src` into `dst`, preserving the permissions of `src`.
///
/// If `dst` is an existing directory, the copy lands in it under the file
/// name of `src`. An existing non-directory `dst` is overwritten. If both
/// paths name the same entry, nothing happens.
///
/// Bytes are first written to a temporary file next to `dst` and then
/// renamed into place, so the destination name never refers to a partial
/// file. The temporary file is removed on every failure.
///
/// # Example
/// ```no_run
/// use pathkit::utility::fs::copy::copy_file;
///
/// copy_file("/backup/hosts", "/etc/hosts")?;
/// # Ok::<(), pathkit::error::FsError>(())
/// ```
///
/// # Errors
///
/// Returns the I/O error of the first failing step: opening or reading
/// `src`, creating the temporary file, inspecting `dst`, renaming, or
/// setting permissions. In the last case the new destination is removed.
pub fn copy_file<D: AsRef<Path>, S: AsRef<Path>>(dst: D, src: S) -> FsResult<()> {
    let (dst, src) = (dst.as_ref(), src.as_ref());
    if is_the_same(dst, src)? {
        trace!(path = %src.display(), "source and destination are the same");
        return Ok(());
    }

    let mut input = File::open(src)?;
    let permissions = input.metadata()?.permissions();

    let temp = copy_to_temp(&mut input, dst)?;
    drop(input);

    let target = resolve_target(dst, src)?;
    temp.persist(&target).map_err(|e| e.error)?;

    apply_or_remove(&target, |path| fs::set_permissions(path, permissions))?;

    debug!(src = %src.display(), dst = %target.display(), "copied file");
    Ok(())
}

/// Runs `apply` on a freshly renamed `target`, removing `target` if it fails.
pub(super) fn apply_or_remove<F>(target: &Path, apply: F) -> io::Result<()>
where
    F: FnOnce(&Path) -> io::Result<()>,
{
    apply(target).inspect_err(|_| {
        if let Err(rm) = fs::remove_file(target) {
            warn!(path = %target.display(), error = %rm, "failed to remove destination");
        }
    })
}

/// Directory that holds the temporary file for a copy to `dst`.
///
/// A bare root such as `/` has no parent and is its own directory.
pub(super) fn temp_dir_for(dst: &Path) -> &Path {
    match dst.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        None if dst.has_root() => dst,
        _ => Path::new("."),
    }
}

/// Streams `input` into a new temporary file in the directory picked by
/// [`temp_dir_for`].
///
/// The returned path is closed and deletes itself when dropped.
fn copy_to_temp(input: &mut File, dst: &Path) -> io::Result<TempPath> {
    let mut temp = tempfile::Builder::new()
        .prefix(".pathkit")
        .tempfile_in(temp_dir_for(dst))?;
    io::copy(input, &mut temp)?;
    Ok(temp.into_temp_path())
}

/// Resolves the final destination name for a copy of `src`.
fn resolve_target(dst: &Path, src: &Path) -> io::Result<PathBuf> {
    match fs::metadata(dst) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(dst.to_path_buf()),
        Err(e) => Err(e),
        Ok(meta) if meta.is_dir() => {
            let name = src.file_name().unwrap_or_else(|| src.as_os_str());
            Ok(dst.join(name))
        }
        Ok(_) => Ok(dst.to_path_buf()),
    }
}

/// Fails with [`FsError::NotADirectory`] unless `path` is an existing directory.
fn ensure_dir(path: &Path) -> FsResult<()> {
    match is_dir(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(FsError::NotADirectory {
            path: path.to_path_buf(),
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(FsError::NotADirectory {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(e.into()),
    }
}

/// Recursively copies the contents of directory `src` into directory `dst`.
///
/// Both must already exist; `dst` is not created. Directories are
/// recreated with the permissions of their source and every other entry
/// is copied with [`copy_file`]. If both paths name the same directory,
/// nothing happens.
///
/// The first failure aborts the copy. Whatever was copied up to that point
/// stays in place.
///
/// # Example
/// ```no_run
/// use pathkit::utility::fs::copy::copy_dir;
///
/// std::fs::create_dir_all("/backup/project")?;
/// copy_dir("/backup/project", "/src/project")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
///
/// Returns [`FsError::NotADirectory`] if `src` or `dst` is missing or not a
/// directory, and the underlying I/O error for any failed walk, directory
/// creation, or file copy.
pub fn copy_dir<D: AsRef<Path>, S: AsRef<Path>>(dst: D, src: S) -> FsResult<()> {
    let (dst, src) = (clean_path(dst.as_ref()), clean_path(src.as_ref()));
    if is_the_same(&dst, &src)? {
        trace!(path = %src.display(), "source and destination are the same");
        return Ok(());
    }
    for dir in [&src, &dst] {
        ensure_dir(dir)?;
    }

    walk_sorted(&src, |entry| {
        let path = entry.path();
        let dest = match path.strip_prefix(&src) {
            Ok(rel) if rel.as_os_str().is_empty() => dst.clone(),
            Ok(rel) => dst.join(rel),
            Err(_) => dst.join(path),
        };

        if entry.file_type().is_some_and(|ft| ft.is_dir()) {
            let permissions = entry.metadata().map_err(walk_error)?.permissions();
            create_dir_with(&dest, &permissions)?;
            trace!(dir = %dest.display(), "created directory");
            return Ok(());
        }
        copy_file(&dest, path)
    })?;

    debug!(src = %src.display(), dst = %dst.display(), "copied directory");
    Ok(())
}

/// Creates `path` and any missing parents, applying `permissions` to the
/// directories it creates.
#[cfg(unix)]
fn create_dir_with(path: &Path, permissions: &Permissions) -> io::Result<()> {
    use std::os::unix::fs::{DirBuilderExt, PermissionsExt};
    fs::DirBuilder::new()
        .recursive(true)
        .mode(permissions.mode() & 0o7777)
        .create(path)
}

#[cfg(not(unix))]
fn create_dir_with(path: &Path, _permissions: &Permissions) -> io::Result<()> {
    fs::create_dir_all(path)
}
