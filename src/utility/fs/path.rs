// pathkit: PATH-list environment and file copy helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Lexical path helpers and cheap existence checks.

use std::io;
use std::path::{Component, Path, PathBuf};

/// Cleans `path` lexically.
///
/// `.` components are dropped, `..` removes the preceding normal component,
/// `..` directly under the root is dropped, and an empty result becomes `.`.
/// Symbolic links are not consulted.
///
/// # Example
/// ```
/// use pathkit::utility::fs::path::clean_path;
/// use std::path::Path;
///
/// assert_eq!(clean_path(Path::new("dir/../dir/./x")), Path::new("dir/x"));
/// assert_eq!(clean_path(Path::new("")), Path::new("."));
/// ```
#[must_use]
pub fn clean_path(path: &Path) -> PathBuf {
    let mut components: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            c => components.push(c),
        }
    }

    if components.is_empty() {
        return PathBuf::from(".");
    }
    components.iter().collect()
}

/// Returns `path` made absolute against the working directory, then cleaned.
///
/// # Errors
///
/// Returns an error if the current working directory cannot be determined.
pub fn absolute_clean(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(clean_path(path));
    }
    Ok(clean_path(&std::env::current_dir()?.join(path)))
}

/// Reports whether `lhs` and `rhs` name the same file or directory.
///
/// Textually identical inputs are the same without touching the filesystem.
/// Otherwise both are made absolute and cleaned and the results compared.
/// Neither path has to exist, and symbolic links are not followed.
///
/// # Errors
///
/// Returns an error if the current working directory is needed and cannot
/// be determined.
pub fn is_the_same<L: AsRef<Path>, R: AsRef<Path>>(lhs: L, rhs: R) -> io::Result<bool> {
    let (lhs, rhs) = (lhs.as_ref(), rhs.as_ref());
    if lhs.as_os_str() == rhs.as_os_str() {
        return Ok(true);
    }
    Ok(absolute_clean(lhs)? == absolute_clean(rhs)?)
}

/// Reports whether `path` exists. "Not found" is `Ok(false)`.
///
/// # Errors
///
/// Returns any other error from querying the path's metadata.
pub fn exists<P: AsRef<Path>>(path: P) -> io::Result<bool> {
    match std::fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// Reports whether `path` is a directory.
///
/// # Errors
///
/// Returns an error if the path's metadata cannot be read, including when
/// it does not exist.
pub fn is_dir<P: AsRef<Path>>(path: P) -> io::Result<bool> {
    Ok(std::fs::metadata(path)?.is_dir())
}
