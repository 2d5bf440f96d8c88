// pathkit: PATH-list environment and file copy helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities: permission-preserving copy and path comparison.
//!
//! ```text
//! copy:  copy_file()   temp file + rename, chmod to source mode
//!        copy_dir()    walk source, mkdir dirs, copy_file() the rest
//! walk:  walk_sorted() ignore::Walk, no filters, no symlinks, lexical order
//! path:  is_the_same() lexical absolute comparison
//!        clean_path(), exists(), is_dir()
//! ```

pub mod copy;
pub mod path;
pub mod walk;

pub use copy::{copy_dir, copy_file};
pub use path::{clean_path, exists, is_dir, is_the_same};
