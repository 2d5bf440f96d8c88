// pathkit: PATH-list environment and file copy helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! fs
//!   copy:  copy_file(), copy_dir()
//!   walk:  walk_sorted()
//!   path:  is_the_same(), clean_path(), exists(), is_dir()
//! ```

pub mod fs;
