// pathkit: PATH-list environment and file copy helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! PATH-like environment variable manipulation.
//!
//! # Architecture
//!
//! ```text
//! path_list   prepend/append/replace on a single value
//! entries     same ops on one variable of Vec<"name=value">
//! types       PathOp, PATH_LIST_SEPARATOR
//! ```
//!
//! - **Caller-owned**: entries are passed in; the process environment is never read here
//! - **Order-preserving**: one entry rewritten in place, or one pushed at the end

pub mod entries;
pub mod path_list;
pub mod types;

pub use entries::{
    append_path_envs, apply_path_envs, is_variable_name, prepend_path_envs, replace_path_envs,
};
pub use path_list::{append_path_env, prepend_path_env, replace_path_env};
pub use types::{PATH_LIST_SEPARATOR, PathOp};
