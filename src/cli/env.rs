// pathkit: PATH-list environment and file copy helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Env command arguments.
//!
//! ```text
//! pathkit env [-o OP] [-n NAME] [-e ENTRY]... [--all] [--json] [VALUES]...
//!   no -e      → snapshot of the process environment
//!   no -o/-n   → env.op / env.variable from config
//! ```

use clap::Args;

use crate::env::types::PathOp;

/// Arguments for the `env` command.
#[derive(Debug, Clone, Default, Args)]
pub struct EnvArgs {
    /// How values are combined with the existing value (prepend, append, replace).
    #[arg(short = 'o', long = "op", value_name = "OP")]
    pub op: Option<PathOp>,

    /// Variable to modify.
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    pub name: Option<String>,

    /// Environment entry `name=value` to operate on instead of the process
    /// environment. Can be specified multiple times; order is kept.
    #[arg(short = 'e', long = "entry", value_name = "ENTRY", action = clap::ArgAction::Append)]
    pub entries: Vec<String>,

    /// Print every entry instead of only the modified one.
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Print entries as a JSON array.
    #[arg(long = "json")]
    pub json: bool,

    /// Values to add.
    #[arg(value_name = "VALUES")]
    pub values: Vec<String>,
}
