// pathkit: PATH-list environment and file copy helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Copy and comparison command arguments.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `copy` command.
#[derive(Debug, Clone, Args)]
pub struct CopyArgs {
    /// File or directory to copy.
    #[arg(value_name = "SRC")]
    pub src: PathBuf,

    /// Destination file, or existing directory.
    #[arg(value_name = "DST")]
    pub dst: PathBuf,
}

/// Arguments for the `same` command.
#[derive(Debug, Clone, Args)]
pub struct SameArgs {
    /// First path.
    #[arg(value_name = "PATH")]
    pub lhs: PathBuf,

    /// Second path.
    #[arg(value_name = "OTHER")]
    pub rhs: PathBuf,
}
