// pathkit: PATH-list environment and file copy helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for pathkit using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! pathkit [global options] <command>
//! env [VALUES...]
//! copy SRC DST
//! same PATH OTHER
//! options | inis | version
//! ```

pub mod copy;
pub mod env;
pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::copy::{CopyArgs, SameArgs};
use crate::cli::env::EnvArgs;
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// PATH-list environment and file copy helpers.
#[derive(Debug, Parser)]
#[command(
    name = "pathkit",
    author,
    version,
    about = "PATH-list environment and file copy helpers",
    long_about = "pathkit Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Edits PATH-like variables inside a list of environment entries,\n\
                  and copies files and directory trees keeping their permissions.",
    after_help = "CONFIG FILES:\n\n\
                  pathkit reads `pathkit.toml` from the current directory when it\n\
                  exists, then every file given with --ini, in order. Variables\n\
                  named PATHKIT_<SECTION>__<KEY> and --set options override both."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the configuration files used.
    Inis,

    /// Prepends, appends, or replaces values of a PATH-like variable.
    Env(EnvArgs),

    /// Copies a file, or a directory tree into an existing directory.
    Copy(CopyArgs),

    /// Reports whether two paths name the same entry.
    Same(SameArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
