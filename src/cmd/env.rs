// pathkit: PATH-list environment and file copy helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Env command implementation for pathkit.

use anyhow::{Context, ensure};
use tracing::info;

use crate::cli::env::EnvArgs;
use crate::config::Config;
use crate::env::{apply_path_envs, is_variable_name};
use crate::env::entries::split_entry;
use crate::error::Result;

/// Captures the process environment as `name=value` entries.
#[must_use]
pub fn process_entries() -> Vec<String> {
    std::env::vars_os()
        .map(|(name, value)| format!("{}={}", name.to_string_lossy(), value.to_string_lossy()))
        .collect()
}

/// Applies the requested operation and returns the entries to print.
///
/// # Errors
///
/// Returns an error if `--name` is not a variable name, or if an entry
/// scanned before the variable is not shaped like `name=value`.
pub fn apply_env_args(args: &EnvArgs, config: &Config) -> Result<Vec<String>> {
    let mut entries = if args.entries.is_empty() {
        process_entries()
    } else {
        args.entries.clone()
    };
    let name = args.name.as_deref().unwrap_or(&config.env.variable);
    ensure!(is_variable_name(name), "{name:?} is not a variable name");
    let op = args.op.unwrap_or(config.env.op);
    let values: Vec<&str> = args.values.iter().map(String::as_str).collect();

    apply_path_envs(op, &mut entries, name, &values)
        .with_context(|| format!("failed to {op} {name}"))?;
    info!(%op, name, count = values.len(), "environment updated");

    if args.all {
        return Ok(entries);
    }
    Ok(entries
        .into_iter()
        .filter(|entry| entry.find('=') != Some(0))
        .find(|entry| split_entry(entry).is_ok_and(|(n, _)| n == name))
        .into_iter()
        .collect())
}

/// Main handler for the env command.
///
/// # Errors
///
/// Returns an error if the operation fails or the output cannot be encoded.
pub fn run_env_command(args: &EnvArgs, config: &Config) -> Result<()> {
    let entries = apply_env_args(args, config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in &entries {
            println!("{entry}");
        }
    }
    Ok(())
}
