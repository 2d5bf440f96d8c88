// pathkit: PATH-list environment and file copy helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config loading and the config-related commands.

use crate::cli::global::GlobalOptions;
use crate::config::Config;
use crate::config::loader::{ConfigLoader, ConfigSource};
use crate::error::Result;

/// Name of the configuration file read from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "pathkit.toml";

/// Collects the configuration files and environment layer selected by the
/// global options. Option overrides are applied by [`load_config`].
#[must_use]
pub fn config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.default_file(DEFAULT_CONFIG_FILE);
    }
    for ini in &global.inis {
        loader = loader.ini(ini);
    }
    loader.environment()
}

/// Loads the configuration for this run, CLI flags and `--set` on top.
///
/// # Errors
///
/// Returns an error for an unknown `--set` key, a missing `--ini` file, or
/// any invalid value.
pub fn load_config(global: &GlobalOptions) -> Result<Config> {
    let mut loader = config_loader(global);
    for (key, value) in global.to_config_overrides() {
        loader = loader.option(&key, &value)?;
    }
    loader.build()
}

/// Display current configuration options.
pub fn run_options_command(config: &Config) {
    for line in config.format_options() {
        println!("{line}");
    }
}

/// Display the configuration files used, in priority order.
pub fn run_inis_command(sources: &[ConfigSource]) {
    if sources.is_empty() {
        println!("No configuration files loaded");
        return;
    }
    for (i, source) in sources.iter().enumerate() {
        println!("{}. {source}", i + 1);
    }
}
