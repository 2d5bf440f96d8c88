// pathkit: PATH-list environment and file copy helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered configuration loading.
//!
//! ```text
//! ConfigLoader::new()
//!   .default_file("pathkit.toml")   skipped when absent
//!   .ini(FILE)...                   must exist
//!   .environment()                  PATHKIT_<SECTION>__<KEY>
//!   .option(key, value)...          --set and CLI flags, keys checked
//!        |
//!        v
//!   build() --> Config (validated)
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};

use super::{Config, OPTION_KEYS};
use crate::error::{ConfigError, Result};

/// Prefix of environment variables read by [`ConfigLoader::environment`].
pub const ENV_PREFIX: &str = "PATHKIT";

/// A configuration file that takes part in loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `pathkit.toml` from the working directory.
    Default(PathBuf),
    /// A file named with `--ini`.
    Ini(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default(path) => write!(f, "[default] {}", path.display()),
            Self::Ini(path) => write!(f, "[ini] {}", path.display()),
        }
    }
}

/// Collects configuration layers; later layers win.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    builder: ConfigBuilder<DefaultState>,
    sources: Vec<ConfigSource>,
    environment: bool,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the default configuration file if it exists.
    #[must_use]
    pub fn default_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        let path = path.as_ref();
        if path.is_file() {
            self.builder = self.builder.add_source(toml_file(path));
            self.sources.push(ConfigSource::Default(path.to_path_buf()));
        }
        self
    }

    /// Adds a file that must exist when [`build`](Self::build) runs.
    #[must_use]
    pub fn ini<P: AsRef<Path>>(mut self, path: P) -> Self {
        let path = path.as_ref();
        self.builder = self.builder.add_source(toml_file(path).required(true));
        self.sources.push(ConfigSource::Ini(path.to_path_buf()));
        self
    }

    /// Reads `PATHKIT_<SECTION>__<KEY>` variables when building, e.g.
    /// `PATHKIT_ENV__VARIABLE=GOPATH`.
    #[must_use]
    pub fn environment(mut self) -> Self {
        self.environment = true;
        self
    }

    /// Overrides a single option such as `env.variable`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `key` is not one of the
    /// options listed by the `options` command.
    pub fn option(mut self, key: &str, value: &str) -> Result<Self> {
        if !OPTION_KEYS.contains(&key) {
            let (section, name) = key.split_once('.').unwrap_or(("", key));
            return Err(ConfigError::InvalidValue {
                section: section.to_string(),
                key: name.to_string(),
                message: format!("unknown option, expected one of: {}", OPTION_KEYS.join(", ")),
            }
            .into());
        }
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| ConfigError::ParseError {
                source_name: format!("--set {key}"),
                message: e.to_string(),
            })?;
        Ok(self)
    }

    /// Files that take part in loading, in priority order.
    #[must_use]
    pub fn sources(&self) -> &[ConfigSource] {
        &self.sources
    }

    /// Merges every layer and checks the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseError`] naming the layers when an `--ini`
    /// file is missing, a file is not valid TOML, or a value has the wrong
    /// type, and [`ConfigError::InvalidValue`] when `env.variable` cannot
    /// name an environment entry.
    pub fn build(self) -> Result<Config> {
        let layers = self.describe_layers();
        let builder = if self.environment {
            self.builder.add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
        } else {
            self.builder
        };

        let config: Config = builder
            .build()
            .and_then(|merged| merged.try_deserialize())
            .map_err(|e| ConfigError::ParseError {
                source_name: layers,
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    fn describe_layers(&self) -> String {
        let mut layers: Vec<String> = self
            .sources
            .iter()
            .map(|source| match source {
                ConfigSource::Default(path) | ConfigSource::Ini(path) => {
                    path.display().to_string()
                }
            })
            .collect();
        if self.environment {
            layers.push(format!("{ENV_PREFIX}_* variables"));
        }
        if layers.is_empty() {
            "defaults".to_string()
        } else {
            layers.join(", ")
        }
    }
}

fn toml_file(path: &Path) -> File<config::FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Toml)
}
