// pathkit: PATH-list environment and file copy helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::loader::{ConfigLoader, ConfigSource};
use super::{Config, OPTION_KEYS};
use crate::env::types::PathOp;
use crate::logging::LogLevel;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_toml(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn load(content: &str) -> crate::error::Result<Config> {
    let temp = tempfile::tempdir().unwrap();
    let path = write_toml(&temp, "pathkit.toml", content);
    ConfigLoader::new().ini(path).build()
}

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.global.log_level, LogLevel::Warn);
    assert_eq!(config.global.file_log_level, LogLevel::Debug);
    assert_eq!(config.global.log_file, None);
    assert_eq!(config.env.variable, "PATH");
    assert_eq!(config.env.op, PathOp::Prepend);
    assert!(config.validate().is_ok());
}

#[test]
fn test_no_sources_gives_defaults() {
    let config = ConfigLoader::new().build().unwrap();
    assert_eq!(config.env.variable, "PATH");
    assert_eq!(config.global.log_level, LogLevel::Warn);
}

#[test]
fn test_parse_sections() {
    let config = load(
        r#"
[global]
log_level = 4
log_file = "logs/pathkit.log"

[env]
variable = "GOPATH"
op = "append"
"#,
    )
    .unwrap();

    assert_eq!(config.global.log_level, LogLevel::Debug);
    assert_eq!(config.global.log_file, Some(PathBuf::from("logs/pathkit.log")));
    assert_eq!(config.env.variable, "GOPATH");
    assert_eq!(config.env.op, PathOp::Append);
}

#[test]
fn test_parse_rejects_unknown_keys() {
    assert!(load("[env]\nvariabel = \"PATH\"\n").is_err());
    assert!(load("[paths]\nprefix = \"/x\"\n").is_err());
}

#[test]
fn test_parse_rejects_bad_values() {
    assert!(load("[global]\nlog_level = 9\n").is_err());
    assert!(load("[env]\nop = \"insert\"\n").is_err());
}

#[test]
fn test_variable_must_be_an_entry_name() {
    for bad in ["", "MY VAR", "A=B", "ÜBER"] {
        let err = load(&format!("[env]\nvariable = {bad:?}\n")).unwrap_err();
        assert!(
            format!("{err:#}").contains("invalid value for 'variable' in section '[env]'"),
            "{bad:?}: {err:#}"
        );
    }
}

#[test]
fn test_parse_error_names_the_file() {
    let temp = tempfile::tempdir().unwrap();
    let path = write_toml(&temp, "broken.toml", "[env\n");

    let err = ConfigLoader::new().ini(&path).build().unwrap_err();

    assert!(format!("{err:#}").contains(&path.display().to_string()));
}

#[test]
fn test_later_layers_override_earlier() {
    let temp = tempfile::tempdir().unwrap();
    let first = write_toml(&temp, "a.toml", "[env]\nvariable = \"A\"\nop = \"replace\"\n");
    let second = write_toml(&temp, "b.toml", "[env]\nvariable = \"B\"\n");

    let config = ConfigLoader::new()
        .ini(&first)
        .ini(&second)
        .option("global.log_level", "5")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.env.variable, "B");
    assert_eq!(config.env.op, PathOp::Replace);
    assert_eq!(config.global.log_level, LogLevel::Trace);
}

#[test]
fn test_option_rejects_unknown_key() {
    let err = ConfigLoader::new()
        .option("env.varaible", "GOPATH")
        .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"invalid value for 'varaible' in section '[env]': unknown option, expected one of: env.op, env.variable, global.file_log_level, global.log_file, global.log_level");
}

#[test]
fn test_sources_skip_missing_default() {
    let temp = tempfile::tempdir().unwrap();
    let present = write_toml(&temp, "extra.toml", "[env]\nop = \"append\"\n");

    let loader = ConfigLoader::new()
        .default_file(temp.path().join("pathkit.toml"))
        .ini(&present);

    assert_eq!(loader.sources(), [ConfigSource::Ini(present.clone())]);
    assert_eq!(loader.build().unwrap().env.op, PathOp::Append);
}

#[test]
fn test_source_display() {
    let sources = [
        ConfigSource::Default(PathBuf::from("pathkit.toml")),
        ConfigSource::Ini(Path::new("conf").join("extra.toml")),
    ];
    assert_eq!(sources[0].to_string(), "[default] pathkit.toml");
    assert!(sources[1].to_string().starts_with("[ini] conf"));
}

#[test]
fn test_every_option_key_has_a_value() {
    let config = Config::default();
    for key in OPTION_KEYS {
        assert!(config.option(key).is_some(), "{key}");
    }
    assert_eq!(config.option("env.nope"), None);
}

#[test]
fn test_format_options() {
    let config = load("[env]\nvariable = \"GOPATH\"\n").unwrap();
    insta::assert_snapshot!(config.format_options().join("\n"), @r"
    env.op                = prepend
    env.variable          = GOPATH
    global.file_log_level = 4
    global.log_file       = <unset>
    global.log_level      = 2
    ");
}
