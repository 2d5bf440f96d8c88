// pathkit: PATH-list environment and file copy helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel, open_log_file};
use crate::config::types::GlobalConfig;
use std::path::PathBuf;

#[test]
fn test_directives_cap_other_crates_at_warn() {
    let directives: Vec<_> = (0..=5u8)
        .map(|n| LogLevel::try_from(n).unwrap().directive())
        .collect();
    insta::assert_snapshot!(directives.join("\n"), @r"
    off,pathkit=off
    error,pathkit=error
    warn,pathkit=warn
    warn,pathkit=info
    warn,pathkit=debug
    warn,pathkit=trace
    ");
}

#[test]
fn test_log_level_range() {
    assert!(LogLevel::try_from(6).is_err());
    assert_eq!(LogLevel::try_from(4).unwrap(), LogLevel::Debug);
    assert_eq!(u8::from(LogLevel::Trace), 5);
    assert_eq!(LogLevel::default(), LogLevel::Warn);
}

#[test]
fn test_log_level_serde() {
    let level: LogLevel = serde_json::from_str("3").unwrap();
    assert_eq!(level, LogLevel::Info);
    assert_eq!(serde_json::to_string(&LogLevel::Error).unwrap(), "1");
    let err = serde_json::from_str::<LogLevel>("7").unwrap_err();
    assert!(err.to_string().contains("log level must be 0-5, got 7"));
}

#[test]
fn test_log_config_from_global() {
    let global = GlobalConfig {
        log_level: LogLevel::Info,
        file_log_level: LogLevel::Trace,
        log_file: Some(PathBuf::from("logs/pathkit.log")),
    };
    let config = LogConfig::from(&global);
    assert_eq!(config.console_level, LogLevel::Info);
    assert_eq!(config.file_level, LogLevel::Trace);
    assert_eq!(config.log_file, Some(PathBuf::from("logs/pathkit.log")));

    let defaults = LogConfig::from(&GlobalConfig::default());
    assert_eq!(defaults.console_level, LogLevel::Warn);
    assert_eq!(defaults.file_level, LogLevel::Debug);
    assert_eq!(defaults.log_file, None);
}

#[test]
fn test_log_file_is_appended() {
    use std::io::Write;

    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("nested/dir/pathkit.log");

    writeln!(open_log_file(&path).unwrap(), "first run").unwrap();
    writeln!(open_log_file(&path).unwrap(), "second run").unwrap();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "first run\nsecond run\n"
    );
}
