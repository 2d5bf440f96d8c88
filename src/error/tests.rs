// pathkit: PATH-list environment and file copy helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, FsError, InvalidEnvError, is_invalid_env};
use std::path::PathBuf;

#[test]
fn test_invalid_env_display() {
    let err = InvalidEnvError::new("virko", "entry is not shaped like name=value");
    insta::assert_snapshot!(err.to_string(), @r#""virko" is an invalid env: entry is not shaped like name=value"#);
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "global".to_string(),
        key: "log_level".to_string(),
        message: "log level must be 0-5, got 9".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"invalid value for 'log_level' in section '[global]': log level must be 0-5, got 9");
}

#[test]
fn test_not_a_directory_display() {
    let err = FsError::NotADirectory {
        path: PathBuf::from("missing"),
    };
    insta::assert_snapshot!(err.to_string(), @"missing is not a directory");
    assert_eq!(err.io_kind(), None);
}

#[test]
fn test_fs_io_error_is_transparent() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
    let err = FsError::from(io);
    assert_eq!(err.to_string(), "nope");
    assert_eq!(err.io_kind(), Some(std::io::ErrorKind::PermissionDenied));
}

#[test]
fn test_is_invalid_env() {
    let plain = anyhow::anyhow!("something else");
    let direct = anyhow::Error::new(InvalidEnvError::new("x", "bad"));
    let wrapped = anyhow::Error::new(InvalidEnvError::new("x", "bad"))
        .context("failed to prepend PATH")
        .context("env command");
    let fs = anyhow::Error::new(FsError::NotADirectory {
        path: PathBuf::from("x"),
    });

    assert!(!is_invalid_env(&plain));
    assert!(is_invalid_env(&direct));
    assert!(is_invalid_env(&wrapped));
    assert!(!is_invalid_env(&fs));
}
