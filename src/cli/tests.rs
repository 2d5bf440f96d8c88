// pathkit: PATH-list environment and file copy helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use crate::env::types::PathOp;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["pathkit", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_env() {
    let cli = Cli::try_parse_from([
        "pathkit", "env", "-o", "append", "-n", "GOPATH", "-e", "=C:=C:\\", "-e", "GOPATH=/go",
        "--all", "/src", "/pkg",
    ])
    .unwrap();
    let Some(Command::Env(args)) = cli.command else {
        panic!("expected env command");
    };
    assert_eq!(args.op, Some(PathOp::Append));
    assert_eq!(args.name.as_deref(), Some("GOPATH"));
    assert_eq!(args.entries, ["=C:=C:\\", "GOPATH=/go"]);
    assert!(args.all);
    assert!(!args.json);
    assert_eq!(args.values, ["/src", "/pkg"]);
}

#[test]
fn test_parse_env_rejects_unknown_op() {
    assert!(Cli::try_parse_from(["pathkit", "env", "-o", "insert"]).is_err());
}

#[test]
fn test_parse_copy_and_same() {
    let cli = Cli::try_parse_from(["pathkit", "copy", "a.txt", "out/"]).unwrap();
    let Some(Command::Copy(args)) = cli.command else {
        panic!("expected copy command");
    };
    assert_eq!(args.src, PathBuf::from("a.txt"));
    assert_eq!(args.dst, PathBuf::from("out/"));

    let cli = Cli::try_parse_from(["pathkit", "same", "dir", "dir/../dir"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Same(_))));
    assert!(Cli::try_parse_from(["pathkit", "same", "dir"]).is_err());
}

#[test]
fn test_global_options_to_overrides() {
    let cli = Cli::try_parse_from([
        "pathkit",
        "-l",
        "4",
        "--log-file",
        "out.log",
        "-s",
        "env.variable = GOPATH",
        "version",
    ])
    .unwrap();

    insta::assert_debug_snapshot!(cli.global.to_config_overrides(), @r#"
    [
        (
            "env.variable",
            "GOPATH",
        ),
        (
            "global.log_level",
            "4",
        ),
        (
            "global.file_log_level",
            "4",
        ),
        (
            "global.log_file",
            "out.log",
        ),
    ]
    "#);
}

#[test]
fn test_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["pathkit", "-l", "6", "version"]).is_err());
}
