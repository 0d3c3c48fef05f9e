// rodeo-env: Child Process Environment Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use crate::store::BuiltinPython;
use clap::Parser;
use std::path::PathBuf;

fn render_overrides(cli: &Cli) -> String {
    cli.global
        .to_config_overrides()
        .unwrap()
        .into_iter()
        .map(|(key, value)| format!("{key} = {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["rodeo-env", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_no_command() {
    let cli = Cli::try_parse_from(["rodeo-env"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "rodeo-env",
        "-l",
        "5",
        "--config",
        "a.toml",
        "-c",
        "b.toml",
        "--resources",
        "/opt/res",
        "--builtin-python",
        "YES",
        "--failed-over",
        "options",
    ])
    .unwrap();

    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(
        cli.global.configs,
        vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    assert_eq!(cli.global.builtin_python, Some(BuiltinPython::Yes));
    assert!(cli.global.failed_over);
    assert!(matches!(cli.command, Some(Command::Options)));
}

#[test]
fn test_parse_rejects_bad_builtin_mode() {
    let result = Cli::try_parse_from(["rodeo-env", "--builtin-python", "sometimes", "resolve"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_rejects_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["rodeo-env", "-l", "7", "resolve"]).is_err());
}

#[test]
fn test_parse_resolve() {
    let cli = Cli::try_parse_from([
        "rodeo-env",
        "resolve",
        "--from-file",
        "env.json",
        "--key",
        "Path",
    ])
    .unwrap();

    let Some(Command::Resolve(args)) = cli.command else {
        panic!("expected resolve command");
    };
    assert_eq!(args.from_file, Some(PathBuf::from("env.json")));
    assert_eq!(args.key.as_deref(), Some("Path"));
    assert!(!args.json);
}

#[test]
fn test_parse_resolve_json_conflicts_with_key() {
    let result = Cli::try_parse_from(["rodeo-env", "resolve", "--json", "--key", "PATH"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_path_defaults_to_path() {
    let cli = Cli::try_parse_from(["rodeo-env", "path"]).unwrap();
    let Some(Command::Path(args)) = cli.command else {
        panic!("expected path command");
    };
    assert_eq!(args.key, "PATH");
    assert!(args.from_file.is_none());
}

#[test]
fn test_parse_keys() {
    let cli = Cli::try_parse_from(["rodeo-env", "keys", "-f", "snapshot.json"]).unwrap();
    let Some(Command::Keys(args)) = cli.command else {
        panic!("expected keys command");
    };
    assert_eq!(args.from_file, Some(PathBuf::from("snapshot.json")));
}

#[test]
fn test_config_overrides() {
    let cli = Cli::try_parse_from([
        "rodeo-env",
        "--set",
        "preferences.use_builtin_python=no",
        "-l",
        "4",
        "--log-json",
        "--builtin-python",
        "failover",
        "configs",
    ])
    .unwrap();

    insta::assert_snapshot!(render_overrides(&cli), @r"
    preferences.use_builtin_python = no
    global.output_log_level = 4
    global.file_log_level = 4
    global.log_format = json
    preferences.use_builtin_python = failover
    ");
}

#[test]
fn test_config_overrides_file_level_wins() {
    let cli =
        Cli::try_parse_from(["rodeo-env", "-l", "2", "--file-log-level", "6", "version"]).unwrap();

    insta::assert_snapshot!(render_overrides(&cli), @r"
    global.output_log_level = 2
    global.file_log_level = 6
    ");
}

#[test]
fn test_config_overrides_rejects_bad_set() {
    let cli = Cli::try_parse_from(["rodeo-env", "--set", "novalue", "version"]).unwrap();
    assert!(cli.global.to_config_overrides().is_err());
}
