// rodeo-env: Child Process Environment Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogFormat, LogLevel};

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(6).is_ok());
    assert!(LogLevel::new(7).is_err());
    assert_eq!(LogLevel::from_u8(7), None);
}

#[test]
fn test_log_level_filters() {
    let filters: Vec<_> = (0..=6)
        .filter_map(LogLevel::from_u8)
        .map(|level| format!("{} => {}", level.as_u8(), level.to_filter_string()))
        .collect();

    insta::assert_snapshot!(filters.join("\n"), @r"
    0 => off
    1 => error
    2 => warn
    3 => warn,rodeo_env=info
    4 => warn,rodeo_env=debug
    5 => warn,rodeo_env=trace
    6 => trace
    ");
}

#[test]
fn test_log_level_to_tracing_level() {
    assert_eq!(LogLevel::SILENT.to_tracing_level(), None);
    assert_eq!(LogLevel::WARN.to_tracing_level(), Some(tracing::Level::WARN));
    assert_eq!(LogLevel::DUMP.to_tracing_level(), Some(tracing::Level::TRACE));
}

#[test]
fn test_log_level_serde() {
    let level: LogLevel = serde_json::from_str("4").unwrap();
    assert_eq!(level, LogLevel::DEBUG);
    assert_eq!(serde_json::to_string(&LogLevel::WARN).unwrap(), "2");
    assert!(serde_json::from_str::<LogLevel>("9").is_err());
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();

    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert_eq!(config.log_file(), None);
    assert!(config.show_timestamps());
    assert!(!config.show_target());
    assert_eq!(config.format(), LogFormat::Text);
}

#[test]
fn test_log_config_builder() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::WARN)
        .with_format(LogFormat::Json)
        .with_log_file("logs/rodeo-env.log".to_string())
        .build();

    assert_eq!(config.console_level(), LogLevel::WARN);
    assert_eq!(config.format(), LogFormat::Json);
    assert_eq!(config.log_file(), Some("logs/rodeo-env.log"));
}
