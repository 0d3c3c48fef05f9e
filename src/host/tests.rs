// rodeo-env: Child Process Environment Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::Write as _;

use super::{HostEnvironment, ProcessHost, StaticHost};
use crate::core::env::container::Env;
use crate::error::AppError;

#[tokio::test]
async fn test_process_host_captures_path() {
    let env = ProcessHost.fetch().await.unwrap();
    assert!(env.get("PATH").is_some());
}

#[tokio::test]
async fn test_static_host_returns_copy() {
    let base: Env = [("HOME", "/home/u")].into_iter().collect();
    let host = StaticHost::new(base.clone());

    let mut fetched = host.fetch().await.unwrap();
    fetched.set("HOME", "/elsewhere");

    assert_eq!(host.env().get("HOME"), Some("/home/u"));
    assert_eq!(host.name(), "static");
}

#[test]
fn test_static_host_from_json_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"PATH": "/usr/bin", "LANG": "C.UTF-8"}}"#).unwrap();

    let host = StaticHost::from_json_file(file.path()).unwrap();
    assert_eq!(host.env().get("lang"), Some("C.UTF-8"));
    assert_eq!(host.env().len(), 2);
}

#[test]
fn test_static_host_from_invalid_json_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"PATH": ["not", "a", "string"]}}"#).unwrap();

    let err = StaticHost::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, AppError::Config(_)), "{err}");
    assert!(err.to_string().starts_with("config error: failed to parse"), "{err}");
}
