// rodeo-env: Child Process Environment Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for environment resolution.
//!
//! Drives the resolver through its public API with static and failing hosts.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use rodeo_env::core::env::container::{Env, PATH_KEY, PYTHONPATH_KEY};
use rodeo_env::core::platform::{CpuProbe, OsFamily, Platform};
use rodeo_env::error::{AppError, HostError};
use rodeo_env::host::{HostEnvironment, StaticHost};
use rodeo_env::resolver::EnvResolver;
use rodeo_env::resolver::builtin::BundledPython;
use rodeo_env::store::preferences::keys;
use rodeo_env::store::{MemoryPreferences, Session};

struct DownHost {
    calls: AtomicUsize,
}

impl HostEnvironment for DownHost {
    fn name(&self) -> &'static str {
        "down"
    }

    async fn fetch(&self) -> Result<Env, HostError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(HostError::Unavailable {
            host: self.name().to_string(),
            message: "shell exited with status 1".to_string(),
        })
    }
}

fn windows() -> Platform {
    Platform::new(OsFamily::Windows, CpuProbe::Fixed(NonZeroUsize::new(8).unwrap()))
}

fn windows_snapshot() -> Env {
    [
        ("Path", r"C:\Windows;C:\Foo"),
        ("SystemRoot", r"C:\Windows"),
        ("USERNAME", "user"),
        ("TEMP", r"C:\Temp"),
        ("TMP", r"C:\Temp"),
        ("COMPUTERNAME", "HOST"),
        ("OS", "Windows_NT"),
        ("PATHEXT", ".COM;.EXE;.BAT"),
        ("ProgramFiles", r"C:\Program Files"),
        ("windir", r"C:\Windows"),
        ("NUMBER_OF_PROCESSORS", ""),
    ]
    .into_iter()
    .collect()
}

fn bundled() -> BundledPython {
    BundledPython::from_resources(r"C:\App\resources", OsFamily::Windows)
}

// =============================================================================
// Full pipeline
// =============================================================================

#[tokio::test]
async fn resolve_windows_with_failover() {
    let session = Arc::new(Session::new());
    let preferences = MemoryPreferences::new()
        .with(keys::ADDITIONAL_PATH, vec![r"C:\Tools"])
        .with(keys::ADDITIONAL_PYTHON_PATH, vec![r"C:\PyLibs"]);
    let resolver = EnvResolver::builder()
        .with_host(StaticHost::new(windows_snapshot()))
        .with_preferences(preferences)
        .with_session(Arc::clone(&session))
        .with_platform(windows())
        .with_bundled(bundled())
        .build();

    let before = resolver.resolve(None).await.unwrap();
    assert_eq!(before.get(PATH_KEY), Some(r"C:\Tools;C:\Windows;C:\Foo"));
    assert_eq!(before.get("number_of_processors"), Some("8"));

    session.mark_python_failed_over();
    let after = resolver.resolve(None).await.unwrap();

    insta::assert_snapshot!(after.get(PATH_KEY).unwrap(), @r"C:\App\resources\conda\Scripts;C:\App\resources\conda\Lib;C:\App\resources\conda;C:\Tools;C:\Windows;C:\Foo");
    insta::assert_snapshot!(after.get(PYTHONPATH_KEY).unwrap(), @r"C:\App\resources\conda\DLLs;C:\App\resources\conda\Lib;C:\App\resources\conda\Lib\site-packages;C:\PyLibs");
    assert_eq!(after.original_key("path"), Some("Path"));
}

#[tokio::test]
async fn resolve_snapshot_from_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("env.json");
    std::fs::write(&file, r#"{"PATH": "/usr/bin", "LANG": "C"}"#).unwrap();

    let resolver = EnvResolver::builder()
        .with_host(StaticHost::from_json_file(&file).unwrap())
        .with_preferences(MemoryPreferences::new().with(keys::USE_BUILTIN_PYTHON, "no"))
        .with_platform(Platform::new(OsFamily::Unix, CpuProbe::Unavailable))
        .with_bundled(BundledPython::from_resources("/res", OsFamily::Unix))
        .build();

    let env = resolver.resolve(None).await.unwrap();

    insta::assert_snapshot!(serde_json::to_string(&env).unwrap(), @r#"{"CLICOLOR":"1","LANG":"C","PATH":"/usr/bin"}"#);
    assert_eq!(resolver.raw(), Some(env));
}

// =============================================================================
// Session sharing and failures
// =============================================================================

#[tokio::test]
async fn resolvers_sharing_a_session_fetch_once() {
    let session = Arc::new(Session::new());
    let first = EnvResolver::builder()
        .with_host(StaticHost::new(windows_snapshot()))
        .with_preferences(MemoryPreferences::new())
        .with_session(Arc::clone(&session))
        .with_platform(windows())
        .with_bundled(bundled())
        .build();
    first.resolve(None).await.unwrap();

    let down = DownHost {
        calls: AtomicUsize::new(0),
    };
    let second = EnvResolver::builder()
        .with_host(&down)
        .with_preferences(MemoryPreferences::new().with(
            keys::OVERRIDDEN_VARIABLES,
            serde_json::json!({ "USERNAME": "other" }),
        ))
        .with_session(session)
        .with_platform(windows())
        .with_bundled(bundled())
        .build();

    let env = second.resolve(None).await.unwrap();

    assert_eq!(down.calls.load(Ordering::SeqCst), 0);
    assert_eq!(env.get("USERNAME"), Some("other"));
    assert_eq!(second.raw().unwrap().get("USERNAME"), Some("user"));
}

#[tokio::test]
async fn resolve_host_failure_is_reported_and_retried() {
    let down = DownHost {
        calls: AtomicUsize::new(0),
    };
    let resolver = EnvResolver::builder()
        .with_host(&down)
        .with_preferences(MemoryPreferences::new())
        .with_platform(windows())
        .with_bundled(bundled())
        .build();

    let err = resolver.resolve(None).await.unwrap_err();
    assert!(matches!(err, AppError::Host(_)));
    insta::assert_snapshot!(err.to_string(), @"host error: host 'down' could not provide an environment: shell exited with status 1");
    assert!(resolver.raw().is_none());

    assert!(resolver.resolve(None).await.is_err());
    assert_eq!(down.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn resolve_explicit_env_without_host() {
    let down = DownHost {
        calls: AtomicUsize::new(0),
    };
    let resolver = EnvResolver::builder()
        .with_host(&down)
        .with_preferences(MemoryPreferences::new().with(keys::USE_BUILTIN_PYTHON, "yes"))
        .with_platform(windows())
        .with_bundled(bundled())
        .build();
    let explicit: Env = [("PATH", r"C:\App\resources\conda")].into_iter().collect();

    let env = resolver.resolve(Some(explicit)).await.unwrap();

    assert_eq!(down.calls.load(Ordering::SeqCst), 0);
    assert!(resolver.raw().is_none());
    assert_eq!(
        env.path_list(PATH_KEY, OsFamily::Windows).into_vec(),
        vec![
            r"C:\App\resources\conda\Scripts".to_string(),
            r"C:\App\resources\conda\Lib".to_string(),
            r"C:\App\resources\conda".to_string(),
        ]
    );
}
