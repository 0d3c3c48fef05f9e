// rodeo-env: Child Process Environment Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use serde_json::json;

use super::preferences::{self, keys};
use super::{BuiltinPython, MemoryPreferences, Session};
use crate::core::env::container::Env;
use crate::core::env::path_list::PathList;

#[test]
fn test_builtin_python_decision_table() {
    let table: Vec<String> = [BuiltinPython::Yes, BuiltinPython::No, BuiltinPython::Failover]
        .into_iter()
        .flat_map(|mode| {
            [false, true].map(|failed| format!("{mode}/{failed}={}", mode.should_inject(failed)))
        })
        .collect();

    insta::assert_snapshot!(table.join("\n"), @r"
    yes/false=true
    yes/true=true
    no/false=false
    no/true=false
    failover/false=false
    failover/true=true
    ");
}

#[test]
fn test_builtin_python_parse() {
    assert_eq!("yes".parse::<BuiltinPython>().unwrap(), BuiltinPython::Yes);
    assert_eq!("NO".parse::<BuiltinPython>().unwrap(), BuiltinPython::No);
    assert_eq!(
        "failover".parse::<BuiltinPython>().unwrap(),
        BuiltinPython::Failover
    );
    assert!("maybe".parse::<BuiltinPython>().is_err());
}

#[test]
fn test_builtin_python_preference_reader() {
    let empty = MemoryPreferences::new();
    assert_eq!(preferences::builtin_python(&empty), BuiltinPython::Failover);

    let blank = MemoryPreferences::new().with(keys::USE_BUILTIN_PYTHON, "");
    assert_eq!(preferences::builtin_python(&blank), BuiltinPython::Failover);

    let yes = MemoryPreferences::new().with(keys::USE_BUILTIN_PYTHON, "yes");
    assert_eq!(preferences::builtin_python(&yes), BuiltinPython::Yes);

    let unknown = MemoryPreferences::new().with(keys::USE_BUILTIN_PYTHON, "sometimes");
    assert_eq!(preferences::builtin_python(&unknown), BuiltinPython::No);

    let wrong_type = MemoryPreferences::new().with(keys::USE_BUILTIN_PYTHON, 3);
    assert_eq!(preferences::builtin_python(&wrong_type), BuiltinPython::No);
}

#[test]
fn test_path_list_reader() {
    let prefs = MemoryPreferences::new()
        .with(keys::ADDITIONAL_PATH, json!(["/extra", "/more"]))
        .with(keys::ADDITIONAL_PYTHON_PATH, "/not/a/list");

    assert_eq!(
        preferences::path_list(&prefs, keys::ADDITIONAL_PATH),
        Some(PathList::from(vec!["/extra".to_string(), "/more".to_string()]))
    );
    assert_eq!(
        preferences::path_list(&prefs, keys::ADDITIONAL_PYTHON_PATH),
        None
    );
    assert_eq!(preferences::path_list(&prefs, "missing"), None);
}

#[test]
fn test_path_list_reader_rejects_mixed_entries() {
    let prefs = MemoryPreferences::new().with(keys::ADDITIONAL_PATH, json!(["/ok", 42]));
    assert_eq!(preferences::path_list(&prefs, keys::ADDITIONAL_PATH), None);
}

#[test]
fn test_overridden_variables_reader() {
    let prefs = MemoryPreferences::new().with(
        keys::OVERRIDDEN_VARIABLES,
        json!({"FOO": "bar", "JOBS": 4, "DEBUG": true, "NESTED": {"a": 1}}),
    );

    let mut vars = preferences::overridden_variables(&prefs).unwrap();
    vars.sort();
    insta::assert_snapshot!(format!("{vars:?}"), @r#"[("DEBUG", "true"), ("FOO", "bar"), ("JOBS", "4")]"#);

    let not_a_map = MemoryPreferences::new().with(keys::OVERRIDDEN_VARIABLES, json!(["FOO=bar"]));
    assert!(preferences::overridden_variables(&not_a_map).is_none());
}

#[test]
fn test_session_failover_flag() {
    let session = Session::new();
    assert!(!session.has_python_failed_over());

    session.mark_python_failed_over();
    assert!(session.has_python_failed_over());

    session.set_python_failed_over(false);
    assert!(!session.has_python_failed_over());
}

#[test]
fn test_session_cache_is_write_once() {
    let session = Session::new();
    assert!(session.cached_environment().is_none());

    let first: Env = [("A", "1")].into_iter().collect();
    let second: Env = [("B", "2")].into_iter().collect();

    assert!(session.store_environment(first.clone()));
    assert!(!session.store_environment(second));
    assert_eq!(session.cached_environment(), Some(first));
}
