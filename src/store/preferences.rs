// rodeo-env: Child Process Environment Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! User preferences and their typed readers.
//!
//! Values arrive untyped from the store. Readers return `None` for a value of
//! the wrong shape so the matching pipeline step is skipped instead of failing.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::core::env::path_list::PathList;
use crate::error::ConfigError;

/// Preference names.
pub mod keys {
    /// Directories put in front of `PATH`.
    pub const ADDITIONAL_PATH: &str = "additionalEnvironmentVariablePath";
    /// Directories put in front of `PYTHONPATH`.
    pub const ADDITIONAL_PYTHON_PATH: &str = "additionalEnvironmentVariablePythonPath";
    /// Variables that shadow the computed environment.
    pub const OVERRIDDEN_VARIABLES: &str = "overriddenEnvironmentVariables";
    /// When to inject the bundled interpreter.
    pub const USE_BUILTIN_PYTHON: &str = "useBuiltinPython";
}

/// Read access to user preferences.
pub trait PreferenceStore {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<Value>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn get(&self, key: &str) -> Option<Value> {
        (**self).get(key)
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Arc<T> {
    fn get(&self, key: &str) -> Option<Value> {
        (**self).get(key)
    }
}

/// In-memory preference store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryPreferences {
    values: BTreeMap<String, Value>,
}

impl MemoryPreferences {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value, replacing any previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }
}

/// When the bundled interpreter is injected into the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuiltinPython {
    /// Always inject.
    Yes,
    /// Never inject.
    No,
    /// Inject once the user's own interpreter has failed.
    #[default]
    Failover,
}

impl BuiltinPython {
    /// Whether the bundled interpreter should be injected.
    #[must_use]
    pub const fn should_inject(self, has_failed_over: bool) -> bool {
        match self {
            Self::Yes => true,
            Self::No => false,
            Self::Failover => has_failed_over,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Failover => "failover",
        }
    }
}

impl std::fmt::Display for BuiltinPython {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BuiltinPython {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            "failover" => Ok(Self::Failover),
            _ => Err(ConfigError::InvalidValue {
                section: "preferences".to_string(),
                key: "use_builtin_python".to_string(),
                message: format!("expected 'yes', 'no' or 'failover', got '{s}'"),
            }),
        }
    }
}

/// Reads a list of directories. Anything but an array of strings is ignored.
pub fn path_list<P: PreferenceStore + ?Sized>(store: &P, key: &str) -> Option<PathList> {
    let value = store.get(key)?;
    let Value::Array(items) = value else {
        debug!(key, "ignoring preference: not a list");
        return None;
    };
    let list: Option<PathList> = items
        .into_iter()
        .map(|item| match item {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect();
    if list.is_none() {
        debug!(key, "ignoring preference: list holds a non-string entry");
    }
    list
}

/// Reads the override map.
///
/// Strings, numbers and booleans become variable values; other entries are skipped.
pub fn overridden_variables<P: PreferenceStore + ?Sized>(
    store: &P,
) -> Option<Vec<(String, String)>> {
    let value = store.get(keys::OVERRIDDEN_VARIABLES)?;
    let Value::Object(entries) = value else {
        debug!(
            key = keys::OVERRIDDEN_VARIABLES,
            "ignoring preference: not a map"
        );
        return None;
    };
    let vars = entries
        .into_iter()
        .filter_map(|(name, value)| {
            let value = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => {
                    debug!(variable = %name, "ignoring override: not a scalar");
                    return None;
                }
            };
            Some((name, value))
        })
        .collect();
    Some(vars)
}

/// Reads the bundled-interpreter preference.
///
/// Missing or empty means [`BuiltinPython::Failover`]. An unknown value only
/// matches neither `yes` nor `failover`, so it behaves like
/// [`BuiltinPython::No`].
pub fn builtin_python<P: PreferenceStore + ?Sized>(store: &P) -> BuiltinPython {
    match store.get(keys::USE_BUILTIN_PYTHON) {
        None | Some(Value::Null) => BuiltinPython::default(),
        Some(Value::String(s)) if s.is_empty() => BuiltinPython::default(),
        Some(Value::String(s)) => s.parse().unwrap_or_else(|err| {
            debug!(error = %err, "unknown builtin python preference");
            BuiltinPython::No
        }),
        Some(other) => {
            debug!(value = %other, "unknown builtin python preference");
            BuiltinPython::No
        }
    }
}
