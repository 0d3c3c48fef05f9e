// rodeo-env: Child Process Environment Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for rodeo-env.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, PreferencesConfig, PathsConfig
//! PreferencesConfig --to_store()--> MemoryPreferences (preference store keys)
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::logging::{LogFormat, LogLevel};
use crate::store::preferences::keys;
use crate::store::{BuiltinPython, MemoryPreferences};

/// Global configuration options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// Console log format.
    pub log_format: LogFormat,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
            log_format: LogFormat::Text,
        }
    }
}

/// User preferences applied on top of the host environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreferencesConfig {
    /// Directories put in front of `PATH`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_path: Option<Vec<String>>,
    /// Directories put in front of `PYTHONPATH`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_python_path: Option<Vec<String>>,
    /// `NAME=value` entries that shadow the computed environment.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub overridden_variables: Vec<String>,
    /// When to inject the bundled interpreter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_builtin_python: Option<BuiltinPython>,
}

impl PreferencesConfig {
    /// Parses `overridden_variables` into `(name, value)` pairs.
    ///
    /// The value may contain `=`; only the first one separates.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` for an entry without `=` or with
    /// an empty name.
    pub fn overrides(&self) -> Result<Vec<(String, String)>, ConfigError> {
        self.overridden_variables
            .iter()
            .map(String::as_str)
            .map(parse_assignment)
            .collect()
    }

    /// Converts the section into a preference store.
    ///
    /// Only options that are set become entries, so unset options fall back
    /// to the defaults of the resolver.
    ///
    /// # Errors
    ///
    /// Returns an error if an overridden variable is malformed.
    pub fn to_store(&self) -> Result<MemoryPreferences, ConfigError> {
        let mut store = MemoryPreferences::new();
        if let Some(path) = &self.additional_path {
            store.insert(keys::ADDITIONAL_PATH, path.clone());
        }
        if let Some(path) = &self.additional_python_path {
            store.insert(keys::ADDITIONAL_PYTHON_PATH, path.clone());
        }
        let overrides = self.overrides()?;
        if !overrides.is_empty() {
            let map: serde_json::Map<String, Value> = overrides
                .into_iter()
                .map(|(k, v)| (k, Value::String(v)))
                .collect();
            store.insert(keys::OVERRIDDEN_VARIABLES, map);
        }
        if let Some(mode) = self.use_builtin_python {
            store.insert(keys::USE_BUILTIN_PYTHON, mode.as_str());
        }
        Ok(store)
    }
}

/// Splits `NAME=value`.
///
/// # Errors
///
/// Returns a `ConfigError::InvalidValue` if there is no `=` or the name is empty.
pub fn parse_assignment(entry: &str) -> Result<(String, String), ConfigError> {
    match entry.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(ConfigError::InvalidValue {
            section: "preferences".to_string(),
            key: "overridden_variables".to_string(),
            message: format!("expected NAME=value, got '{entry}'"),
        }),
    }
}
