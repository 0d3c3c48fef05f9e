// rodeo-env: Child Process Environment Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for rodeo-env.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. --config files
//! 3. rodeo-env.toml (cwd, optional)
//! 4. RODEO_ENV_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! RODEO_ENV_GLOBAL__OUTPUT_LOG_LEVEL=4              → global.output_log_level = 4
//! RODEO_ENV_PREFERENCES__USE_BUILTIN_PYTHON=yes     → preferences.use_builtin_python = "yes"
//! RODEO_ENV_PREFERENCES__ADDITIONAL_PATH=/a,/b      → preferences.additional_path = ["/a", "/b"]
//! RODEO_ENV_PATHS__RESOURCES=/opt/app/resources     → paths.resources = "/opt/app/resources"
//! ```
//!
//! # Example
//!
//! ```toml
//! [preferences]
//! additional_path = ["/opt/tools/bin"]
//! overridden_variables = ["PYTHONIOENCODING=utf-8"]
//! use_builtin_python = "failover"
//! ```

pub mod loader;
pub mod paths;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

use loader::ConfigLoader;
use paths::PathsConfig;
use types::{GlobalConfig, PreferencesConfig};

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "rodeo-env.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "RODEO_ENV";

const UNSET: &str = "(unset)";

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// User preferences for the resolved environment.
    pub preferences: PreferencesConfig,
    /// Application paths.
    pub paths: PathsConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rodeo_env::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file("config/default.toml")
    ///     .add_toml_file_optional("rodeo-env.toml")
    ///     .with_env_prefix("RODEO_ENV")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Resolve default paths and validate preferences.
    ///
    /// # Errors
    ///
    /// Returns an error if an overridden variable is malformed or the
    /// resources root cannot be determined.
    pub fn resolve_and_validate(&mut self) -> Result<()> {
        self.preferences.overrides()?;
        self.paths.resolve()?;
        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_preferences_options(&mut options);
        self.format_paths_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(|| UNSET.to_string(), |p| p.display().to_string()),
        );
        options.insert(
            "global.log_format".into(),
            self.global.log_format.to_string(),
        );
    }

    fn format_preferences_options(&self, options: &mut BTreeMap<String, String>) {
        let fmt_list = |list: &Option<Vec<String>>| {
            list.as_ref()
                .map_or_else(|| UNSET.to_string(), |entries| entries.join(", "))
        };

        options.insert(
            "preferences.additional_path".into(),
            fmt_list(&self.preferences.additional_path),
        );
        options.insert(
            "preferences.additional_python_path".into(),
            fmt_list(&self.preferences.additional_python_path),
        );
        let overrides = &self.preferences.overridden_variables;
        options.insert(
            "preferences.overridden_variables".into(),
            if overrides.is_empty() {
                UNSET.to_string()
            } else {
                overrides.join(", ")
            },
        );
        options.insert(
            "preferences.use_builtin_python".into(),
            self.preferences
                .use_builtin_python
                .unwrap_or_default()
                .to_string(),
        );
    }

    fn format_paths_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "paths.resources".into(),
            self.paths.resources_dir().display().to_string(),
        );
    }
}
