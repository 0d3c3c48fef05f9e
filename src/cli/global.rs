// rodeo-env: Child Process Environment Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE       ← Additional config files (can repeat)
//! --log-level N       ← Console verbosity (0-6)
//! --file-log-level    ← File verbosity (defaults to --log-level)
//! --log-file FILE     ← global.log_file
//! --log-json          ← global.log_format = "json"
//! --resources DIR     ← paths.resources
//! --builtin-python M  ← preferences.use_builtin_python
//! --set KEY=VAL       ← Direct config override
//! --failed-over       ← Session flag, not a config option
//!
//! Precedence: CLI flags > --set > RODEO_ENV_* > --config > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::types::parse_assignment;
use crate::error::ConfigError;
use crate::store::BuiltinPython;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Writes console logs as JSON objects.
    #[arg(long = "log-json")]
    pub log_json: bool,

    /// Resources directory holding the bundled interpreter under `conda/`.
    #[arg(short = 'r', long = "resources", value_name = "DIR")]
    pub resources: Option<PathBuf>,

    /// When to inject the bundled Python interpreter (yes, no, failover).
    #[arg(long = "builtin-python", value_name = "MODE")]
    pub builtin_python: Option<BuiltinPython>,

    /// Treats the system Python interpreter as having failed.
    #[arg(long = "failed-over")]
    pub failed_over: bool,

    /// Sets an option, such as 'preferences.use_builtin_python=no'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "OPTION", action = clap::ArgAction::Append)]
    pub options: Vec<String>,

    /// Disables loading `rodeo-env.toml` from the current directory.
    #[arg(long = "no-default-config")]
    pub no_default_config: bool,
}

impl GlobalOptions {
    /// Converts command-line options to configuration overrides.
    ///
    /// `--set` entries come first so dedicated flags take precedence.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` for a `--set` entry without `=`.
    pub fn to_config_overrides(&self) -> Result<Vec<(String, config::Value)>, ConfigError> {
        let mut overrides = Vec::new();

        for option in &self.options {
            let (key, value) = parse_assignment(option).map_err(|_| ConfigError::InvalidValue {
                section: "cli".to_string(),
                key: "set".to_string(),
                message: format!("expected KEY=VALUE, got '{option}'"),
            })?;
            overrides.push((key, config::Value::from(value)));
        }

        if let Some(level) = self.log_level {
            overrides.push((
                "global.output_log_level".to_string(),
                i64::from(level).into(),
            ));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push((
                "global.file_log_level".to_string(),
                i64::from(level).into(),
            ));
        }

        if let Some(ref path) = self.log_file {
            overrides.push((
                "global.log_file".to_string(),
                path.display().to_string().into(),
            ));
        }

        if self.log_json {
            overrides.push(("global.log_format".to_string(), "json".into()));
        }

        if let Some(ref resources) = self.resources {
            overrides.push((
                "paths.resources".to_string(),
                resources.display().to_string().into(),
            ));
        }

        if let Some(mode) = self.builtin_python {
            overrides.push((
                "preferences.use_builtin_python".to_string(),
                mode.as_str().into(),
            ));
        }

        Ok(overrides)
    }
}
