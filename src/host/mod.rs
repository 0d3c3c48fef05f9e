// rodeo-env: Child Process Environment Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sources of the raw base environment.
//!
//! ```text
//! HostEnvironment::fetch() --await--> Env | HostError
//!   ProcessHost   snapshot of this process (blocking task)
//!   StaticHost    fixed snapshot, e.g. read from a JSON file
//! ```
//!
//! Fetching is the only suspension point of a resolution.

use std::future::Future;
use std::path::Path;

use tracing::debug;

use crate::core::env::container::Env;
use crate::core::env::current_env;
use crate::error::{AppResult, ConfigError, HostError};

/// Something that can provide the environment a login shell would see.
pub trait HostEnvironment {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Fetches a fresh environment snapshot.
    fn fetch(&self) -> impl Future<Output = std::result::Result<Env, HostError>> + Send;
}

impl<T: HostEnvironment + Sync + ?Sized> HostEnvironment for &T {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn fetch(&self) -> impl Future<Output = std::result::Result<Env, HostError>> + Send {
        (**self).fetch()
    }
}

/// Snapshots the environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessHost;

impl HostEnvironment for ProcessHost {
    fn name(&self) -> &'static str {
        "process"
    }

    async fn fetch(&self) -> std::result::Result<Env, HostError> {
        let env = tokio::task::spawn_blocking(current_env).await?;
        debug!(host = self.name(), vars = env.len(), "captured environment");
        Ok(env)
    }
}

/// Serves a fixed snapshot.
#[derive(Debug, Clone, Default)]
pub struct StaticHost {
    env: Env,
}

impl StaticHost {
    #[must_use]
    pub const fn new(env: Env) -> Self {
        Self { env }
    }

    /// Loads a snapshot from a JSON object of `NAME: value` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`](crate::error::AppError::Config) if the file
    /// cannot be read or is not a JSON object of strings.
    pub fn from_json_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.display().to_string(),
            source,
        })?;
        let env = serde_json::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(Self::new(env))
    }

    #[must_use]
    pub const fn env(&self) -> &Env {
        &self.env
    }
}

impl HostEnvironment for StaticHost {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn fetch(&self) -> std::result::Result<Env, HostError> {
        Ok(self.env.clone())
    }
}

#[cfg(test)]
mod tests;
