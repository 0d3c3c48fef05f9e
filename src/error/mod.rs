// rodeo-env: Child Process Environment Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!     AppError (~24 bytes)
//!            |
//!       +----+----+
//!       |         |
//!       v         v
//!     Host      Config
//!     Box        Box
//!
//! Sub-errors (unboxed internally):
//!   Host    Unavailable, Task
//!   Config  ReadError, ParseError, InvalidValue
//!
//! Soft conditions (tiny snapshot, CPU probe) are logged, never raised.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`AppError`].
pub type AppResult<T> = std::result::Result<T, AppError>;

/// Top-level library error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum AppError {
    /// The host environment could not be fetched.
    #[error("host error: {0}")]
    Host(#[from] Box<HostError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for AppError {
                fn from(err: $error) -> Self {
                    AppError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    HostError => Host,
    ConfigError => Config,
}

// --- Host Errors ---

/// Errors fetching the base environment from the host.
#[derive(Debug, Error)]
pub enum HostError {
    /// The host refused or failed the request.
    #[error("host '{host}' could not provide an environment: {message}")]
    Unavailable { host: String, message: String },

    /// The background task capturing the environment did not finish.
    #[error("environment capture task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file.
    #[error("failed to read '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a file.
    #[error("failed to parse '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}
