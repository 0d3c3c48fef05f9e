// rodeo-env: Child Process Environment Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Stores the resolver reads from.
//!
//! ```text
//! PreferenceStore (user preferences, read-only here)
//!   get(key) -> Option<serde_json::Value>
//!   additionalEnvironmentVariablePath        [string]
//!   additionalEnvironmentVariablePythonPath  [string]
//!   overriddenEnvironmentVariables           {string: string}
//!   useBuiltinPython                         "yes" | "no" | "failover"
//!
//! Session (process lifetime)
//!   environment          OnceCell<Env>, written once by the first fetch
//!   python_failed_over   bool, written by whoever sees the user's Python fail
//! ```

pub mod preferences;
pub mod session;

#[cfg(test)]
mod tests;

pub use preferences::{BuiltinPython, MemoryPreferences, PreferenceStore};
pub use session::Session;
