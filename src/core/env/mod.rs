// rodeo-env: Child Process Environment Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! Env (copy-on-write BTreeMap<EnvKey, String>)
//! Sources: current_env(), Env::from_map(), JSON
//! Ops: get/set/overlay, key_map, path_list/set_path_list
//!
//! PathList (ordered Vec<String>)
//! Ops: parse/join per OsFamily, prepend_unique, prepend_block
//! ```
//!
//! - **Case-insensitive lookup, case-preserving keys**
//! - **Copy-on-write**: Clones share data until modified
//! - **Separator by platform**: `;` on Windows, `:` elsewhere

pub mod container;
pub mod path_list;
pub mod types;


/// Captures the current process environment.
///
/// Variables whose name or value is not valid Unicode are skipped.
#[must_use]
pub fn current_env() -> container::Env {
    std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}
