// rodeo-env: Child Process Environment Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Variables added to a freshly fetched environment.
//!
//! ```text
//! Windows:  NUMBER_OF_PROCESSORS missing/empty -> logical CPU count
//! others:   CLICOLOR undefined                -> "1"
//! ```
//!
//! These end up in the cached baseline, so users can still see and override them.

use tracing::{debug, warn};

use crate::core::env::container::Env;
use crate::core::platform::{OsFamily, Platform};

pub const NUMBER_OF_PROCESSORS: &str = "NUMBER_OF_PROCESSORS";
pub const CLICOLOR: &str = "CLICOLOR";

/// Adds the bonus variables for `platform`.
#[must_use]
pub fn add_bonus_variables(mut env: Env, platform: &Platform) -> Env {
    match platform.family() {
        OsFamily::Windows => {
            // Some Python packages read this and Windows does not always set it.
            if env.get(NUMBER_OF_PROCESSORS).is_none_or(str::is_empty) {
                match platform.logical_cpus() {
                    Ok(count) => {
                        debug!(count = count.get(), "setting {NUMBER_OF_PROCESSORS}");
                        env.set(NUMBER_OF_PROCESSORS, count.to_string());
                    }
                    Err(e) => warn!(error = %e, "failed to set {NUMBER_OF_PROCESSORS}"),
                }
            }
        }
        OsFamily::Unix => {
            if !env.contains_key(CLICOLOR) {
                env.set(CLICOLOR, "1");
            }
        }
    }
    env
}
