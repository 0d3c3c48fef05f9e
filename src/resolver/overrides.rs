// rodeo-env: Child Process Environment Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! User override layer.
//!
//! ```text
//! PATH       = additionalEnvironmentVariablePath ++ PATH
//! PYTHONPATH = additionalEnvironmentVariablePythonPath ++ PYTHONPATH
//! env        = env <- overriddenEnvironmentVariables (override wins)
//! ```

use tracing::debug;

use crate::core::env::container::{Env, PATH_KEY, PYTHONPATH_KEY};
use crate::core::platform::OsFamily;
use crate::store::preferences::{self, PreferenceStore, keys};

/// Applies the user's additional paths and overridden variables.
#[must_use]
pub fn apply_overrides<P>(mut env: Env, prefs: &P, family: OsFamily) -> Env
where
    P: PreferenceStore + ?Sized,
{
    let current_path = env.path_list(PATH_KEY, family);
    let current_python_path = env.path_list(PYTHONPATH_KEY, family);

    if let Some(additional) = preferences::path_list(prefs, keys::ADDITIONAL_PATH) {
        debug!(entries = additional.len(), "prepending additional PATH entries");
        env.set_path_list(PATH_KEY, &current_path.prefixed_by(&additional), family);
    }

    if let Some(additional) = preferences::path_list(prefs, keys::ADDITIONAL_PYTHON_PATH) {
        debug!(
            entries = additional.len(),
            "prepending additional PYTHONPATH entries"
        );
        env.set_path_list(
            PYTHONPATH_KEY,
            &current_python_path.prefixed_by(&additional),
            family,
        );
    }

    if let Some(overridden) = preferences::overridden_variables(prefs) {
        debug!(count = overridden.len(), "applying overridden variables");
        env.overlay(overridden);
    }

    env
}
