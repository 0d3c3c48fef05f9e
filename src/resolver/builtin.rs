// rodeo-env: Child Process Environment Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Bundled interpreter layer.
//!
//! ```text
//! <resources>/conda            root
//!   DLLs/  Lib/  Lib/site-packages/  Scripts/
//!
//! active = useBuiltinPython.should_inject(hasPythonFailedOver)
//!   Windows:  PYTHONPATH = DLLs ; Lib ; site-packages ; <existing>
//!   always:   PATH       = Scripts ; Lib ; root ; <existing>   (present dirs skipped)
//! ```

use tracing::debug;

use crate::core::env::container::{Env, PATH_KEY, PYTHONPATH_KEY};
use crate::core::env::path_list::PathList;
use crate::core::platform::OsFamily;
use crate::store::BuiltinPython;

/// Directory of the bundled interpreter inside the resources root.
pub const BUNDLED_DIR_NAME: &str = "conda";

/// Locations inside the bundled interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundledPython {
    family: OsFamily,
    root: String,
    dlls: String,
    lib: String,
    site_packages: String,
    scripts: String,
}

impl BundledPython {
    /// Layout for an interpreter shipped under `<resources>/conda`.
    #[must_use]
    pub fn from_resources(resources: &str, family: OsFamily) -> Self {
        Self::from_root(family.join_dir(resources, &[BUNDLED_DIR_NAME]), family)
    }

    /// Layout for an interpreter rooted at `root`.
    #[must_use]
    pub fn from_root(root: impl Into<String>, family: OsFamily) -> Self {
        let root = root.into();
        Self {
            family,
            dlls: family.join_dir(&root, &["DLLs"]),
            lib: family.join_dir(&root, &["Lib"]),
            site_packages: family.join_dir(&root, &["Lib", "site-packages"]),
            scripts: family.join_dir(&root, &["Scripts"]),
            root,
        }
    }

    #[must_use]
    pub const fn family(&self) -> OsFamily {
        self.family
    }

    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    #[must_use]
    pub fn dlls(&self) -> &str {
        &self.dlls
    }

    #[must_use]
    pub fn lib(&self) -> &str {
        &self.lib
    }

    #[must_use]
    pub fn site_packages(&self) -> &str {
        &self.site_packages
    }

    #[must_use]
    pub fn scripts(&self) -> &str {
        &self.scripts
    }
}

/// Injects the bundled interpreter when `mode` and the failover flag ask for it.
#[must_use]
pub fn apply_builtin_python(
    env: Env,
    mode: BuiltinPython,
    has_failed_over: bool,
    bundled: &BundledPython,
) -> Env {
    if !mode.should_inject(has_failed_over) {
        return env;
    }
    debug!(%mode, has_failed_over, root = bundled.root(), "injecting bundled python");
    let env = add_python_path(env, bundled);
    prepend_builtin_path(env, bundled)
}

/// Puts the bundled library directories first on `PYTHONPATH` (Windows only).
///
/// The existing entries follow unchanged, without deduplication against the
/// three bundled directories.
/// Prepending each directory into a working copy and then concatenating that
/// copy with the existing list is collapsed into `[DLLs, Lib, site-packages] ++ existing`.
#[must_use]
pub fn add_python_path(mut env: Env, bundled: &BundledPython) -> Env {
    let family = bundled.family();
    if !family.is_windows() {
        return env;
    }
    let existing = env.path_list(PYTHONPATH_KEY, family);
    let front: PathList = [bundled.dlls(), bundled.lib(), bundled.site_packages()]
        .into_iter()
        .collect();
    env.set_path_list(PYTHONPATH_KEY, &existing.prefixed_by(&front), family);
    env
}

/// Puts the bundled `Scripts`, `Lib` and root directories first on `PATH`.
#[must_use]
pub fn prepend_builtin_path(mut env: Env, bundled: &BundledPython) -> Env {
    let family = bundled.family();
    let mut path = env.path_list(PATH_KEY, family);
    path.prepend_block([bundled.scripts(), bundled.lib(), bundled.root()]);
    env.set_path_list(PATH_KEY, &path, family);
    env
}
