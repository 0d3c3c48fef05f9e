// rodeo-env: Child Process Environment Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path configuration.
//!
//! ```text
//! <resources>/          (default: <exe dir>/resources)
//!   conda/              bundled interpreter
//!     DLLs/ Lib/ Lib/site-packages/ Scripts/
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::platform::OsFamily;
use crate::error::{ConfigError, Result};
use crate::resolver::builtin::BundledPython;

/// Name of the resources directory next to the executable.
pub const RESOURCES_DIR_NAME: &str = "resources";

/// Application paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Application resources root holding the bundled interpreter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<PathBuf>,
}

impl PathsConfig {
    /// Fills in the resources root next to the running executable if unset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::ReadError` if the executable path cannot be determined.
    pub fn resolve(&mut self) -> Result<()> {
        if self.resources.is_none() {
            let exe = std::env::current_exe().map_err(|source| ConfigError::ReadError {
                path: "<current executable>".to_string(),
                source,
            })?;
            let dir = exe.parent().unwrap_or_else(|| Path::new("."));
            self.resources = Some(dir.join(RESOURCES_DIR_NAME));
        }
        Ok(())
    }

    /// The resources root, defaulting to a relative `resources` directory.
    #[must_use]
    pub fn resources_dir(&self) -> &Path {
        self.resources
            .as_deref()
            .unwrap_or_else(|| Path::new(RESOURCES_DIR_NAME))
    }

    /// Layout of the bundled interpreter for `family`.
    #[must_use]
    pub fn bundled_python(&self, family: OsFamily) -> BundledPython {
        BundledPython::from_resources(&self.resources_dir().to_string_lossy(), family)
    }
}
