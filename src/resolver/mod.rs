// rodeo-env: Child Process Environment Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment resolution pipeline.
//!
//! ```text
//! resolve(explicit?)
//!        |
//!        v
//!   explicit env? --yes--------------------------+
//!        | no                                     |
//!        v                                        |
//!   session cache hit? --yes---------------------+
//!        | no                                     |
//!        v                                        |
//!   host.fetch().await  (error -> Err, no cache)  |
//!   < 10 vars -> warn                             |
//!   add_bonus_variables                           |
//!   session cache <- baseline                     |
//!        |                                        |
//!        +--------------------+-------------------+
//!                             v
//!                      apply_overrides
//!                             |
//!                             v
//!                    apply_builtin_python
//!                             |
//!                             v
//!                            Env
//! ```
//!
//! Every stage works on its own copy; the cached baseline is never modified.

pub mod bonus;
pub mod builtin;
pub mod overrides;

#[cfg(test)]
mod test_utils;

use std::sync::Arc;

use bon::Builder;
use tracing::{debug, info, warn};

use crate::core::env::container::Env;
use crate::core::platform::Platform;
use crate::error::AppResult;
use crate::host::HostEnvironment;
use crate::store::Session;
use crate::store::preferences::{self, PreferenceStore};

use builtin::BundledPython;

/// A fetched environment smaller than this probably failed to load.
pub const MIN_EXPECTED_VARS: usize = 10;

/// Computes the environment for child processes.
#[derive(Debug, Builder)]
pub struct EnvResolver<H, P> {
    #[builder(setters(name = with_host))]
    host: H,
    #[builder(setters(name = with_preferences))]
    preferences: P,
    #[builder(setters(name = with_session), default)]
    session: Arc<Session>,
    #[builder(setters(name = with_platform), default = Platform::detect())]
    platform: Platform,
    #[builder(setters(name = with_bundled))]
    bundled: BundledPython,
}

impl<H, P> EnvResolver<H, P>
where
    H: HostEnvironment + Sync,
    P: PreferenceStore + Sync,
{
    /// Resolves the environment for a child process.
    ///
    /// With `explicit` set, that environment is the base. Otherwise the
    /// cached baseline is used, fetching it from the host on first use.
    /// User overrides and the bundled interpreter are applied on every call.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Host`](crate::error::AppError::Host) if the base
    /// has to be fetched and the host fails. Nothing is cached in that case.
    pub async fn resolve(&self, explicit: Option<Env>) -> AppResult<Env> {
        let base = match explicit {
            Some(env) => env,
            None => match self.session.cached_environment() {
                Some(env) => env,
                None => self
                    .session
                    .environment_or_try_init(|| self.fetch_baseline())
                    .await?
                    .clone(),
            },
        };
        Ok(self.apply_layers(base))
    }

    /// The cached baseline, without fetching.
    #[must_use]
    pub fn raw(&self) -> Option<Env> {
        self.session.cached_environment()
    }

    #[must_use]
    pub const fn session(&self) -> &Arc<Session> {
        &self.session
    }

    async fn fetch_baseline(&self) -> AppResult<Env> {
        info!(host = self.host.name(), "fetching base environment");
        let env = self.host.fetch().await?;
        if env.len() < MIN_EXPECTED_VARS {
            warn!(
                host = self.host.name(),
                vars = env.len(),
                "host environment looks incomplete, using it anyway"
            );
        }
        Ok(bonus::add_bonus_variables(env, &self.platform))
    }

    fn apply_layers(&self, base: Env) -> Env {
        let family = self.platform.family();
        let env = overrides::apply_overrides(base, &self.preferences, family);

        let mode = preferences::builtin_python(&self.preferences);
        let failed_over = self.session.has_python_failed_over();
        let env = builtin::apply_builtin_python(env, mode, failed_over, &self.bundled);

        debug!(vars = env.len(), "resolved environment");
        env
    }
}
