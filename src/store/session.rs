// rodeo-env: Child Process Environment Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process-scoped session state.
//!
//! ```text
//! Session
//!   environment: OnceCell<Env>   empty --first successful fetch--> set (never replaced)
//!   python_failed_over: bool     false --collaborator marks failure--> true
//! ```

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::OnceCell;

use crate::core::env::container::Env;
use crate::error::AppResult;

/// State shared by every resolution in this process.
///
/// The cached environment is the clean host baseline (bonus variables
/// included, preferences not applied). It is written at most once and handed
/// out by copy-on-write clone, so nothing downstream can change it.
#[derive(Debug, Default)]
pub struct Session {
    environment: OnceCell<Env>,
    python_failed_over: AtomicBool,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached baseline, if a fetch has completed.
    #[must_use]
    pub fn cached_environment(&self) -> Option<Env> {
        self.environment.get().cloned()
    }

    /// Seeds the cache. Returns `false` if it was already populated.
    pub fn store_environment(&self, env: Env) -> bool {
        self.environment.set(env).is_ok()
    }

    /// Returns the cached baseline, running `init` to produce it if empty.
    ///
    /// Concurrent callers wait for the one running `init`. A failed `init`
    /// leaves the cache empty, so the next caller tries again.
    pub(crate) async fn environment_or_try_init<F, Fut>(&self, init: F) -> AppResult<&Env>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = AppResult<Env>>,
    {
        self.environment.get_or_try_init(init).await
    }

    #[must_use]
    pub fn has_python_failed_over(&self) -> bool {
        self.python_failed_over.load(Ordering::Acquire)
    }

    /// Records that the user's own interpreter failed to start.
    pub fn mark_python_failed_over(&self) {
        self.set_python_failed_over(true);
    }

    pub fn set_python_failed_over(&self, failed_over: bool) {
        self.python_failed_over.store(failed_over, Ordering::Release);
    }
}
