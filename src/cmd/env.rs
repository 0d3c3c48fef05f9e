// rodeo-env: Child Process Environment Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment commands: resolve, path, keys.
//!
//! ```text
//! Config --from_config--> EnvContext
//!                           |
//!             --from-file?  +--yes--> StaticHost --+
//!                           +--no---> ProcessHost -+--> EnvResolver::resolve
//!                                                          |
//!                                              render_* --> stdout
//! ```

use std::io::Write as _;
use std::path::Path;
use std::sync::Arc;

use anyhow::anyhow;

use crate::cli::env::{KeysArgs, PathArgs, ResolveArgs};
use crate::config::Config;
use crate::core::env::container::Env;
use crate::core::platform::{OsFamily, Platform};
use crate::error::Result;
use crate::host::{HostEnvironment, ProcessHost, StaticHost};
use crate::resolver::EnvResolver;
use crate::resolver::builtin::BundledPython;
use crate::store::{MemoryPreferences, Session};

/// Inputs shared by the environment commands.
#[derive(Debug)]
pub struct EnvContext {
    preferences: MemoryPreferences,
    bundled: BundledPython,
    platform: Platform,
    session: Arc<Session>,
}

impl EnvContext {
    #[must_use]
    pub const fn new(
        preferences: MemoryPreferences,
        bundled: BundledPython,
        platform: Platform,
        session: Arc<Session>,
    ) -> Self {
        Self {
            preferences,
            bundled,
            platform,
            session,
        }
    }

    /// Builds the context for the running platform.
    ///
    /// # Errors
    ///
    /// Returns an error if an overridden variable in `config` is malformed.
    pub fn from_config(config: &Config, failed_over: bool) -> Result<Self> {
        let platform = Platform::detect();
        let preferences = config.preferences.to_store()?;
        let bundled = config.paths.bundled_python(platform.family());
        let session = Arc::new(Session::new());
        session.set_python_failed_over(failed_over);
        Ok(Self::new(preferences, bundled, platform, session))
    }

    #[must_use]
    pub const fn family(&self) -> OsFamily {
        self.platform.family()
    }

    #[must_use]
    pub const fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Resolves the environment, reading the host snapshot from `from_file` if given.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot file is unreadable or the host fetch fails.
    pub async fn resolve(&self, from_file: Option<&Path>) -> Result<Env> {
        match from_file {
            Some(path) => self.resolve_with(StaticHost::from_json_file(path)?).await,
            None => self.resolve_with(ProcessHost).await,
        }
    }

    async fn resolve_with<H: HostEnvironment + Sync>(&self, host: H) -> Result<Env> {
        let resolver = EnvResolver::builder()
            .with_host(host)
            .with_preferences(&self.preferences)
            .with_session(Arc::clone(&self.session))
            .with_platform(self.platform)
            .with_bundled(self.bundled.clone())
            .build();
        Ok(resolver.resolve(None).await?)
    }
}

/// `NAME=value` lines in key order.
#[must_use]
pub fn render_env(env: &Env) -> Vec<String> {
    env.iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect()
}

/// Pretty JSON object of the environment.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(env: &Env) -> Result<String> {
    Ok(serde_json::to_string_pretty(env)?)
}

/// Value of a single variable, looked up case-insensitively.
///
/// # Errors
///
/// Returns an error if the variable is not set.
pub fn lookup<'a>(env: &'a Env, key: &str) -> Result<&'a str> {
    env.get(key)
        .ok_or_else(|| anyhow!("variable '{key}' is not set"))
}

/// Entries of a path-list variable; empty when the variable is unset.
#[must_use]
pub fn render_path(env: &Env, key: &str, family: OsFamily) -> Vec<String> {
    env.path_list(key, family).into_vec()
}

/// `lower -> Original` lines of the key map.
#[must_use]
pub fn render_keys(env: &Env) -> Vec<String> {
    env.key_map()
        .into_iter()
        .map(|(folded, original)| format!("{folded} -> {original}"))
        .collect()
}

fn print_lines<I, S>(lines: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = std::io::stdout().lock();
    for line in lines {
        writeln!(out, "{}", line.as_ref())?;
    }
    out.flush()?;
    Ok(())
}

/// Run the resolve command.
///
/// # Errors
///
/// Returns an error if resolution fails or `--key` names an unset variable.
pub async fn run_resolve_command(args: &ResolveArgs, ctx: &EnvContext) -> Result<()> {
    let env = ctx.resolve(args.from_file.as_deref()).await?;

    if let Some(key) = &args.key {
        return print_lines([lookup(&env, key)?]);
    }
    if args.json {
        return print_lines([render_json(&env)?]);
    }
    print_lines(render_env(&env))
}

/// Run the path command.
///
/// # Errors
///
/// Returns an error if resolution fails.
pub async fn run_path_command(args: &PathArgs, ctx: &EnvContext) -> Result<()> {
    let env = ctx.resolve(args.from_file.as_deref()).await?;
    print_lines(render_path(&env, &args.key, ctx.family()))
}

/// Run the keys command.
///
/// # Errors
///
/// Returns an error if resolution fails.
pub async fn run_keys_command(args: &KeysArgs, ctx: &EnvContext) -> Result<()> {
    let env = ctx.resolve(args.from_file.as_deref()).await?;
    print_lines(render_keys(&env))
}
