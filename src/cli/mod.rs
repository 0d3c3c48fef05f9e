// rodeo-env: Child Process Environment Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for rodeo-env using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! rodeo-env [global options] <command>
//! resolve [--from-file JSON] [--json] [--key NAME]
//! path [--key NAME] [--from-file JSON]
//! keys [--from-file JSON]
//! options
//! configs
//! version
//! ```

pub mod env;
pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::env::{KeysArgs, PathArgs, ResolveArgs};
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Child process environment resolver.
///
/// Computes the environment a child process should be started with.
#[derive(Debug, Parser)]
#[command(
    name = "rodeo-env",
    author,
    version,
    about = "Child process environment resolver",
    long_about = "rodeo-env Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Computes the environment for child processes: the host\n\
                  environment, derived variables, user overrides and the\n\
                  bundled Python interpreter.\n\n\
                  Invoking `rodeo-env resolve` prints the resolved environment.\n\
                  See `rodeo-env <command> --help` for more information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  Files given with --config are loaded in order. Afterwards\n\
                  `rodeo-env.toml` in the current directory is loaded if it exists,\n\
                  unless --no-default-config is given. RODEO_ENV_* environment\n\
                  variables and command-line flags override both."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their effective values.
    Options,

    /// Lists the configuration files in use.
    Configs,

    /// Prints the resolved environment.
    Resolve(ResolveArgs),

    /// Prints a path-list variable of the resolved environment, one entry per line.
    Path(PathArgs),

    /// Prints the lower-case to original spelling map of variable names.
    Keys(KeysArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
