// rodeo-env: Child Process Environment Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments of the environment commands.

use clap::Args;
use std::path::PathBuf;

use crate::core::env::container::PATH_KEY;

/// Arguments for the resolve command.
#[derive(Debug, Clone, Default, Args)]
pub struct ResolveArgs {
    /// Uses a JSON object of `NAME: value` pairs as the host environment.
    #[arg(short = 'f', long = "from-file", value_name = "JSON")]
    pub from_file: Option<PathBuf>,

    /// Prints a JSON object instead of `NAME=value` lines.
    #[arg(long, conflicts_with = "key")]
    pub json: bool,

    /// Prints only the value of this variable (case-insensitive).
    #[arg(short = 'k', long = "key", value_name = "NAME")]
    pub key: Option<String>,
}

/// Arguments for the path command.
#[derive(Debug, Clone, Args)]
pub struct PathArgs {
    /// Path-list variable to print (case-insensitive).
    #[arg(short = 'k', long = "key", value_name = "NAME", default_value = PATH_KEY)]
    pub key: String,

    /// Uses a JSON object of `NAME: value` pairs as the host environment.
    #[arg(short = 'f', long = "from-file", value_name = "JSON")]
    pub from_file: Option<PathBuf>,
}

/// Arguments for the keys command.
#[derive(Debug, Clone, Default, Args)]
pub struct KeysArgs {
    /// Uses a JSON object of `NAME: value` pairs as the host environment.
    #[arg(short = 'f', long = "from-file", value_name = "JSON")]
    pub from_file: Option<PathBuf>,
}
