// rodeo-env: Child Process Environment Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Platform facts the resolver depends on.
//!
//! ```text
//! Platform
//!   family: OsFamily   Windows | Unix    -> list separator, dir separator
//!   cpus:   CpuProbe   Host | Fixed(n) | Unavailable
//! ```
//!
//! Both are plain values so a Windows pipeline can be exercised from any host.

use std::num::NonZeroUsize;

/// Operating system family, as far as environment layout is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsFamily {
    Windows,
    Unix,
}

impl OsFamily {
    /// The family this binary was compiled for.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(windows) { Self::Windows } else { Self::Unix }
    }

    #[must_use]
    pub const fn is_windows(self) -> bool {
        matches!(self, Self::Windows)
    }

    /// Separator between entries of `PATH`-like variables.
    #[must_use]
    pub const fn path_list_separator(self) -> char {
        match self {
            Self::Windows => ';',
            Self::Unix => ':',
        }
    }

    /// Separator between components of a single path.
    #[must_use]
    pub const fn dir_separator(self) -> char {
        match self {
            Self::Windows => '\\',
            Self::Unix => '/',
        }
    }

    /// Joins path components with this family's directory separator.
    ///
    /// A trailing separator on `base` is not doubled.
    #[must_use]
    pub fn join_dir(self, base: &str, components: &[&str]) -> String {
        let sep = self.dir_separator();
        let mut out = base.to_owned();
        for component in components {
            if !out.is_empty() && !out.ends_with(sep) {
                out.push(sep);
            }
            out.push_str(component);
        }
        out
    }
}

impl std::fmt::Display for OsFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Windows => write!(f, "windows"),
            Self::Unix => write!(f, "unix"),
        }
    }
}

/// Where the logical CPU count comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuProbe {
    /// Ask the running host.
    Host,
    /// A known count.
    Fixed(NonZeroUsize),
    /// Detection is not possible.
    Unavailable,
}

/// Ambient facts about the platform child processes run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    family: OsFamily,
    cpus: CpuProbe,
}

impl Default for Platform {
    fn default() -> Self {
        Self::detect()
    }
}

impl Platform {
    /// The platform of the running process.
    #[must_use]
    pub const fn detect() -> Self {
        Self::new(OsFamily::current(), CpuProbe::Host)
    }

    #[must_use]
    pub const fn new(family: OsFamily, cpus: CpuProbe) -> Self {
        Self { family, cpus }
    }

    #[must_use]
    pub const fn family(&self) -> OsFamily {
        self.family
    }

    /// Number of logical CPUs.
    ///
    /// # Errors
    ///
    /// Returns an error if the count cannot be determined.
    pub fn logical_cpus(&self) -> std::io::Result<NonZeroUsize> {
        match self.cpus {
            CpuProbe::Host => std::thread::available_parallelism(),
            CpuProbe::Fixed(n) => Ok(n),
            CpuProbe::Unavailable => Err(std::io::Error::new(
                std::io::ErrorKind::Unsupported,
                "logical CPU count is unavailable",
            )),
        }
    }
}
