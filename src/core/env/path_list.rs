// rodeo-env: Child Process Environment Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Ordered directory lists stored in a single variable (`PATH`, `PYTHONPATH`).
//!
//! ```text
//! "C:\a;C:\b"  --parse(Windows)-->  ["C:\a", "C:\b"]  --join(Windows)-->  "C:\a;C:\b"
//! "/a:/b"      --parse(Unix)----->  ["/a", "/b"]      --join(Unix)----->  "/a:/b"
//! ```
//!
//! Earlier entries win a lookup, so every mutation here is order-aware.

use serde::{Deserialize, Serialize};

use crate::core::platform::OsFamily;

/// An ordered list of directories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathList(Vec<String>);

impl PathList {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Splits a variable value on the separator of `family`.
    ///
    /// An empty value is the empty list, not a list holding one empty entry.
    #[must_use]
    pub fn parse(value: &str, family: OsFamily) -> Self {
        if value.is_empty() {
            return Self::new();
        }
        Self(
            value
                .split(family.path_list_separator())
                .map(str::to_owned)
                .collect(),
        )
    }

    /// Joins the list with the separator of `family`.
    #[must_use]
    pub fn join(&self, family: OsFamily) -> String {
        let mut buf = [0u8; 4];
        let separator = family.path_list_separator().encode_utf8(&mut buf);
        self.0.join(separator)
    }

    #[must_use]
    pub fn contains(&self, dir: &str) -> bool {
        self.0.iter().any(|entry| entry == dir)
    }

    /// Puts `dir` in front unless it is already present anywhere.
    ///
    /// Returns `true` when the list changed.
    pub fn prepend_unique(&mut self, dir: impl Into<String>) -> bool {
        let dir = dir.into();
        if self.contains(&dir) {
            return false;
        }
        self.0.insert(0, dir);
        true
    }

    /// Puts `dirs` in front as one block, keeping their order and skipping
    /// any that are already present.
    pub fn prepend_block<I, S>(&mut self, dirs: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut block: Vec<String> = Vec::new();
        for dir in dirs {
            let dir = dir.into();
            if !self.contains(&dir) && !block.contains(&dir) {
                block.push(dir);
            }
        }
        block.append(&mut self.0);
        self.0 = block;
    }

    /// Returns `front` followed by this list, without deduplication.
    #[must_use]
    pub fn prefixed_by(&self, front: &Self) -> Self {
        front.0.iter().chain(self.0.iter()).cloned().collect()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for PathList {
    fn from(entries: Vec<String>) -> Self {
        Self(entries)
    }
}

impl<S: Into<String>> FromIterator<S> for PathList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for PathList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
