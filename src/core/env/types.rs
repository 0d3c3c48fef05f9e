// rodeo-env: Child Process Environment Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Key and storage types backing [`Env`](super::container::Env).
//!
//! ```text
//! EnvKey: case-insensitive compare, case-preserving storage (PATH == Path == path)
//! EnvData: BTreeMap<EnvKey, String>, first inserted spelling wins
//! ```

use std::collections::BTreeMap;

/// A case-insensitive environment variable key.
///
/// Equality, hashing and ordering fold ASCII case; the original spelling is
/// kept for display and for the key map.
#[derive(Debug, Clone, Eq)]
pub(super) struct EnvKey(String);

impl EnvKey {
    pub(super) fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub(super) fn as_str(&self) -> &str {
        &self.0
    }

    /// The case-folded identity of this key.
    pub(super) fn folded(&self) -> String {
        self.0.to_ascii_lowercase()
    }
}

impl PartialEq for EnvKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl std::hash::Hash for EnvKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        for c in self.0.chars() {
            c.to_ascii_lowercase().hash(state);
        }
    }
}

impl PartialOrd for EnvKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EnvKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        let lhs = self.0.bytes().map(|b| b.to_ascii_lowercase());
        let rhs = other.0.bytes().map(|b| b.to_ascii_lowercase());
        lhs.cmp(rhs)
    }
}

/// Variable storage shared between copy-on-write clones.
#[derive(Debug, Clone, Default)]
pub(super) struct EnvData {
    vars: BTreeMap<EnvKey, String>,
}

impl EnvData {
    pub(super) const fn vars(&self) -> &BTreeMap<EnvKey, String> {
        &self.vars
    }

    /// Inserts or replaces a value.
    ///
    /// `BTreeMap::insert` leaves an existing key untouched, so a later
    /// `Path` never renames an earlier `PATH`.
    pub(super) fn insert(&mut self, key: EnvKey, value: String) {
        self.vars.insert(key, value);
    }

    pub(super) fn remove(&mut self, key: &EnvKey) -> Option<String> {
        self.vars.remove(key)
    }
}

impl FromIterator<(String, String)> for EnvData {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut data = Self::default();
        for (key, value) in iter {
            let key = EnvKey::new(key);
            // First spelling of a folded key is authoritative, later ones are dropped.
            data.vars.entry(key).or_insert(value);
        }
        data
    }
}
