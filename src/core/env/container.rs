// rodeo-env: Child Process Environment Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable struct and copy-on-write implementation.
//!
//! ```text
//! Env (copy-on-write)
//! data: Arc<EnvData>
//! clone shares the Arc until the first write (Arc::make_mut)
//!
//! key_map():       folded key -> original key, rebuilt from the live map
//! path_list():     value --split--> PathList
//! set_path_list(): PathList --join--> value under the original key
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::path_list::PathList;
use super::types::{EnvData, EnvKey};
use crate::core::platform::OsFamily;

/// Variable holding the executable search path.
pub const PATH_KEY: &str = "PATH";

/// Variable holding the Python module search path.
pub const PYTHONPATH_KEY: &str = "PYTHONPATH";

/// A set of environment variables with copy-on-write semantics.
///
/// Lookups ignore ASCII case; the spelling of the first insertion of a key
/// is kept for the lifetime of the value. Cloning is cheap: clones share
/// storage until one of them is modified, so a cached `Env` handed out by
/// clone can never be changed through the copy.
#[derive(Debug, Clone, Default)]
pub struct Env {
    data: Arc<EnvData>,
}

impl PartialEq for Env {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for Env {}

impl Env {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an environment from a map of variables.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        vars.into_iter().collect()
    }

    /// Sets a variable, keeping the existing spelling of the key if present.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        Arc::make_mut(&mut self.data).insert(EnvKey::new(key), value.into());
        self
    }

    /// Gets a variable value, ignoring key case.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.vars().get(&EnvKey::new(key)).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.vars().contains_key(&EnvKey::new(key))
    }

    /// Removes a variable, ignoring key case.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        if !self.contains_key(key) {
            return None;
        }
        Arc::make_mut(&mut self.data).remove(&EnvKey::new(key))
    }

    /// Builds the case-folded key index: `"path" -> "Path"`.
    ///
    /// One entry per distinct folded key. The index is derived from the live
    /// map on every call, it is never stored alongside it.
    #[must_use]
    pub fn key_map(&self) -> BTreeMap<String, String> {
        self.data
            .vars()
            .keys()
            .map(|key| (key.folded(), key.as_str().to_owned()))
            .collect()
    }

    /// Returns the stored spelling of `key`, if the variable exists.
    #[must_use]
    pub fn original_key(&self, key: &str) -> Option<&str> {
        self.data
            .vars()
            .get_key_value(&EnvKey::new(key))
            .map(|(k, _)| k.as_str())
    }

    /// Reads a variable as a path list. A missing or empty value is an empty list.
    #[must_use]
    pub fn path_list(&self, key: &str, family: OsFamily) -> PathList {
        let folded = key.to_ascii_lowercase();
        self.key_map()
            .get(&folded)
            .and_then(|original| self.get(original))
            .map_or_else(PathList::new, |value| PathList::parse(value, family))
    }

    /// Writes a path list back into a variable.
    ///
    /// The existing spelling of the key is reused; a missing variable is
    /// created with an upper-case name (`PATH`, `PYTHONPATH`).
    pub fn set_path_list(&mut self, key: &str, list: &PathList, family: OsFamily) -> &mut Self {
        let folded = key.to_ascii_lowercase();
        let target = self
            .key_map()
            .remove(&folded)
            .unwrap_or_else(|| key.to_ascii_uppercase());
        self.set(target, list.join(family))
    }

    /// Applies `overrides` on top of this environment.
    ///
    /// Override values replace values of the same (case-insensitive) key;
    /// keys present on only one side survive.
    pub fn overlay<I, K, V>(&mut self, overrides: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in overrides {
            self.set(key, value);
        }
        self
    }

    /// Returns all environment variables as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }

    /// Iterates over variables in case-insensitive key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data
            .vars()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.vars().is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.vars().len()
    }

    /// Whether two values still share storage (no write since the clone).
    #[must_use]
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Env {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let data = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect::<EnvData>();
        Self {
            data: Arc::new(data),
        }
    }
}

impl Serialize for Env {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Env {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EnvVisitor;

        impl<'de> Visitor<'de> for EnvVisitor {
            type Value = Env;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of environment variable names to string values")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                // Document order decides which spelling of a duplicated key wins.
                let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    pairs.push((key, value));
                }
                Ok(pairs.into_iter().collect())
            }
        }

        deserializer.deserialize_map(EnvVisitor)
    }
}
