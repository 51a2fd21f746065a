// SPDX-FileCopyrightText: 2026 SecDecode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the locator, the decoder, and hosts.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Execution property holding an explicit settings-security location.
pub const SECURITY_LOCATION_PROPERTY: &str = "settings.security";

/// Execution property holding the user's home directory.
pub const USER_HOME_PROPERTY: &str = "user.home";

/// Execution property holding the Maven installation directory.
pub const MAVEN_HOME_PROPERTY: &str = "env.M2_HOME";

/// A string-to-string property mapping, as supplied by a build host.
///
/// Keys iterate in sorted order so log output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyBag(BTreeMap<String, String>);

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns the value for `key` unless it is missing or blank.
    pub fn get_non_blank(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.trim().is_empty())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copy every entry of `other` into `self`, overwriting same-named keys.
    pub fn merge(&mut self, other: &PropertyBag) {
        for (k, v) in &other.0 {
            self.0.insert(k.clone(), v.clone());
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for PropertyBag {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.0.insert(k.into(), v.into());
        }
    }
}

impl IntoIterator for PropertyBag {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Lookup paths derived from a host's execution properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionEnvironment {
    /// Explicit settings-security location (file or directory).
    pub security_location: Option<String>,
    /// The user's home directory. The `.m2` folder is probed beneath it.
    pub user_home: Option<PathBuf>,
    /// The Maven installation directory, if known.
    pub maven_home: Option<PathBuf>,
}

impl ExecutionEnvironment {
    /// Read the environment from execution properties.
    ///
    /// `user.home` falls back to the operating system's home directory.
    pub fn from_properties(props: &PropertyBag) -> Self {
        Self {
            security_location: props.get_non_blank(SECURITY_LOCATION_PROPERTY).map(str::to_string),
            user_home: props
                .get_non_blank(USER_HOME_PROPERTY)
                .map(PathBuf::from)
                .or_else(dirs::home_dir),
            maven_home: props.get_non_blank(MAVEN_HOME_PROPERTY).map(PathBuf::from),
        }
    }
}

/// A settings-security file that existed when it was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    /// Wrap a path that the caller has verified to exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
