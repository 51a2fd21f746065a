// SPDX-FileCopyrightText: 2026 SecDecode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for SecDecode.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level SecDecode configuration.
///
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SecDecodeConfig {
    /// Settings-security file lookup and master password settings.
    #[serde(default)]
    pub settings: SettingsConfig,

    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where to find `settings-security.xml` and how to read it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsConfig {
    /// Path to the settings-security file, or to the directory holding it.
    /// A path ending in `.xml` also sets the file name.
    #[serde(default)]
    pub path: Option<String>,

    /// File name to look for (default: `settings-security.xml`).
    #[serde(default)]
    pub file_name: Option<String>,

    /// Key the master password is encrypted under.
    #[serde(default = "default_master_key_name")]
    pub master_key_name: String,

    /// Maximum `<relocation>` hops followed when reading the file.
    #[serde(default = "default_max_relocations")]
    pub max_relocations: u32,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            path: None,
            file_name: None,
            master_key_name: default_master_key_name(),
            max_relocations: default_max_relocations(),
        }
    }
}

fn default_master_key_name() -> String {
    "settings.security".to_string()
}

fn default_max_relocations() -> u32 {
    5
}

/// Log output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default log level when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
