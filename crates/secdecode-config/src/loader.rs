// SPDX-FileCopyrightText: 2026 SecDecode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./secdecode.toml` > `~/.config/secdecode/secdecode.toml`
//! > `/etc/secdecode/secdecode.toml` with environment variable overrides via
//! the `SECDECODE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::SecDecodeConfig;

/// System-wide config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/secdecode/secdecode.toml";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "secdecode.toml";

/// The per-user XDG config file, if a config directory is known.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("secdecode/secdecode.toml"))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/secdecode/secdecode.toml` (system-wide)
/// 3. `~/.config/secdecode/secdecode.toml` (user XDG config)
/// 4. `./secdecode.toml` (local directory)
/// 5. `SECDECODE_*` environment variables
pub fn load_config() -> Result<SecDecodeConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<SecDecodeConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SecDecodeConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<SecDecodeConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SecDecodeConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for config loading, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(SecDecodeConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so that
/// `SECDECODE_SETTINGS_FILE_NAME` maps to `settings.file_name`, not
/// `settings.file.name`.
fn env_provider() -> Env {
    Env::prefixed("SECDECODE_")
        // Secrets passed through the environment are not configuration.
        .ignore(&["password"])
        .map(|key| {
            key.as_str()
                .replacen("settings_", "settings.", 1)
                .replacen("logging_", "logging.", 1)
                .into()
        })
}
