// SPDX-FileCopyrightText: 2026 SecDecode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as non-blank key names, bare file names, and bounded relocation depth.

use crate::diagnostic::ConfigError;
use crate::model::SecDecodeConfig;

/// Upper bound accepted for `settings.max_relocations`.
pub const MAX_RELOCATIONS_LIMIT: u32 = 32;

/// Log levels accepted in `logging.level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &SecDecodeConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let settings = &config.settings;

    if settings.master_key_name.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "settings.master_key_name must not be empty".to_string(),
        });
    }

    if let Some(name) = &settings.file_name
        && name.contains(['/', '\\'])
    {
        errors.push(ConfigError::Validation {
            message: format!(
                "settings.file_name `{name}` must be a bare file name; use settings.path for directories"
            ),
        });
    }

    if settings.max_relocations > MAX_RELOCATIONS_LIMIT {
        errors.push(ConfigError::Validation {
            message: format!(
                "settings.max_relocations must be at most {MAX_RELOCATIONS_LIMIT}, got {}",
                settings.max_relocations
            ),
        });
    }

    let level = config.logging.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "logging.level `{}` is not one of: {}",
                config.logging.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&SecDecodeConfig::default()).is_ok());
    }

    #[test]
    fn blank_master_key_name_is_rejected() {
        let mut config = SecDecodeConfig::default();
        config.settings.master_key_name = "   ".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("master_key_name"));
    }

    #[test]
    fn file_name_with_separator_is_rejected() {
        let mut config = SecDecodeConfig::default();
        config.settings.file_name = Some(r"conf\sec.xml".to_string());
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn level_is_case_insensitive() {
        let mut config = SecDecodeConfig::default();
        config.logging.level = "DEBUG".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn collects_every_error() {
        let mut config = SecDecodeConfig::default();
        config.settings.master_key_name = String::new();
        config.settings.max_relocations = 100;
        config.logging.level = "loud".to_string();
        assert_eq!(validate_config(&config).unwrap_err().len(), 3);
    }
}
