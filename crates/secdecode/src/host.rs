// SPDX-FileCopyrightText: 2026 SecDecode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Build host backed by a TOML properties file and `-D` definitions.

use std::path::Path;

use secdecode_core::{BuildHost, MAVEN_HOME_PROPERTY, PropertyBag, USER_HOME_PROPERTY};

use crate::error::CliError;

/// Environment variable holding the Maven installation directory.
pub const MAVEN_HOME_ENV_VAR: &str = "M2_HOME";

/// The command-line build host.
#[derive(Debug, Clone, Default)]
pub struct CliHost {
    execution: PropertyBag,
    project: PropertyBag,
}

impl CliHost {
    pub fn new(execution: PropertyBag, project: PropertyBag) -> Self {
        Self { execution, project }
    }
}

impl BuildHost for CliHost {
    fn execution_properties(&self) -> &PropertyBag {
        &self.execution
    }

    fn project_properties(&self) -> &PropertyBag {
        &self.project
    }

    fn project_properties_mut(&mut self) -> &mut PropertyBag {
        &mut self.project
    }
}

/// Execution properties seeded from the process, then overridden by `defines`.
pub fn execution_properties(defines: &[(String, String)]) -> PropertyBag {
    let mut props = PropertyBag::new();
    if let Some(home) = dirs::home_dir() {
        props.insert(USER_HOME_PROPERTY, home.display().to_string());
    }
    if let Ok(m2_home) = std::env::var(MAVEN_HOME_ENV_VAR)
        && !m2_home.trim().is_empty()
    {
        props.insert(MAVEN_HOME_PROPERTY, m2_home);
    }
    props.extend(defines.iter().cloned());
    props
}

/// Parse a `key=value` definition. The value may be empty.
pub fn parse_define(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected key=value, got `{raw}`")),
    }
}

/// Load a flat TOML table of string properties.
pub fn load_properties(path: &Path) -> Result<PropertyBag, CliError> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|e| CliError::Properties {
        path: path.to_path_buf(),
        reason: e.message().to_string(),
    })
}
