// SPDX-FileCopyrightText: 2026 SecDecode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The settings-security document.

use serde::Deserialize;

/// Parsed `<settingsSecurity>` document.
///
/// Elements other than `master` and `relocation` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename = "settingsSecurity")]
pub struct SettingsSecurity {
    /// The encrypted master password, decorated with braces.
    #[serde(default)]
    pub master: Option<String>,

    /// Location of another settings-security document to read instead.
    #[serde(default)]
    pub relocation: Option<String>,
}

impl SettingsSecurity {
    pub fn from_xml(xml: &str) -> Result<Self, quick_xml::DeError> {
        quick_xml::de::from_str(xml)
    }

    /// The master password, trimmed, unless blank.
    pub fn master(&self) -> Option<&str> {
        non_blank(self.master.as_deref())
    }

    /// The relocation target, trimmed, unless blank.
    pub fn relocation(&self) -> Option<&str> {
        non_blank(self.relocation.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
