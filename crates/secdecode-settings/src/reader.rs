// SPDX-FileCopyrightText: 2026 SecDecode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reading the encrypted master password, following relocations.

use std::path::{Path, PathBuf};

use secdecode_core::{DecodeError, SettingsFile};
use tracing::{debug, info};

use crate::model::SettingsSecurity;

/// Default number of `<relocation>` hops followed before giving up.
pub const DEFAULT_MAX_RELOCATIONS: u32 = 5;

/// The encrypted master password and the document it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedMaster {
    /// Document that held the `<master>` element (after relocations).
    pub source: PathBuf,
    /// Decorated ciphertext.
    pub value: String,
}

/// Loads settings-security documents.
#[derive(Debug, Clone, Copy)]
pub struct SettingsReader {
    max_relocations: u32,
}

impl Default for SettingsReader {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RELOCATIONS)
    }
}

impl SettingsReader {
    pub fn new(max_relocations: u32) -> Self {
        Self { max_relocations }
    }

    /// Read a document, following `<relocation>` until one without it.
    ///
    /// Relative relocation targets resolve against the referencing document's
    /// directory.
    pub fn read(&self, file: &SettingsFile) -> Result<(PathBuf, SettingsSecurity), DecodeError> {
        let mut path = file.path().to_path_buf();
        let mut hops = 0;

        loop {
            let doc = read_document(&path)?;
            let Some(target) = doc.relocation() else {
                return Ok((path, doc));
            };
            if hops >= self.max_relocations {
                return Err(DecodeError::MalformedSettings {
                    path,
                    reason: format!("more than {} relocations", self.max_relocations),
                });
            }
            let next = resolve_relocation(&path, target);
            info!(from = %path.display(), to = %next.display(), "following settings-security relocation");
            path = next;
            hops += 1;
        }
    }

    /// Read the encrypted master password.
    pub fn encrypted_master(&self, file: &SettingsFile) -> Result<EncryptedMaster, DecodeError> {
        let (source, doc) = self.read(file)?;
        match doc.master() {
            Some(master) => Ok(EncryptedMaster {
                value: master.to_string(),
                source,
            }),
            None => Err(DecodeError::MalformedSettings {
                path: source,
                reason: "no <master> password element".to_string(),
            }),
        }
    }
}

fn read_document(path: &Path) -> Result<SettingsSecurity, DecodeError> {
    debug!(path = %path.display(), "reading settings-security document");
    let xml = std::fs::read_to_string(path).map_err(|e| DecodeError::MalformedSettings {
        path: path.to_path_buf(),
        reason: format!("unreadable: {e}"),
    })?;
    SettingsSecurity::from_xml(&xml).map_err(|e| DecodeError::MalformedSettings {
        path: path.to_path_buf(),
        reason: format!("invalid XML: {e}"),
    })
}

fn resolve_relocation(current: &Path, target: &str) -> PathBuf {
    let target = Path::new(target);
    if target.is_absolute() {
        return target.to_path_buf();
    }
    match current.parent() {
        Some(dir) => dir.join(target),
        None => target.to_path_buf(),
    }
}
