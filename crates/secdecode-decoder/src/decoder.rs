// SPDX-FileCopyrightText: 2026 SecDecode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Master password recovery and property decoding.
//!
//! A pass reads the encrypted master password from the settings file,
//! decrypts it under the master key name, then decrypts every
//! placeholder-wrapped property value with the plaintext master. Values that
//! do not decrypt are skipped with a warning; a master password that does not
//! decrypt aborts the pass.

use std::sync::Arc;

use secdecode_core::{Cipher, DecodeError, PropertyBag, SettingsFile};
use secdecode_settings::SettingsReader;
use secrecy::{ExposeSecret, SecretString};
use tracing::{error, info, warn};

use crate::placeholder::is_placeholder;
use crate::state::DecodeState;

/// Key under which the master password is encrypted.
pub const DEFAULT_MASTER_KEY_NAME: &str = "settings.security";

/// Outcome of one decoding pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeReport {
    /// Successfully decrypted properties, keyed like the input bag.
    pub decoded: PropertyBag,
    /// Keys of placeholder values that could not be decrypted.
    pub skipped: Vec<String>,
}

/// Decodes placeholder-wrapped properties with the settings master password.
pub struct PropertyDecoder<C> {
    cipher: C,
    reader: SettingsReader,
    master_key_name: String,
    state: Arc<DecodeState>,
}

impl<C> std::fmt::Debug for PropertyDecoder<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyDecoder")
            .field("master_key_name", &self.master_key_name)
            .field("processed", &self.state.is_processed())
            .finish_non_exhaustive()
    }
}

impl<C: Cipher> PropertyDecoder<C> {
    pub fn new(cipher: C, state: Arc<DecodeState>) -> Self {
        Self {
            cipher,
            reader: SettingsReader::default(),
            master_key_name: DEFAULT_MASTER_KEY_NAME.to_string(),
            state,
        }
    }

    pub fn with_master_key_name(mut self, name: impl Into<String>) -> Self {
        self.master_key_name = name.into();
        self
    }

    pub fn with_reader(mut self, reader: SettingsReader) -> Self {
        self.reader = reader;
        self
    }

    pub fn cipher(&self) -> &C {
        &self.cipher
    }

    pub fn state(&self) -> &Arc<DecodeState> {
        &self.state
    }

    /// Read and decrypt the master password held by `file`.
    pub fn master_password(&self, file: &SettingsFile) -> Result<SecretString, DecodeError> {
        let encrypted = self.reader.encrypted_master(file)?;
        match self
            .cipher
            .decrypt_decorated(&encrypted.value, &self.master_key_name)
        {
            Ok(plain) => Ok(SecretString::from(plain)),
            Err(source) => {
                error!(path = %encrypted.source.display(), error = %source, "error decoding master password");
                Err(DecodeError::MasterPasswordDecode {
                    path: encrypted.source,
                    source,
                })
            }
        }
    }

    /// Decrypt every placeholder value of `bag` with `master`.
    ///
    /// Non-placeholder values are ignored. Values that fail to decrypt are
    /// recorded in [`DecodeReport::skipped`].
    pub fn decode_properties(&self, master: &SecretString, bag: &PropertyBag) -> DecodeReport {
        let mut report = DecodeReport::default();

        for (key, value) in bag.iter().filter(|(_, v)| is_placeholder(v)) {
            info!(key = %key, "processing property");
            match self.cipher.decrypt_decorated(value, master.expose_secret()) {
                Ok(plain) => {
                    report.decoded.insert(key, plain);
                }
                Err(source) => {
                    let err = DecodeError::PropertyDecode {
                        key: key.to_string(),
                        source,
                    };
                    warn!(error = %err, "cannot decrypt this value with the master password, skipping");
                    report.skipped.push(key.to_string());
                }
            }
        }

        report
    }

    /// Run a full pass against an already-located settings file.
    pub fn process_once(
        &self,
        file: &SettingsFile,
        bag: &mut PropertyBag,
    ) -> Result<Arc<DecodeReport>, DecodeError> {
        self.process_with(|| Ok(file.clone()), bag)
    }

    /// Run a pass unless one has already completed, then merge into `bag`.
    ///
    /// `resolve` is only called when a pass actually runs, so repeated
    /// invocations never probe for the settings file again.
    pub fn process_with<F>(
        &self,
        resolve: F,
        bag: &mut PropertyBag,
    ) -> Result<Arc<DecodeReport>, DecodeError>
    where
        F: FnOnce() -> Result<SettingsFile, DecodeError>,
    {
        let report = self.state.get_or_try_init(|| {
            info!("starting to process project properties");
            let file = resolve()?;
            let master = self.master_password(&file)?;
            let report = self.decode_properties(&master, bag);
            info!(
                decoded = report.decoded.len(),
                skipped = report.skipped.len(),
                "finished processing project properties"
            );
            Ok(report)
        })?;

        info!(count = report.decoded.len(), "merging properties");
        bag.merge(&report.decoded);
        Ok(report)
    }
}
