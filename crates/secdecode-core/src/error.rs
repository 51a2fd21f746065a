// SPDX-FileCopyrightText: 2026 SecDecode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for settings resolution and property decoding.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use thiserror::Error;

/// Failures of the decode primitive itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// The value is not wrapped in an unescaped `{...}` pair.
    #[error("value is not a decorated ciphertext")]
    NotDecorated,

    /// The payload between the braces is not valid base64.
    #[error("invalid base64 payload: {0}")]
    InvalidBase64(String),

    /// The decoded payload is shorter than its own header claims.
    #[error("ciphertext truncated ({len} bytes)")]
    Truncated { len: usize },

    /// Block decryption or padding check failed. Usually a wrong key.
    #[error("decryption failed (wrong key or corrupted ciphertext)")]
    BadPadding,

    /// Decryption succeeded but the plaintext is not UTF-8.
    #[error("decrypted value is not valid UTF-8")]
    InvalidUtf8,

    /// The system random source failed.
    #[error("failed to generate random bytes")]
    Random,
}

/// Discriminant of [`DecodeError`], carrying the fatality of each kind.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    MalformedSettings,
    MasterPasswordDecode,
    PropertyDecode,
}

impl ErrorKind {
    /// Whether an error of this kind aborts the whole processing pass.
    pub fn is_fatal(self) -> bool {
        !matches!(self, ErrorKind::PropertyDecode)
    }
}

/// The error type of a decoding pass.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// No settings-security file exists at any candidate location.
    #[error("failed to load file {file_name}: not found at {}", display_paths(attempted))]
    NotFound {
        file_name: String,
        attempted: Vec<PathBuf>,
    },

    /// The settings document could not be read or parsed.
    #[error("malformed settings file {}: {reason}", path.display())]
    MalformedSettings { path: PathBuf, reason: String },

    /// The master password in the settings document could not be decrypted.
    #[error("failed to decode master password from {}: {source}", path.display())]
    MasterPasswordDecode {
        path: PathBuf,
        #[source]
        source: CipherError,
    },

    /// A single property could not be decrypted with the master password.
    #[error("failed to decode property [{key}]: {source}")]
    PropertyDecode {
        key: String,
        #[source]
        source: CipherError,
    },
}

impl DecodeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::NotFound { .. } => ErrorKind::NotFound,
            DecodeError::MalformedSettings { .. } => ErrorKind::MalformedSettings,
            DecodeError::MasterPasswordDecode { .. } => ErrorKind::MasterPasswordDecode,
            DecodeError::PropertyDecode { .. } => ErrorKind::PropertyDecode,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.kind().is_fatal()
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "any location (no candidates configured)".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
