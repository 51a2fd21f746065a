// SPDX-FileCopyrightText: 2026 SecDecode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors surfaced by the command-line front end.

use std::path::PathBuf;

use secdecode_core::{CipherError, DecodeError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("encryption failed: {0}")]
    Cipher(#[from] CipherError),

    #[error("cannot read properties file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid properties file {path}: {reason}")]
    Properties { path: PathBuf, reason: String },

    #[error("cannot render properties: {0}")]
    Render(String),

    #[error("{0}")]
    Password(String),
}
