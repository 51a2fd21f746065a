// SPDX-FileCopyrightText: 2026 SecDecode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Brace decoration around base64 ciphertext.
//!
//! A decorated value carries its payload between the first unescaped `{` and
//! the next unescaped `}`. Text outside the braces is ignored on decryption.

use std::sync::LazyLock;

use regex::Regex;
use secdecode_core::CipherError;

static DECORATED_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^.*?[^\\]?\{(.*?[^\\])\}.*$").unwrap());

/// Whether `value` contains a decorated payload.
pub fn is_decorated(value: &str) -> bool {
    DECORATED_PATTERN.is_match(value)
}

/// Extract the payload of a decorated value.
pub fn undecorate(value: &str) -> Result<&str, CipherError> {
    DECORATED_PATTERN
        .captures(value)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or(CipherError::NotDecorated)
}

/// Wrap a payload in braces.
pub fn decorate(payload: &str) -> String {
    format!("{{{payload}}}")
}
