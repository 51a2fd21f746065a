// SPDX-FileCopyrightText: 2026 SecDecode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transparent cipher for deterministic testing.
//!
//! `MockCipher` "encrypts" `value` under `key` as `{key|value}`. Decryption
//! succeeds only when the embedded key matches, so wrong-key behaviour can be
//! exercised without real cryptography.

use std::sync::atomic::{AtomicUsize, Ordering};

use secdecode_core::{Cipher, CipherError};

/// A cipher whose ciphertext is readable, with a decrypt call counter.
#[derive(Debug, Default)]
pub struct MockCipher {
    decrypt_calls: AtomicUsize,
}

impl MockCipher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the ciphertext for `value` under `key`.
    pub fn seal(value: &str, key: &str) -> String {
        format!("{{{key}|{value}}}")
    }

    /// Number of `decrypt_decorated` calls so far.
    pub fn decrypt_calls(&self) -> usize {
        self.decrypt_calls.load(Ordering::SeqCst)
    }
}

impl Cipher for MockCipher {
    fn decrypt_decorated(&self, decorated: &str, key: &str) -> Result<String, CipherError> {
        self.decrypt_calls.fetch_add(1, Ordering::SeqCst);
        let inner = decorated
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix('}'))
            .ok_or(CipherError::NotDecorated)?;
        match inner.split_once('|') {
            Some((k, v)) if k == key => Ok(v.to_string()),
            _ => Err(CipherError::BadPadding),
        }
    }

    fn encrypt_decorated(&self, plaintext: &str, key: &str) -> Result<String, CipherError> {
        Ok(Self::seal(plaintext, key))
    }
}
