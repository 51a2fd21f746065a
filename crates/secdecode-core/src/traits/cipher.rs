// SPDX-FileCopyrightText: 2026 SecDecode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The decode primitive seam.

use crate::error::CipherError;

/// A password cipher operating on decorated (`{...}`) ciphertext.
///
/// Implementations must be deterministic for decryption: the same decorated
/// value and key always yield the same plaintext or the same error.
pub trait Cipher: Send + Sync {
    /// Decrypt a decorated value with `key`.
    fn decrypt_decorated(&self, decorated: &str, key: &str) -> Result<String, CipherError>;

    /// Encrypt `plaintext` with `key` and wrap the result in braces.
    fn encrypt_decorated(&self, plaintext: &str, key: &str) -> Result<String, CipherError>;
}

impl<C: Cipher + ?Sized> Cipher for std::sync::Arc<C> {
    fn decrypt_decorated(&self, decorated: &str, key: &str) -> Result<String, CipherError> {
        (**self).decrypt_decorated(decorated, key)
    }

    fn encrypt_decorated(&self, plaintext: &str, key: &str) -> Result<String, CipherError> {
        (**self).encrypt_decorated(plaintext, key)
    }
}
