// SPDX-FileCopyrightText: 2026 SecDecode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! [`Cipher`] implementation compatible with Maven's password encryption.

use secdecode_core::{Cipher, CipherError};
use tracing::trace;

use crate::decorate;
use crate::pbe;

/// Key under which Maven encrypts the master password itself.
pub const MASTER_PASSWORD_KEY: &str = "settings.security";

/// The default decode primitive.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlexusCipher;

impl PlexusCipher {
    pub fn new() -> Self {
        Self
    }

    /// Encrypt a master password the way `mvn --encrypt-master-password` does.
    pub fn encrypt_master_password(&self, password: &str) -> Result<String, CipherError> {
        self.encrypt_decorated(password, MASTER_PASSWORD_KEY)
    }
}

impl Cipher for PlexusCipher {
    fn decrypt_decorated(&self, decorated: &str, key: &str) -> Result<String, CipherError> {
        let payload = decorate::undecorate(decorated)?;
        trace!(payload_len = payload.len(), "decrypting decorated value");
        pbe::open(payload, key)
    }

    fn encrypt_decorated(&self, plaintext: &str, key: &str) -> Result<String, CipherError> {
        pbe::seal(plaintext, key).map(|payload| decorate::decorate(&payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decorated_roundtrip() {
        let cipher = PlexusCipher::new();
        let enc = cipher.encrypt_decorated("hunter2", "master").unwrap();
        assert!(enc.starts_with('{') && enc.ends_with('}'));
        assert_eq!(cipher.decrypt_decorated(&enc, "master").unwrap(), "hunter2");
    }

    #[test]
    fn master_password_uses_fixed_key() {
        let cipher = PlexusCipher::new();
        let enc = cipher.encrypt_master_password("the-master").unwrap();
        assert_eq!(
            cipher.decrypt_decorated(&enc, MASTER_PASSWORD_KEY).unwrap(),
            "the-master"
        );
    }

    #[test]
    fn decrypt_undecorated_value_fails() {
        let cipher = PlexusCipher::new();
        assert_eq!(
            cipher.decrypt_decorated("plain-text", "k"),
            Err(CipherError::NotDecorated)
        );
    }

    #[test]
    fn decrypt_tolerates_comment_around_braces() {
        let cipher = PlexusCipher::new();
        let enc = cipher.encrypt_decorated("value", "k").unwrap();
        let commented = format!("rotated 2026-01 {enc} by ops");
        assert_eq!(cipher.decrypt_decorated(&commented, "k").unwrap(), "value");
    }
}
