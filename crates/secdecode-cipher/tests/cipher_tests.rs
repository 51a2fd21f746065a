// SPDX-FileCopyrightText: 2026 SecDecode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the password cipher.

use proptest::prelude::*;
use secdecode_cipher::{MASTER_PASSWORD_KEY, PlexusCipher, is_decorated};
use secdecode_core::Cipher;

/// Two-level scheme: property values are keyed by the decrypted master.
#[test]
fn master_then_property_chain() {
    let cipher = PlexusCipher::new();
    let master_enc = cipher.encrypt_master_password("operator-master").unwrap();
    let master = cipher
        .decrypt_decorated(&master_enc, MASTER_PASSWORD_KEY)
        .unwrap();

    let prop_enc = cipher.encrypt_decorated("db-password", &master).unwrap();
    assert!(is_decorated(&prop_enc));
    assert_eq!(
        cipher.decrypt_decorated(&prop_enc, &master).unwrap(),
        "db-password"
    );
}

/// Ciphertexts produced by the JCE with salt `01..08`, in Maven's layout.
#[test]
fn decrypts_externally_produced_ciphertext() {
    let cipher = PlexusCipher::new();

    let master = "{AQIDBAUGBwgHEi10T4LsjtvXS4iEedN9OYobpVbqa52B7UEqtLIcqL8AAAAAAAAA}";
    assert_eq!(
        cipher.decrypt_decorated(master, MASTER_PASSWORD_KEY).unwrap(),
        "hello-world-secret"
    );

    let empty = "{AQIDBAUGBwgHK80nUbC03bZnuu0a00f0uQAAAAAAAAA=}";
    assert_eq!(cipher.decrypt_decorated(empty, "k").unwrap(), "");
}

#[test]
fn fixed_ciphertext_rejects_other_key() {
    let cipher = PlexusCipher::new();
    let master = "{AQIDBAUGBwgHEi10T4LsjtvXS4iEedN9OYobpVbqa52B7UEqtLIcqL8AAAAAAAAA}";
    match cipher.decrypt_decorated(master, "settings.securitx") {
        Err(_) => {}
        Ok(text) => assert_ne!(text, "hello-world-secret"),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn any_utf8_value_roundtrips(value in "\\PC{0,64}", key in "\\PC{1,32}") {
        let cipher = PlexusCipher::new();
        let enc = cipher.encrypt_decorated(&value, &key).unwrap();
        prop_assert_eq!(cipher.decrypt_decorated(&enc, &key).unwrap(), value);
    }
}
