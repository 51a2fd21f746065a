// SPDX-FileCopyrightText: 2026 SecDecode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Password-based AES-128-CBC seal/open in Maven's payload layout.
//!
//! Payload: `salt (8) | pad_len (1) | ciphertext | pad_len filler bytes`,
//! base64-encoded. Key and IV are the two halves of
//! `SHA-256(password || salt)`.

use aes::Aes128;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use ring::rand::{SecureRandom, SystemRandom};
use secdecode_core::CipherError;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes128CbcDec = cbc::Decryptor<Aes128>;

pub const SALT_SIZE: usize = 8;
pub const CHUNK_SIZE: usize = 16;
const KEY_SIZE: usize = 16;

/// Derive the AES key and CBC IV from a password and salt.
///
/// The returned buffer holds `key || iv` and is zeroed on drop.
pub fn derive_key_and_iv(password: &[u8], salt: &[u8; SALT_SIZE]) -> Zeroizing<[u8; 32]> {
    let mut hasher = Sha256::new();
    hasher.update(password);
    hasher.update(salt);
    let mut out = Zeroizing::new([0u8; 32]);
    out.copy_from_slice(&hasher.finalize());
    out
}

/// Encrypt `plaintext` and return the base64 payload (without braces).
pub fn seal(plaintext: &str, password: &str) -> Result<String, CipherError> {
    let rng = SystemRandom::new();
    let mut salt = [0u8; SALT_SIZE];
    rng.fill(&mut salt).map_err(|_| CipherError::Random)?;

    let key_iv = derive_key_and_iv(password.as_bytes(), &salt);
    let (key, iv) = key_iv.split_at(KEY_SIZE);
    let encryptor =
        Aes128CbcEnc::new_from_slices(key, iv).map_err(|_| CipherError::BadPadding)?;
    let ciphertext = encryptor.encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

    let pad_len = CHUNK_SIZE - (SALT_SIZE + ciphertext.len() + 1) % CHUNK_SIZE;
    let mut payload = vec![0u8; SALT_SIZE + 1 + ciphertext.len() + pad_len];
    // Filler bytes are random, like the salt.
    rng.fill(&mut payload).map_err(|_| CipherError::Random)?;
    payload[..SALT_SIZE].copy_from_slice(&salt);
    payload[SALT_SIZE] = pad_len as u8;
    payload[SALT_SIZE + 1..SALT_SIZE + 1 + ciphertext.len()].copy_from_slice(&ciphertext);

    Ok(STANDARD.encode(payload))
}

/// Decrypt a base64 payload (without braces).
pub fn open(payload_b64: &str, password: &str) -> Result<String, CipherError> {
    let compact: String = payload_b64.chars().filter(|c| !c.is_whitespace()).collect();
    let payload = STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| CipherError::InvalidBase64(e.to_string()))?;

    let len = payload.len();
    if len <= SALT_SIZE + 1 {
        return Err(CipherError::Truncated { len });
    }
    let pad_len = payload[SALT_SIZE] as usize;
    let body_len = len
        .checked_sub(SALT_SIZE + 1 + pad_len)
        .filter(|n| *n > 0)
        .ok_or(CipherError::Truncated { len })?;

    let mut salt = [0u8; SALT_SIZE];
    salt.copy_from_slice(&payload[..SALT_SIZE]);
    let body = &payload[SALT_SIZE + 1..SALT_SIZE + 1 + body_len];

    let key_iv = derive_key_and_iv(password.as_bytes(), &salt);
    let (key, iv) = key_iv.split_at(KEY_SIZE);
    let decryptor =
        Aes128CbcDec::new_from_slices(key, iv).map_err(|_| CipherError::BadPadding)?;
    let plaintext = Zeroizing::new(
        decryptor
            .decrypt_padded_vec_mut::<Pkcs7>(body)
            .map_err(|_| CipherError::BadPadding)?,
    );

    String::from_utf8(plaintext.to_vec()).map_err(|_| CipherError::InvalidUtf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seal_open_roundtrip() {
        let payload = seal("s3cr3t-db-password", "master").unwrap();
        assert_eq!(open(&payload, "master").unwrap(), "s3cr3t-db-password");
    }

    #[test]
    fn seal_produces_different_payload_for_same_plaintext() {
        let p1 = seal("same input twice", "master").unwrap();
        let p2 = seal("same input twice", "master").unwrap();
        // Random salts should differ.
        assert_ne!(p1, p2);
    }

    #[test]
    fn payload_length_is_chunk_aligned() {
        for plaintext in ["", "a", "fifteen chars!!", "sixteen chars!!!", "a much longer value here"] {
            let raw = STANDARD.decode(seal(plaintext, "k").unwrap()).unwrap();
            assert_eq!(raw.len() % CHUNK_SIZE, 0, "plaintext {plaintext:?}");
            let pad_len = raw[SALT_SIZE] as usize;
            assert!((1..=CHUNK_SIZE).contains(&pad_len));
            // Ciphertext body is a whole number of AES blocks.
            assert_eq!((raw.len() - SALT_SIZE - 1 - pad_len) % 16, 0);
        }
    }

    #[test]
    fn open_with_wrong_password_fails() {
        let payload = seal("secret data", "right").unwrap();
        // A wrong key almost always breaks PKCS#7; if padding happens to
        // validate, the bytes are garbage and fail UTF-8 or differ.
        match open(&payload, "wrong") {
            Err(_) => {}
            Ok(text) => assert_ne!(text, "secret data"),
        }
    }

    #[test]
    fn open_rejects_invalid_base64() {
        assert!(matches!(
            open("not base64!!", "k"),
            Err(CipherError::InvalidBase64(_))
        ));
    }

    #[test]
    fn open_rejects_truncated_payload() {
        let short = STANDARD.encode([0u8; 9]);
        assert_eq!(open(&short, "k"), Err(CipherError::Truncated { len: 9 }));

        // Header claims more filler than the payload holds.
        let mut raw = vec![0u8; 16];
        raw[SALT_SIZE] = 200;
        let lying = STANDARD.encode(&raw);
        assert_eq!(open(&lying, "k"), Err(CipherError::Truncated { len: 16 }));
    }

    #[test]
    fn open_tolerates_line_breaks_in_payload() {
        let payload = seal("wrapped", "k").unwrap();
        let (a, b) = payload.split_at(10);
        let broken = format!("{a}\n  {b}");
        assert_eq!(open(&broken, "k").unwrap(), "wrapped");
    }

    #[test]
    fn derive_key_and_iv_is_deterministic() {
        let salt = [7u8; SALT_SIZE];
        let a = derive_key_and_iv(b"pw", &salt);
        let b = derive_key_and_iv(b"pw", &salt);
        let c = derive_key_and_iv(b"pw", &[8u8; SALT_SIZE]);
        assert_eq!(*a, *b);
        assert_ne!(*a, *c);
    }
}
