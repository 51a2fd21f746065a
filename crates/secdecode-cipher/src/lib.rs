// SPDX-FileCopyrightText: 2026 SecDecode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Maven-compatible password cipher.
//!
//! Values are AES-128-CBC encrypted with a key and IV derived from
//! `SHA-256(password || salt)`, base64-encoded, and wrapped in braces. The
//! master password itself is encrypted under the fixed key
//! [`MASTER_PASSWORD_KEY`].

pub mod decorate;
pub mod pbe;
pub mod plexus;

pub use decorate::{decorate, is_decorated, undecorate};
pub use plexus::{MASTER_PASSWORD_KEY, PlexusCipher};
