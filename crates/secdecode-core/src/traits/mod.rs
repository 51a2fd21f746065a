// SPDX-FileCopyrightText: 2026 SecDecode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collaborator traits: the decode primitive and the build host.

pub mod cipher;
pub mod host;

pub use cipher::Cipher;
pub use host::BuildHost;
