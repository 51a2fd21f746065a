// SPDX-FileCopyrightText: 2026 SecDecode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for SecDecode integration tests.
//!
//! # Components
//!
//! - [`MockCipher`] - Transparent cipher that counts decrypt calls
//! - [`MockHost`] - In-memory build host
//! - [`SettingsFixture`] - Temporary user home with a settings-security file

pub mod fixture;
pub mod mock_cipher;
pub mod mock_host;

pub use fixture::SettingsFixture;
pub use mock_cipher::MockCipher;
pub use mock_host::MockHost;
