// SPDX-FileCopyrightText: 2026 SecDecode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Locating and reading Maven's `settings-security.xml`.
//!
//! [`SettingsLocator`] finds the file across the override, configured,
//! user-home and Maven-home locations. [`SettingsReader`] parses it, follows
//! `<relocation>` redirects, and yields the encrypted master password.

pub mod locator;
pub mod model;
pub mod reader;

pub use locator::{CandidateSource, DEFAULT_SETTINGS_FILE, M2_DIR, SettingsLocator};
pub use model::SettingsSecurity;
pub use reader::{DEFAULT_MAX_RELOCATIONS, EncryptedMaster, SettingsReader};
