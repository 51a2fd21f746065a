// SPDX-FileCopyrightText: 2026 SecDecode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Decoding of placeholder-wrapped build properties.
//!
//! Property values written as `{...}` are decrypted with the master password
//! from Maven's `settings-security.xml` and merged back into the property
//! bag. The first successful pass is cached in a [`DecodeState`] so hosts
//! that run the goal repeatedly pay for it once.
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use secdecode_core::{ExecutionEnvironment, PropertyBag};
//! use secdecode_decoder::{DecodeState, PropertyDecoder};
//! use secdecode_settings::SettingsLocator;
//! # fn demo<C: secdecode_core::Cipher>(cipher: C) -> Result<(), secdecode_core::DecodeError> {
//! let env = ExecutionEnvironment::from_properties(&PropertyBag::new());
//! let file = SettingsLocator::default().locate(&env)?;
//! let decoder = PropertyDecoder::new(cipher, Arc::new(DecodeState::new()));
//!
//! let mut props: PropertyBag = [("db.password", "{...}")].into_iter().collect();
//! decoder.process_once(&file, &mut props)?;
//! # Ok(())
//! # }
//! ```

pub mod decoder;
pub mod goal;
pub mod placeholder;
pub mod state;

pub use decoder::{DEFAULT_MASTER_KEY_NAME, DecodeReport, PropertyDecoder};
pub use goal::DecodeGoal;
pub use placeholder::is_placeholder;
pub use state::DecodeState;
