// SPDX-FileCopyrightText: 2026 SecDecode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The decode goal a build host invokes.

use std::sync::Arc;

use secdecode_config::SettingsConfig;
use secdecode_core::{BuildHost, Cipher, DecodeError, ExecutionEnvironment};
use secdecode_settings::{SettingsLocator, SettingsReader};

use crate::decoder::{DecodeReport, PropertyDecoder};
use crate::state::DecodeState;

/// Locates the settings file and decodes the host's project properties.
#[derive(Debug)]
pub struct DecodeGoal<C> {
    locator: SettingsLocator,
    decoder: PropertyDecoder<C>,
}

impl<C: Cipher> DecodeGoal<C> {
    pub fn new(locator: SettingsLocator, decoder: PropertyDecoder<C>) -> Self {
        Self { locator, decoder }
    }

    /// Build a goal from the `[settings]` configuration section.
    pub fn from_config(config: &SettingsConfig, cipher: C, state: Arc<DecodeState>) -> Self {
        let locator = SettingsLocator::new(config.path.clone(), config.file_name.clone());
        let decoder = PropertyDecoder::new(cipher, state)
            .with_master_key_name(config.master_key_name.clone())
            .with_reader(SettingsReader::new(config.max_relocations));
        Self::new(locator, decoder)
    }

    pub fn locator(&self) -> &SettingsLocator {
        &self.locator
    }

    pub fn decoder(&self) -> &PropertyDecoder<C> {
        &self.decoder
    }

    /// Decode the host's project properties in place.
    ///
    /// The settings file is located only when a pass actually runs.
    pub fn execute<H>(&self, host: &mut H) -> Result<Arc<DecodeReport>, DecodeError>
    where
        H: BuildHost + ?Sized,
    {
        let env = ExecutionEnvironment::from_properties(host.execution_properties());
        self.decoder
            .process_with(|| self.locator.locate(&env), host.project_properties_mut())
    }
}
