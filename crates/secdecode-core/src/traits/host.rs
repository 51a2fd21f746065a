// SPDX-FileCopyrightText: 2026 SecDecode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Build host collaborator trait.

use crate::types::PropertyBag;

/// The build tool invoking the decode goal.
///
/// The host supplies execution properties (lookup paths) and owns the project
/// property bag that decoded values are merged into. Logging goes through
/// `tracing`; the host is expected to install a subscriber.
pub trait BuildHost {
    /// Properties describing the execution environment (`user.home`,
    /// `env.M2_HOME`, `settings.security`).
    fn execution_properties(&self) -> &PropertyBag;

    /// The project's properties.
    fn project_properties(&self) -> &PropertyBag;

    /// Mutable access to the project's properties for merging.
    fn project_properties_mut(&mut self) -> &mut PropertyBag;
}
