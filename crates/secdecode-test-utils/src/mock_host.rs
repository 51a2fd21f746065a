// SPDX-FileCopyrightText: 2026 SecDecode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory build host.

use secdecode_core::{BuildHost, PropertyBag, USER_HOME_PROPERTY};

/// A build host backed by two property bags.
#[derive(Debug, Clone, Default)]
pub struct MockHost {
    pub execution: PropertyBag,
    pub project: PropertyBag,
}

impl MockHost {
    /// Host whose `user.home` points at `home`.
    pub fn with_user_home(home: &std::path::Path) -> Self {
        let mut host = Self::default();
        host.execution
            .insert(USER_HOME_PROPERTY, home.display().to_string());
        host
    }

    /// Add a project property.
    pub fn with_property(mut self, key: &str, value: &str) -> Self {
        self.project.insert(key, value);
        self
    }
}

impl BuildHost for MockHost {
    fn execution_properties(&self) -> &PropertyBag {
        &self.execution
    }

    fn project_properties(&self) -> &PropertyBag {
        &self.project
    }

    fn project_properties_mut(&mut self) -> &mut PropertyBag {
        &mut self.project
    }
}
