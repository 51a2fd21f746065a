// SPDX-FileCopyrightText: 2026 SecDecode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Temporary settings-security layouts.

use std::path::{Path, PathBuf};

use secdecode_core::{ExecutionEnvironment, SettingsFile};
use tempfile::TempDir;

/// A temporary user home containing `.m2/settings-security.xml`.
///
/// The directory is deleted when the fixture is dropped.
pub struct SettingsFixture {
    home: TempDir,
    path: PathBuf,
}

impl SettingsFixture {
    /// Create the layout with `master` as the `<master>` element text.
    pub fn with_master(master: &str) -> Self {
        Self::with_document(&format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <settingsSecurity>\n  <master>{master}</master>\n</settingsSecurity>\n"
        ))
    }

    /// Create the layout with an arbitrary document body.
    pub fn with_document(body: &str) -> Self {
        let home = tempfile::tempdir().expect("create temp home");
        let m2 = home.path().join(".m2");
        std::fs::create_dir_all(&m2).expect("create .m2");
        let path = m2.join("settings-security.xml");
        std::fs::write(&path, body).expect("write settings-security.xml");
        Self { home, path }
    }

    pub fn home(&self) -> &Path {
        self.home.path()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn settings_file(&self) -> SettingsFile {
        SettingsFile::new(&self.path)
    }

    /// Environment whose only lookup path is this home.
    pub fn env(&self) -> ExecutionEnvironment {
        ExecutionEnvironment {
            security_location: None,
            user_home: Some(self.home.path().to_path_buf()),
            maven_home: None,
        }
    }
}
