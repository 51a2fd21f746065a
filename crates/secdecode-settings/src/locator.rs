// SPDX-FileCopyrightText: 2026 SecDecode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Settings-security file resolution.
//!
//! Candidates are probed in priority order and the first regular file wins:
//! 1. The `settings.security` execution property
//! 2. The configured path
//! 3. `{user.home}/.m2`
//! 4. `{env.M2_HOME}/.m2`
//!
//! A candidate ending in `.xml` is taken as a file path; anything else is a
//! directory that the effective file name is appended to.

use std::path::{Path, PathBuf};

use secdecode_core::{DecodeError, ExecutionEnvironment, SettingsFile};
use tracing::{debug, info};

/// File name used when none is configured.
pub const DEFAULT_SETTINGS_FILE: &str = "settings-security.xml";

/// Per-user Maven directory name.
pub const M2_DIR: &str = ".m2";

const SETTINGS_EXTENSION: &str = ".xml";

/// Where a candidate location came from, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateSource {
    Override,
    Configured,
    UserHome,
    MavenHome,
}

impl CandidateSource {
    fn as_str(self) -> &'static str {
        match self {
            CandidateSource::Override => "override",
            CandidateSource::Configured => "configured",
            CandidateSource::UserHome => "user-home",
            CandidateSource::MavenHome => "maven-home",
        }
    }
}

/// Resolves the settings-security file for a decoding pass.
#[derive(Debug, Clone, Default)]
pub struct SettingsLocator {
    path: Option<String>,
    file_name: Option<String>,
}

impl SettingsLocator {
    /// Create a locator from an optional configured path and file name.
    ///
    /// Blank values are treated as absent. A configured path ending in `.xml`
    /// wins over a configured file name.
    pub fn new(path: Option<String>, file_name: Option<String>) -> Self {
        Self {
            path: path.filter(|p| !p.trim().is_empty()),
            file_name: file_name.filter(|f| !f.trim().is_empty()),
        }
    }

    /// The effective settings file name.
    pub fn file_name(&self) -> &str {
        if let Some(name) = &self.file_name {
            return name;
        }
        match &self.path {
            Some(path) if path.ends_with(SETTINGS_EXTENSION) => file_name_from_path(path),
            _ => DEFAULT_SETTINGS_FILE,
        }
    }

    /// Candidate file paths in probe order. Absent sources are omitted.
    pub fn candidates(&self, env: &ExecutionEnvironment) -> Vec<(CandidateSource, PathBuf)> {
        let file_name = self.file_name();
        let mut out = Vec::with_capacity(4);

        if let Some(location) = &env.security_location {
            out.push((CandidateSource::Override, candidate_path(Path::new(location), file_name)));
        }
        if let Some(location) = &self.path {
            out.push((CandidateSource::Configured, candidate_path(Path::new(location), file_name)));
        }
        if let Some(home) = &env.user_home {
            out.push((CandidateSource::UserHome, home.join(M2_DIR).join(file_name)));
        }
        if let Some(home) = &env.maven_home {
            out.push((CandidateSource::MavenHome, home.join(M2_DIR).join(file_name)));
        }
        out
    }

    /// Find the first existing candidate.
    pub fn locate(&self, env: &ExecutionEnvironment) -> Result<SettingsFile, DecodeError> {
        let candidates = self.candidates(env);
        for (source, candidate) in &candidates {
            info!(source = source.as_str(), path = %candidate.display(), "loading settings-security file");
            if candidate.is_file() {
                let resolved = std::path::absolute(candidate).unwrap_or_else(|_| candidate.clone());
                debug!(path = %resolved.display(), "settings-security file resolved");
                return Ok(SettingsFile::new(resolved));
            }
        }

        Err(DecodeError::NotFound {
            file_name: self.file_name().to_string(),
            attempted: candidates.into_iter().map(|(_, p)| p).collect(),
        })
    }
}

/// Last segment of a `/`- or `\`-separated path.
fn file_name_from_path(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

fn candidate_path(location: &Path, file_name: &str) -> PathBuf {
    if location.to_string_lossy().ends_with(SETTINGS_EXTENSION) {
        location.to_path_buf()
    } else {
        location.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(override_loc: Option<&str>, user_home: &str, maven_home: Option<&str>) -> ExecutionEnvironment {
        ExecutionEnvironment {
            security_location: override_loc.map(str::to_string),
            user_home: Some(PathBuf::from(user_home)),
            maven_home: maven_home.map(PathBuf::from),
        }
    }

    #[test]
    fn file_name_defaults() {
        assert_eq!(SettingsLocator::default().file_name(), DEFAULT_SETTINGS_FILE);
    }

    #[test]
    fn file_name_inferred_from_xml_path() {
        let locator = SettingsLocator::new(Some("/x/y/custom.xml".into()), None);
        assert_eq!(locator.file_name(), "custom.xml");
    }

    #[test]
    fn file_name_inferred_from_windows_path() {
        let locator = SettingsLocator::new(Some(r"C:\maven\conf\win.xml".into()), None);
        assert_eq!(locator.file_name(), "win.xml");
    }

    #[test]
    fn directory_path_keeps_default_name() {
        let locator = SettingsLocator::new(Some("/x/y".into()), None);
        assert_eq!(locator.file_name(), DEFAULT_SETTINGS_FILE);
    }

    #[test]
    fn directory_path_uses_configured_name() {
        let locator = SettingsLocator::new(Some("/x/y".into()), Some("mine.xml".into()));
        assert_eq!(locator.file_name(), "mine.xml");
        let (_, path) = &locator.candidates(&env(None, "/h", None))[0];
        assert_eq!(path, &PathBuf::from("/x/y/mine.xml"));
    }

    #[test]
    fn blank_configuration_is_ignored() {
        let locator = SettingsLocator::new(Some("  ".into()), Some("".into()));
        assert_eq!(locator.file_name(), DEFAULT_SETTINGS_FILE);
        let candidates = locator.candidates(&env(None, "/h", None));
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].0, CandidateSource::UserHome);
    }

    #[test]
    fn candidates_follow_priority_order() {
        let locator = SettingsLocator::new(Some("/cfg".into()), None);
        let candidates = locator.candidates(&env(Some("/ovr/sec.xml"), "/home/u", Some("/opt/mvn")));

        let sources: Vec<_> = candidates.iter().map(|(s, _)| *s).collect();
        assert_eq!(
            sources,
            vec![
                CandidateSource::Override,
                CandidateSource::Configured,
                CandidateSource::UserHome,
                CandidateSource::MavenHome,
            ]
        );
        assert_eq!(candidates[0].1, PathBuf::from("/ovr/sec.xml"));
        assert_eq!(candidates[1].1, PathBuf::from("/cfg/settings-security.xml"));
        assert_eq!(candidates[2].1, PathBuf::from("/home/u/.m2/settings-security.xml"));
        assert_eq!(candidates[3].1, PathBuf::from("/opt/mvn/.m2/settings-security.xml"));
    }

    #[test]
    fn maven_home_is_skipped_when_unset() {
        let candidates = SettingsLocator::default().candidates(&env(None, "/home/u", None));
        assert!(candidates.iter().all(|(s, _)| *s != CandidateSource::MavenHome));
    }

    #[test]
    fn locate_reports_attempted_paths() {
        let locator = SettingsLocator::default();
        let err = locator
            .locate(&env(None, "/definitely/not/here", Some("/nor/here")))
            .unwrap_err();
        match err {
            DecodeError::NotFound { file_name, attempted } => {
                assert_eq!(file_name, DEFAULT_SETTINGS_FILE);
                assert_eq!(attempted.len(), 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
