// SPDX-FileCopyrightText: 2026 SecDecode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Config errors as miette diagnostics.
//!
//! Every config field has a serde default, so extraction can only fail on an
//! unknown key or a mistyped value. Unknown keys carry a source span into the
//! TOML file and a Jaro-Winkler "did you mean" suggestion.

#![allow(unused_assignments)] // miette's Diagnostic derive generates code triggering this lint

use figment::error::Kind;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Minimum Jaro-Winkler similarity score to suggest a correction.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// A configuration error with rich diagnostic information.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// A key that no config section declares.
    #[error("unknown configuration key `{key}`")]
    #[diagnostic(code(secdecode::config::unknown_key), help("{hint}"))]
    UnknownKey {
        key: String,
        suggestion: Option<String>,
        hint: String,
        #[label("not a secdecode setting")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    /// A value of the wrong TOML type, e.g. a string for `max_relocations`.
    #[error("invalid type for `{key}`: found {found}")]
    #[diagnostic(code(secdecode::config::invalid_type), help("expected {expected}"))]
    InvalidType {
        key: String,
        found: String,
        expected: String,
    },

    /// A semantic validation failure.
    #[error("validation error: {message}")]
    #[diagnostic(code(secdecode::config::validation))]
    Validation { message: String },

    /// Anything else figment reports, such as an unreadable file.
    #[error("configuration error: {0}")]
    #[diagnostic(code(secdecode::config::other))]
    Other(String),
}

impl ConfigError {
    fn unknown_key(
        error: &figment::error::Error,
        key: &str,
        valid: &[&str],
        toml_sources: &[(String, String)],
    ) -> Self {
        let suggestion = suggest_key(key, valid);
        let hint = match &suggestion {
            Some(s) => format!("did you mean `{s}`? Valid keys: {}", valid.join(", ")),
            None => format!("valid keys: {}", valid.join(", ")),
        };
        let located = source_of(error, toml_sources).and_then(|(path, content)| {
            let offset = find_key_offset(content, &error.path, key)?;
            Some((
                SourceSpan::new(offset.into(), key.len()),
                NamedSource::new(path, content.to_string()),
            ))
        });
        let (span, src) = located.unzip();

        ConfigError::UnknownKey {
            key: key.to_string(),
            suggestion,
            hint,
            span,
            src,
        }
    }
}

/// Convert a `figment::Error` into one `ConfigError` per underlying failure.
pub fn figment_to_config_errors(
    err: figment::Error,
    toml_sources: &[(String, String)],
) -> Vec<ConfigError> {
    err.into_iter()
        .map(|error| match &error.kind {
            Kind::UnknownField(key, valid) => {
                ConfigError::unknown_key(&error, key, valid, toml_sources)
            }
            Kind::InvalidType(found, expected) => ConfigError::InvalidType {
                key: error.path.join("."),
                found: found.to_string(),
                expected: expected.clone(),
            },
            _ => ConfigError::Other(error.to_string()),
        })
        .collect()
}

/// The `(path, content)` of the TOML file an error came from, when known.
fn source_of<'a>(
    error: &figment::error::Error,
    toml_sources: &'a [(String, String)],
) -> Option<(&'a str, &'a str)> {
    let figment::Source::File(path) = error.metadata.as_ref()?.source.as_ref()? else {
        return None;
    };
    let path = path.display().to_string();
    toml_sources
        .iter()
        .find(|(p, _)| *p == path)
        .map(|(p, content)| (p.as_str(), content.as_str()))
}

/// Byte offset of `field` as a key inside the `[section]` named by `path`.
///
/// Top-level keys (empty `path`) are searched from the start of the file.
pub fn find_key_offset(content: &str, path: &[String], field: &str) -> Option<usize> {
    let start = match path.first() {
        None => 0,
        Some(section) => {
            let header = format!("[{section}]");
            content.find(&header)? + header.len()
        }
    };

    let mut offset = start;
    for line in content[start..].split_inclusive('\n') {
        let indent = line.len() - line.trim_start().len();
        let is_key = line.trim_start().strip_prefix(field).is_some_and(|rest| {
            rest.trim_start().starts_with('=')
        });
        if is_key {
            return Some(offset + indent);
        }
        offset += line.len();
    }
    None
}

/// Suggest a similar key name using Jaro-Winkler string similarity.
pub fn suggest_key(unknown: &str, valid_keys: &[&str]) -> Option<String> {
    valid_keys
        .iter()
        .map(|key| (strsim::jaro_winkler(unknown, key), *key))
        .filter(|(score, _)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, key)| key.to_string())
}

/// Render config errors to stderr using miette's graphical handler.
pub fn render_errors(errors: &[ConfigError]) {
    let handler = miette::GraphicalReportHandler::new();
    for error in errors {
        let mut buf = String::new();
        match handler.render_report(&mut buf, error) {
            Ok(()) => eprint!("{buf}"),
            Err(_) => eprintln!("Error: {error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SETTINGS_KEYS: &[&str] = &["path", "file_name", "master_key_name", "max_relocations"];

    #[test]
    fn suggest_file_name_for_typo() {
        assert_eq!(suggest_key("fiel_name", SETTINGS_KEYS), Some("file_name".to_string()));
    }

    #[test]
    fn suggest_picks_closest_key() {
        assert_eq!(
            suggest_key("max_relocation", SETTINGS_KEYS),
            Some("max_relocations".to_string())
        );
    }

    #[test]
    fn no_suggestion_for_distant_typo() {
        assert_eq!(suggest_key("zzzzzz", SETTINGS_KEYS), None);
    }

    #[test]
    fn find_key_offset_in_section() {
        let content = "[logging]\nlevel = \"info\"\n[settings]\n  fiel_name = \"x.xml\"\n";
        let path = vec!["settings".to_string()];
        let o = find_key_offset(content, &path, "fiel_name").unwrap();
        assert_eq!(&content[o..o + 9], "fiel_name");
    }

    #[test]
    fn find_key_offset_ignores_longer_keys() {
        let content = "[settings]\npath_extra = 1\npath=\"/x\"\n";
        let path = vec!["settings".to_string()];
        let o = find_key_offset(content, &path, "path").unwrap();
        assert_eq!(&content[o..o + 6], "path=\"");
    }

    #[test]
    fn find_key_offset_missing_section() {
        let path = vec!["settings".to_string()];
        assert_eq!(find_key_offset("level = 1\n", &path, "level"), None);
    }
}
