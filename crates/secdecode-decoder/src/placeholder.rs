// SPDX-FileCopyrightText: 2026 SecDecode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `{...}` placeholder convention for encrypted property values.

use std::sync::LazyLock;

use regex::Regex;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\{.*\}$").unwrap());

/// Whether a property value is entirely wrapped in `{` and `}`.
pub fn is_placeholder(value: &str) -> bool {
    PLACEHOLDER.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_values_match() {
        assert!(is_placeholder("{abc}"));
        assert!(is_placeholder("{}"));
        assert!(is_placeholder("{a}{b}"));
    }

    #[test]
    fn partial_or_plain_values_do_not_match() {
        assert!(!is_placeholder("plain"));
        assert!(!is_placeholder("{abc"));
        assert!(!is_placeholder("abc}"));
        assert!(!is_placeholder(" {abc}"));
        assert!(!is_placeholder("${project.version}"));
        assert!(!is_placeholder(""));
    }
}
