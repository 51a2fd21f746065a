// SPDX-FileCopyrightText: 2026 SecDecode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Output formatting for decoded property bags.

use secdecode_core::PropertyBag;

use crate::error::CliError;

/// Mask a secret value for display.
///
/// Shows prefix (up to 4 chars) and suffix (up to 4 chars) with "..." in between.
/// Short values (< 10 chars) are fully masked as "****".
pub fn mask_secret(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() < 10 {
        return "****".to_string();
    }
    let prefix: String = chars[..4].iter().collect();
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("{prefix}...{suffix}")
}

/// Render `bag` as TOML, masking the values of keys present in `masked`.
pub fn render_properties(bag: &PropertyBag, masked: Option<&PropertyBag>) -> Result<String, CliError> {
    let shown: PropertyBag = bag
        .iter()
        .map(|(key, value)| match masked {
            Some(m) if m.contains_key(key) => (key, mask_secret(value)),
            _ => (key, value.to_string()),
        })
        .collect();
    toml::to_string(&shown).map_err(|e| CliError::Render(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_secret_long_value() {
        assert_eq!(mask_secret("postgres-password-42"), "post...d-42");
    }

    #[test]
    fn mask_secret_short_value() {
        assert_eq!(mask_secret("short"), "****");
    }

    #[test]
    fn mask_secret_exact_boundary() {
        assert_eq!(mask_secret("1234567890"), "1234...7890");
    }

    #[test]
    fn mask_secret_counts_characters_not_bytes() {
        assert_eq!(mask_secret("ééééé"), "****");
        assert_eq!(mask_secret("ééééabcdefgh"), "éééé...efgh");
    }

    #[test]
    fn render_masks_only_decoded_keys() {
        let bag: PropertyBag = [("db.password", "correct-horse-battery"), ("name", "demo-project")]
            .into_iter()
            .collect();
        let decoded: PropertyBag = [("db.password", "correct-horse-battery")].into_iter().collect();

        let out = render_properties(&bag, Some(&decoded)).unwrap();
        assert!(out.contains("\"db.password\" = \"corr...tery\""));
        assert!(out.contains("name = \"demo-project\""));
    }

    #[test]
    fn rendered_output_parses_back() {
        let bag: PropertyBag = [("a.b", "x"), ("c", "{y}")].into_iter().collect();
        let out = render_properties(&bag, None).unwrap();
        let parsed: PropertyBag = toml::from_str(&out).unwrap();
        assert_eq!(parsed, bag);
    }
}
