// SPDX-FileCopyrightText: 2026 SecDecode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for SecDecode.
//!
//! Provides the error taxonomy, the property and settings types, and the
//! collaborator traits (`Cipher`, `BuildHost`) shared by every other crate in
//! the workspace.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{CipherError, DecodeError, ErrorKind};
pub use traits::{BuildHost, Cipher};
pub use types::{
    ExecutionEnvironment, MAVEN_HOME_PROPERTY, PropertyBag, SECURITY_LOCATION_PROPERTY,
    SettingsFile, USER_HOME_PROPERTY,
};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn all_trait_modules_are_exported() {
        fn _assert_cipher<T: Cipher>() {}
        fn _assert_host<T: BuildHost>() {}
        fn _assert_arc_cipher<T: Cipher>() {
            _assert_cipher::<std::sync::Arc<T>>();
        }
    }

    proptest! {
        #[test]
        fn merge_with_empty_bag_is_identity(
            entries in proptest::collection::btree_map("[a-z.]{1,12}", ".{0,24}", 0..16)
        ) {
            let original: PropertyBag = entries.into_iter().collect();
            let mut merged = original.clone();
            merged.merge(&PropertyBag::new());
            prop_assert_eq!(merged, original);
        }
    }
}
