//! Property tests for destination containment.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use stower::domain::services::{normalize_lexically, DestinationResolver, ScopeMatch};

fn mapped_path() -> impl Strategy<Value = String> {
    let segment = prop_oneof![
        3 => proptest::string::string_regex("[a-z0-9_-]{1,8}").unwrap(),
        1 => Just("..".to_string()),
        1 => Just(".".to_string()),
    ];
    proptest::collection::vec(segment, 1..=6).prop_map(|segments| segments.join("/"))
}

fn scope(destination_prefix: &str) -> ScopeMatch {
    ScopeMatch {
        source_prefix: "raw".to_string(),
        destination_prefix: destination_prefix.to_string(),
        relative: "file".to_string(),
    }
}

fn root() -> PathBuf {
    std::env::temp_dir().join("stower-dest")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: an accepted destination is strictly inside the destination root.
    #[test]
    fn property_destination_never_escapes_root(mapped in mapped_path()) {
        let resolver = DestinationResolver::new(root());

        if let Ok(destination) = resolver.resolve(&mapped, None) {
            prop_assert!(destination.starts_with(resolver.root()));
            prop_assert_ne!(destination.as_path(), resolver.root());
            prop_assert!(!destination.components().any(|c| c.as_os_str() == ".."));
        }
    }

    /// PROPERTY: an accepted scoped destination is strictly inside the scope prefix.
    #[test]
    fn property_destination_never_escapes_scope(
        mapped in mapped_path(),
        prefix in "[a-z]{1,6}",
    ) {
        let resolver = DestinationResolver::new(root());
        let scope_root = resolver.root().join(&prefix);

        if let Ok(destination) = resolver.resolve(&mapped, Some(&scope(&prefix))) {
            prop_assert!(destination.starts_with(&scope_root));
            prop_assert_ne!(destination, scope_root);
        }
    }

    /// PROPERTY: a mapper result without `..` segments is always accepted.
    #[test]
    fn property_plain_relative_paths_are_accepted(
        segments in proptest::collection::vec("[a-z0-9_-]{1,8}", 1..=5),
    ) {
        let mapped = segments.join("/");
        let resolver = DestinationResolver::new(root());

        let destination = resolver.resolve(&mapped, None);
        prop_assert!(destination.is_ok());
    }

    /// PROPERTY: normalization never panics and never leaves `.`/`..` behind.
    #[test]
    fn property_normalize_removes_dot_segments(mapped in mapped_path()) {
        if let Some(normalized) = normalize_lexically(Path::new(&mapped)) {
            prop_assert!(!normalized
                .components()
                .any(|c| matches!(c, std::path::Component::CurDir | std::path::Component::ParentDir)));
        }
    }
}
