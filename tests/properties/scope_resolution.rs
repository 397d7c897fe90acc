//! Property tests for scope resolution.

use proptest::prelude::*;

use stower::domain::services::{ScopeResolution, ScopeResolver};
use stower::domain::value_objects::ScopeMapping;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-c]{1,2}").unwrap()
}

fn relative_path() -> impl Strategy<Value = String> {
    proptest::collection::vec(segment(), 1..=4).prop_map(|segments| segments.join("/"))
}

fn prefixes() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(
        proptest::collection::vec(segment(), 0..=3).prop_map(|s| s.join("/")),
        1..=6,
    )
}

fn covers(prefix: &str, relative: &str) -> bool {
    relative.starts_with(prefix)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the matched scope is the longest configured prefix covering the path.
    #[test]
    fn property_most_specific_prefix_wins(
        prefixes in prefixes(),
        relative in relative_path(),
    ) {
        let mapping = ScopeMapping::new(prefixes.iter().map(|p| (p.as_str(), "dest")));
        let resolver = ScopeResolver::new(mapping);
        let longest = prefixes
            .iter()
            .filter(|p| covers(p, &relative))
            .max_by_key(|p| p.len());

        match (resolver.resolve(&relative), longest) {
            (ScopeResolution::Matched(m), Some(expected)) => {
                prop_assert_eq!(&m.source_prefix, expected);
                let component = format!("{}/", m.source_prefix);
                let expected_relative = if m.source_prefix.is_empty() {
                    relative.as_str()
                } else {
                    relative.strip_prefix(&component).unwrap_or(&relative)
                };
                prop_assert_eq!(m.relative.as_str(), expected_relative);
            }
            (ScopeResolution::NoMatch, None) => {}
            (other, expected) => {
                prop_assert!(false, "resolved {:?}, expected prefix {:?}", other, expected);
            }
        }
    }

    /// PROPERTY: an empty prefix makes every path resolvable.
    #[test]
    fn property_catch_all_always_matches(
        prefixes in prefixes(),
        relative in relative_path(),
    ) {
        let mut pairs: Vec<(String, String)> =
            prefixes.into_iter().map(|p| (p, "dest".to_string())).collect();
        pairs.push((String::new(), "rest".to_string()));
        let resolver = ScopeResolver::new(ScopeMapping::new(pairs));

        let matched = matches!(resolver.resolve(&relative), ScopeResolution::Matched(_));
        prop_assert!(matched);
    }
}
