//! Scope Resolver
//!
//! Finds the scope a source-relative path belongs to. Prefixes match as
//! plain strings, so `D2023` covers `D20230525T192231_IFCB162.adc` as well
//! as `D2023/x`. The most specific matching prefix wins; an empty prefix is
//! a catch-all.

use crate::domain::value_objects::{ScopeEntry, ScopeMapping};

/// A scope matched for one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeMatch {
    pub source_prefix: String,
    pub destination_prefix: String,
    /// Path of the file with `source_prefix/` removed, or the whole path
    /// when the prefix ends inside a component
    pub relative: String,
}

/// Outcome of scope resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeResolution {
    /// No scopes configured; the file is routed unscoped
    Unscoped,
    /// The file belongs to this scope
    Matched(ScopeMatch),
    /// Scopes are configured but none covers the file
    NoMatch,
}

#[derive(Debug, Clone, Default)]
pub struct ScopeResolver {
    mapping: ScopeMapping,
}

impl ScopeResolver {
    pub fn new(mapping: ScopeMapping) -> Self {
        Self { mapping }
    }

    pub fn mapping(&self) -> &ScopeMapping {
        &self.mapping
    }

    /// Resolve the scope of a `/`-separated source-relative path.
    pub fn resolve(&self, relative: &str) -> ScopeResolution {
        if self.mapping.is_empty() {
            return ScopeResolution::Unscoped;
        }

        self.mapping
            .iter()
            .find_map(|entry| match_entry(entry, relative))
            .map(ScopeResolution::Matched)
            .unwrap_or(ScopeResolution::NoMatch)
    }
}

fn match_entry(entry: &ScopeEntry, relative: &str) -> Option<ScopeMatch> {
    let prefix = entry.source_prefix.as_str();
    let rest = relative.strip_prefix(prefix)?;
    // Only a whole leading component is removed from the scoped path.
    let scoped = rest.strip_prefix('/').unwrap_or(relative);

    Some(ScopeMatch {
        source_prefix: entry.source_prefix.clone(),
        destination_prefix: entry.destination_prefix.clone(),
        relative: scoped.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(pairs: &[(&str, &str)]) -> ScopeResolver {
        ScopeResolver::new(ScopeMapping::new(pairs.iter().copied()))
    }

    fn matched(resolution: ScopeResolution) -> ScopeMatch {
        match resolution {
            ScopeResolution::Matched(m) => m,
            other => panic!("expected a scope match, got {:?}", other),
        }
    }

    #[test]
    fn no_scopes_means_unscoped() {
        let resolver = resolver(&[]);
        assert_eq!(resolver.resolve("a/b.txt"), ScopeResolution::Unscoped);
    }

    #[test]
    fn longest_prefix_wins() {
        let resolver = resolver(&[("a", "X"), ("a/b", "Y"), ("", "Z")]);

        let m = matched(resolver.resolve("a/b/c.txt"));
        assert_eq!(m.source_prefix, "a/b");
        assert_eq!(m.destination_prefix, "Y");
        assert_eq!(m.relative, "c.txt");
    }

    #[test]
    fn shorter_prefix_used_when_longer_does_not_apply() {
        let resolver = resolver(&[("a", "X"), ("a/b", "Y"), ("", "Z")]);

        let m = matched(resolver.resolve("a/c/d.txt"));
        assert_eq!(m.source_prefix, "a");
        assert_eq!(m.relative, "c/d.txt");
    }

    #[test]
    fn empty_prefix_catches_everything_else() {
        let resolver = resolver(&[("a", "X"), ("", "unmatched")]);

        let m = matched(resolver.resolve("other/file.bin"));
        assert_eq!(m.source_prefix, "");
        assert_eq!(m.destination_prefix, "unmatched");
        assert_eq!(m.relative, "other/file.bin");
    }

    #[test]
    fn unmatched_without_catch_all() {
        let resolver = resolver(&[("a", "X")]);
        assert_eq!(resolver.resolve("b/file.txt"), ScopeResolution::NoMatch);
    }

    #[test]
    fn prefix_may_end_inside_a_file_name() {
        let resolver = resolver(&[("D2023", "y2023"), ("D2024", "y2024")]);

        let m = matched(resolver.resolve("D20230525T192231_IFCB162.adc"));
        assert_eq!(m.source_prefix, "D2023");
        assert_eq!(m.destination_prefix, "y2023");
        assert_eq!(m.relative, "D20230525T192231_IFCB162.adc");
    }

    #[test]
    fn prefix_may_end_inside_a_directory_name() {
        let resolver = resolver(&[("a", "X")]);

        let m = matched(resolver.resolve("ab/file.txt"));
        assert_eq!(m.source_prefix, "a");
        assert_eq!(m.relative, "ab/file.txt");
    }

    #[test]
    fn longer_string_prefix_beats_component_prefix() {
        let resolver = resolver(&[("a", "X"), ("ab", "Y")]);

        let m = matched(resolver.resolve("ab/file.txt"));
        assert_eq!(m.destination_prefix, "Y");
        assert_eq!(m.relative, "file.txt");
    }
}
