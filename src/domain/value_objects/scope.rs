//! Scope Mapping Value Object
//!
//! Configured `(source prefix -> destination prefix)` pairs that partition
//! the source tree into independently routed subtrees.

use std::fmt;

/// One configured scope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeEntry {
    /// Prefix of the source-relative path, without surrounding `/`
    pub source_prefix: String,
    /// Prefix prepended under the destination root, without surrounding `/`
    pub destination_prefix: String,
}

/// Set of scopes, held in descending lexicographic order of source prefix
///
/// The ordering puts more specific prefixes (`a/b`) ahead of the prefixes
/// they extend (`a`) and the empty catch-all prefix last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeMapping {
    entries: Vec<ScopeEntry>,
}

impl ScopeMapping {
    /// Build a mapping from unordered pairs.
    ///
    /// Prefixes are trimmed of leading and trailing `/`. When two source
    /// prefixes normalize to the same value the first pair wins.
    pub fn new<I, S, D>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, D)>,
        S: AsRef<str>,
        D: AsRef<str>,
    {
        let mut entries: Vec<ScopeEntry> = Vec::new();
        for (source, destination) in pairs {
            let source_prefix = trim_slashes(source.as_ref());
            if entries.iter().any(|e| e.source_prefix == source_prefix) {
                continue;
            }
            entries.push(ScopeEntry {
                source_prefix,
                destination_prefix: trim_slashes(destination.as_ref()),
            });
        }
        entries.sort_by(|a, b| b.source_prefix.cmp(&a.source_prefix));
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in match order
    pub fn iter(&self) -> impl Iterator<Item = &ScopeEntry> {
        self.entries.iter()
    }
}

impl fmt::Display for ScopeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" -> \"{}\"", self.source_prefix, self.destination_prefix)
    }
}

fn trim_slashes(value: &str) -> String {
    value.trim_matches('/').to_string()
}
