//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod scope;
mod source;

pub use scope::{ScopeEntry, ScopeMapping};
pub use source::{FileIdentity, FileStat, SourceReference};
