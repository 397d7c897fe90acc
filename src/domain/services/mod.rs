//! Domain Services
//!
//! Resolution steps of the per-file pipeline. Neither service touches the
//! file system.

mod destination_resolver;
mod scope_resolver;

pub use destination_resolver::{normalize_lexically, DestinationResolver};
pub use scope_resolver::{ScopeMatch, ScopeResolution, ScopeResolver};
