//! Domain Layer
//!
//! The placement rules of Stower, kept free of concrete I/O.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (SourceReference, ScopeMapping)
//! - `services/` - Scope and destination resolution
//! - `ports/` - Interface definitions for infrastructure (PathMapper, FileSystem)
//!
//! ## Design Principles
//!
//! 1. **No mutation** - Nothing here writes to the file system
//! 2. **Pure Functions** - Resolvers are stateless once built
//! 3. **Ports & Adapters** - Mapping strategies and file operations go through traits

pub mod ports;
pub mod services;
pub mod value_objects;
