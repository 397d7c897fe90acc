//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod path_mapper;

pub use file_system::FileSystem;
pub use path_mapper::{first_line, MapRequest, MapperError, PathMapper};
