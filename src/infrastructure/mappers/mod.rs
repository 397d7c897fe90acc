//! Built-in Path Mappers
//!
//! Implementations of the `PathMapper` port shipped with Stower.

mod external;
mod function;
mod ifcb;
mod mtime;

pub use external::ExternalMapper;
pub use function::{pass_through, FnMapper, PASS_THROUGH};
pub use ifcb::IfcbMapper;
pub use mtime::{MtimeMapper, DEFAULT_MTIME_FORMAT};
