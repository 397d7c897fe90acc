//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports:
//!
//! - `fs/` - Local file system
//! - `mappers/` - Built-in path mappers

pub mod fs;
pub mod mappers;
