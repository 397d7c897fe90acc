//! Closure-backed mappers

use std::fmt;

use crate::domain::ports::{MapRequest, MapperError, PathMapper};

/// Registry name of the pass-through mapper
pub const PASS_THROUGH: &str = "pass_through";

/// Adapts any function into a `PathMapper`
pub struct FnMapper<F> {
    name: String,
    func: F,
}

impl<F> FnMapper<F>
where
    F: Fn(&MapRequest<'_>) -> Result<String, MapperError> + Send + Sync,
{
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> PathMapper for FnMapper<F>
where
    F: Fn(&MapRequest<'_>) -> Result<String, MapperError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn map(&self, request: &MapRequest<'_>) -> Result<String, MapperError> {
        (self.func)(request)
    }
}

impl<F> fmt::Debug for FnMapper<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnMapper").field("name", &self.name).finish()
    }
}

fn same_relative_path(request: &MapRequest<'_>) -> Result<String, MapperError> {
    Ok(request.relative().to_string())
}

/// Mirrors the source layout: the destination is the source-relative path.
pub fn pass_through() -> impl PathMapper {
    FnMapper::new(PASS_THROUGH, same_relative_path)
}
