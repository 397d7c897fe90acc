//! IFCB instrument file mapper
//!
//! Imaging FlowCytobot files carry their sample time in the name:
//! `D20230525T192231_IFCB162.adc` goes to `2023/D20230525/D20230525T192231_IFCB162.adc`.

use chrono::NaiveDateTime;

use crate::domain::ports::{MapRequest, MapperError, PathMapper};

const STAMP_FORMAT: &str = "%Y%m%dT%H%M%S";
const MIN_NAME_LEN: usize = 16;

#[derive(Debug, Clone, Copy, Default)]
pub struct IfcbMapper;

impl IfcbMapper {
    pub const NAME: &'static str = "ifcb";

    pub fn new() -> Self {
        Self
    }
}

impl PathMapper for IfcbMapper {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn map(&self, request: &MapRequest<'_>) -> Result<String, MapperError> {
        let name = request.base_name();
        if !name.starts_with('D') {
            return Err(MapperError::UnparseableName {
                name: name.to_string(),
                reason: "does not start with D prefix".to_string(),
            });
        }
        if name.len() < MIN_NAME_LEN {
            return Err(MapperError::UnparseableName {
                name: name.to_string(),
                reason: format!("is shorter than {} characters", MIN_NAME_LEN),
            });
        }
        let stamp = name
            .get(1..MIN_NAME_LEN)
            .filter(|stamp| stamp.is_ascii())
            .ok_or_else(|| MapperError::UnparseableName {
                name: name.to_string(),
                reason: "has a non-ASCII timestamp".to_string(),
            })?;

        let time = NaiveDateTime::parse_from_str(stamp, STAMP_FORMAT).map_err(|source| {
            MapperError::Timestamp {
                name: name.to_string(),
                source,
            }
        })?;

        Ok(format!("{}{}", time.format("%Y/D%Y%m%d/"), name))
    }
}
