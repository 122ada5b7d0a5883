//! Zero-check Error Types
//!
//! Defines the error conditions produced while checking values.
//! The only failure is a value whose kind tag carries no payload.

use std::fmt;

use thiserror::Error;

/// One step from a composite value into one of its children
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

/// Location of a value relative to the root passed to the checker
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValuePath {
    segments: Vec<PathSegment>,
}

impl ValuePath {
    /// Path of the root value itself
    pub fn root() -> Self {
        Self::default()
    }

    /// Prefix this path with the segment leading into it from its parent
    pub fn within(mut self, segment: PathSegment) -> Self {
        self.segments.insert(0, segment);
        self
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for ValuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for segment in &self.segments {
            match segment {
                PathSegment::Field(name) => write!(f, ".{}", name)?,
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ZeroError {
    /// Kind tag without a payload (caller contract violation)
    #[error("invalid value at {path}: kind has no payload")]
    InvalidValue { path: ValuePath },
}

impl ZeroError {
    /// Stable name of the error kind, used in CLI diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            ZeroError::InvalidValue { .. } => "InvalidValue",
        }
    }
}

pub type ZeroResult<T> = Result<T, ZeroError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_renders_from_root() {
        let path = ValuePath::root()
            .within(PathSegment::Field("inner".to_string()))
            .within(PathSegment::Index(2))
            .within(PathSegment::Field("items".to_string()));
        assert_eq!(path.to_string(), "$.items[2].inner");
        assert_eq!(ValuePath::root().to_string(), "$");
    }

    #[test]
    fn invalid_value_message_names_path() {
        let err = ZeroError::InvalidValue {
            path: ValuePath::root().within(PathSegment::Field("A".to_string())),
        };
        assert_eq!(err.kind(), "InvalidValue");
        assert_eq!(err.to_string(), "invalid value at $.A: kind has no payload");
    }
}
