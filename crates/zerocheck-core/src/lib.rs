//! Zero-value checking - Core Library
//!
//! Public API surface for tagged values and the zero-value predicate.

pub mod error;
pub mod config;
pub mod value;
pub mod check;

// Re-export commonly used types
pub use error::{PathSegment, ValuePath, ZeroError, ZeroResult};
pub use config::{CheckConfig, FloatZero};
pub use value::{Field, Kind, Record, Value};
pub use check::{is_zero, ZeroChecker};
