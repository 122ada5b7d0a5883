//! Zero-Value Checker
//!
//! Decides whether a value equals the zero value of its kind.
//! Checking is pure: no state is kept between calls.

use tracing::{debug, trace};

use crate::config::CheckConfig;
use crate::error::{PathSegment, ValuePath, ZeroError, ZeroResult};
use crate::value::Value;

/// Stateless zero-value predicate
#[derive(Debug, Clone, Default)]
pub struct ZeroChecker {
    config: CheckConfig,
}

impl ZeroChecker {
    pub fn new(config: CheckConfig) -> Self {
        ZeroChecker { config }
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Report whether `value` is the zero value of its kind.
    ///
    /// Arrays and records are zero when every element is zero. They are walked
    /// in full, so an invalid value anywhere inside fails the whole check.
    /// References are zero only when unset; the target is not inspected.
    ///
    /// Recurses once per nesting level with no depth limit: extremely deep
    /// nesting can exhaust the thread's stack.
    pub fn is_zero(&self, value: &Value) -> ZeroResult<bool> {
        match self.check(value) {
            Ok(zero) => {
                trace!(kind = %value.kind(), zero, "checked value");
                Ok(zero)
            }
            Err(path) => {
                debug!(%path, "invalid value");
                Err(ZeroError::InvalidValue { path })
            }
        }
    }

    fn check(&self, value: &Value) -> Result<bool, ValuePath> {
        match value {
            Value::Invalid => Err(ValuePath::root()),
            Value::Bool(b) => Ok(!b),
            Value::Int(n) => Ok(*n == 0),
            Value::Uint(n) => Ok(*n == 0),
            Value::Float(x) => Ok(self.config.float_zero.is_zero(*x)),
            Value::Str(s) => Ok(s.is_empty()),
            Value::Ref(target) => Ok(target.is_none()),
            Value::Array(items) => {
                let mut zero = true;
                for (idx, item) in items.iter().enumerate() {
                    zero &= self
                        .check(item)
                        .map_err(|path| path.within(PathSegment::Index(idx)))?;
                }
                Ok(zero)
            }
            Value::Record(record) => {
                let mut zero = true;
                for field in record.fields() {
                    zero &= self
                        .check(&field.value)
                        .map_err(|path| path.within(PathSegment::Field(field.name.clone())))?;
                }
                Ok(zero)
            }
        }
    }
}

/// Check `value` with the default configuration
pub fn is_zero(value: &Value) -> ZeroResult<bool> {
    ZeroChecker::default().is_zero(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FloatZero;
    use crate::value::Record;

    #[test]
    fn scalars_compare_to_their_zero() {
        assert_eq!(is_zero(&Value::Int(0)), Ok(true));
        assert_eq!(is_zero(&Value::Int(-4)), Ok(false));
        assert_eq!(is_zero(&Value::Uint(0)), Ok(true));
        assert_eq!(is_zero(&Value::Float(0.0)), Ok(true));
        assert_eq!(is_zero(&Value::Float(f64::NAN)), Ok(false));
        assert_eq!(is_zero(&Value::Bool(false)), Ok(true));
        assert_eq!(is_zero(&Value::Bool(true)), Ok(false));
        assert_eq!(is_zero(&Value::from("")), Ok(true));
        assert_eq!(is_zero(&Value::from(" ")), Ok(false));
    }

    #[test]
    fn present_reference_is_never_zero() {
        assert_eq!(is_zero(&Value::null_ref()), Ok(true));
        assert_eq!(is_zero(&Value::ref_to(0)), Ok(false));
        assert_eq!(is_zero(&Value::ref_to(Value::Invalid)), Ok(false));
    }

    #[test]
    fn bitwise_rule_rejects_negative_zero() {
        let checker = ZeroChecker::new(CheckConfig {
            float_zero: FloatZero::Bitwise,
        });
        assert_eq!(checker.is_zero(&Value::Float(-0.0)), Ok(false));
        assert_eq!(is_zero(&Value::Float(-0.0)), Ok(true));
    }

    #[test]
    fn invalid_after_nonzero_field_still_fails() {
        let record = Record::new()
            .with_field("A", 1)
            .with_field("B", vec![Value::Int(0), Value::Invalid]);
        let err = is_zero(&Value::from(record)).unwrap_err();
        assert_eq!(err.to_string(), "invalid value at $.B[1]: kind has no payload");
    }

    #[test]
    fn top_level_invalid_reports_root() {
        let err = is_zero(&Value::Invalid).unwrap_err();
        match err {
            ZeroError::InvalidValue { path } => assert!(path.is_root()),
        }
    }
}
