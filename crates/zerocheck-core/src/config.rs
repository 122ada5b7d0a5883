//! Checker Configuration
//!
//! Defines the knobs that change how zero-ness is decided.
//! Configuration only describes the rule; the checker applies it.

/// Rule used to decide whether a floating-point value is zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FloatZero {
    /// `x == 0.0`: both signed zeros count, NaN never does
    #[default]
    Numeric,

    /// All 64 bits clear: `-0.0` is not zero
    Bitwise,
}

impl FloatZero {
    pub fn is_zero(self, x: f64) -> bool {
        match self {
            FloatZero::Numeric => x == 0.0,
            FloatZero::Bitwise => x.to_bits() == 0,
        }
    }
}

/// Checker configuration
#[derive(Debug, Clone, Default)]
pub struct CheckConfig {
    /// Float comparison rule
    pub float_zero: FloatZero,
}

impl CheckConfig {
    /// Create a new configuration with default rules
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_zero_depends_on_rule() {
        assert!(FloatZero::Numeric.is_zero(-0.0));
        assert!(!FloatZero::Bitwise.is_zero(-0.0));
        assert!(FloatZero::Bitwise.is_zero(0.0));
        assert!(!FloatZero::Numeric.is_zero(f64::NAN));
        assert!(!FloatZero::Bitwise.is_zero(f64::NAN));
    }
}
