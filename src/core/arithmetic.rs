//! The four basic operations over `f64`.
//!
//! All functions are pure. `divide` follows IEEE-754: `x / 0.0` is a signed
//! infinity and `0.0 / 0.0` is NaN. `checked_divide` rejects zero divisors.

use crate::utils::error::{CalcError, Result};

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

pub fn divide(a: f64, b: f64) -> f64 {
    a / b
}

/// Like [`divide`], but a divisor of `0.0` or `-0.0` is an error.
pub fn checked_divide(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero { dividend: a });
    }
    Ok(divide(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(add(10.0, 5.0), 15.0);
        assert_eq!(subtract(10.0, 5.0), 5.0);
        assert_eq!(multiply(10.0, 5.0), 50.0);
        assert_eq!(divide(10.0, 5.0), 2.0);
    }

    #[test]
    fn test_divide_by_zero_is_ieee754() {
        assert_eq!(divide(10.0, 0.0), f64::INFINITY);
        assert_eq!(divide(-10.0, 0.0), f64::NEG_INFINITY);
        assert_eq!(divide(10.0, -0.0), f64::NEG_INFINITY);
        assert!(divide(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_checked_divide() {
        assert_eq!(checked_divide(10.0, 5.0).unwrap(), 2.0);
        assert!(matches!(
            checked_divide(10.0, 0.0),
            Err(CalcError::DivisionByZero { dividend }) if dividend == 10.0
        ));
        assert!(checked_divide(0.0, -0.0).is_err());
    }

    #[test]
    fn test_fractional_operands() {
        assert_eq!(add(0.5, 0.25), 0.75);
        assert_eq!(multiply(-1.5, 4.0), -6.0);
    }
}
