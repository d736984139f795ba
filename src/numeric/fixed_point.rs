// ============================================================================
// Fixed-Point Value
// Decimal value stored as mantissa x 10^exponent with a fixed digit count
// ============================================================================

use crate::errors::{CodecError, CodecResult};
use rust_decimal::Decimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest significant-digit count whose mantissa still fits an i64.
pub const MAX_PLACES: u32 = 18;

/// Decimal value represented as `mantissa × 10^exponent`.
///
/// Values built with [`FixedPointValue::from_float`] carry exactly `places`
/// significant digits in the mantissa, e.g. 4700 at two places is `47e2`.
///
/// # Rounding
/// Rounds half away from zero (`f64::round`), so `125` at two places becomes
/// `13e1`. When rounding produces an extra digit the carry moves into the
/// exponent: `99.6` at two places is `10e1`, not `100e0`.
///
/// # Example
/// ```
/// use resistor_codes::numeric::FixedPointValue;
///
/// let fixed = FixedPointValue::from_float(4700.0, 2)?;
/// assert_eq!(fixed.mantissa(), 47);
/// assert_eq!(fixed.exponent(), 2);
/// assert_eq!(fixed.as_float(), 4700.0);
/// # Ok::<(), resistor_codes::CodecError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FixedPointValue {
    mantissa: i64,
    exponent: i32,
}

/// Compute 10^n at compile time
const fn pow10(n: u32) -> i64 {
    let mut result: i64 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

/// `value / 10^exponent` rounded half away from zero.
///
/// Negative exponents multiply by the positive power instead of dividing by a
/// fractional one, which is never exact in binary.
#[inline]
fn scaled_round(value: f64, exponent: i32) -> i64 {
    let scaled = if exponent >= 0 {
        value / 10f64.powi(exponent)
    } else {
        value * 10f64.powi(-exponent)
    };
    scaled.round() as i64
}

impl FixedPointValue {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw parts without rounding.
    ///
    /// Used when the digits are already known, e.g. when reading bands.
    #[inline]
    pub const fn new(mantissa: i64, exponent: i32) -> Self {
        Self { mantissa, exponent }
    }

    /// Round a positive value to `places` significant digits.
    ///
    /// `exponent = floor(log10(value)) - (places - 1)` and
    /// `mantissa = round(value / 10^exponent)`.
    ///
    /// # Errors
    /// Returns `Domain` if `value` is not a positive finite number, if `places`
    /// is zero or above [`MAX_PLACES`], or if the value is too close to the
    /// limits of f64 to scale.
    pub fn from_float(value: f64, places: u32) -> CodecResult<Self> {
        if !value.is_finite() || value <= 0.0 || places == 0 || places > MAX_PLACES {
            return Err(CodecError::Domain { value });
        }

        let lower = pow10(places - 1);
        let upper = pow10(places);

        let mut exponent = value.log10().floor() as i32 - (places as i32 - 1);
        let mut mantissa = scaled_round(value, exponent);

        // Carry: rounding up gained a digit (also repairs log10 undershoot)
        if mantissa >= upper {
            exponent += 1;
            mantissa = scaled_round(value, exponent);
        } else if mantissa < lower {
            exponent -= 1;
            mantissa = scaled_round(value, exponent);
        }

        if !(lower..upper).contains(&mantissa) {
            return Err(CodecError::Domain { value });
        }

        tracing::trace!(value, places, mantissa, exponent, "rounded to fixed point");
        Ok(Self { mantissa, exponent })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Integer digit string.
    #[inline]
    pub const fn mantissa(self) -> i64 {
        self.mantissa
    }

    /// Power-of-ten scale.
    #[inline]
    pub const fn exponent(self) -> i32 {
        self.exponent
    }

    /// Number of decimal digits in the mantissa (zero counts as one digit).
    #[inline]
    pub fn digits(self) -> u32 {
        self.mantissa
            .unsigned_abs()
            .checked_ilog10()
            .map_or(1, |d| d + 1)
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Reconstruct `mantissa × 10^exponent`.
    ///
    /// No precision beyond f64 is claimed, but short decimals such as `47e-2`
    /// come back as the nearest f64 to `0.47`.
    #[inline]
    pub fn as_float(self) -> f64 {
        if self.exponent >= 0 {
            self.mantissa as f64 * 10f64.powi(self.exponent)
        } else {
            self.mantissa as f64 / 10f64.powi(-self.exponent)
        }
    }

    /// Convert to rust_decimal::Decimal.
    ///
    /// # Errors
    /// Returns `Domain` if the value is outside Decimal's range or scale.
    pub fn to_decimal(self) -> CodecResult<Decimal> {
        let out_of_range = || CodecError::Domain {
            value: self.as_float(),
        };

        if self.exponent < 0 {
            return Decimal::try_from_i128_with_scale(
                self.mantissa as i128,
                self.exponent.unsigned_abs(),
            )
            .map_err(|_| out_of_range());
        }

        let mut result = Decimal::from(self.mantissa);
        for _ in 0..self.exponent {
            result = result.checked_mul(Decimal::TEN).ok_or_else(out_of_range)?;
        }
        Ok(result)
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for FixedPointValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}e{}", self.mantissa, self.exponent)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow10() {
        assert_eq!(pow10(0), 1);
        assert_eq!(pow10(3), 1_000);
        assert_eq!(pow10(MAX_PLACES), 1_000_000_000_000_000_000);
    }

    #[test]
    fn test_from_float_two_places() {
        let x = FixedPointValue::from_float(470.0, 2).unwrap();
        assert_eq!((x.mantissa(), x.exponent()), (47, 1));

        let y = FixedPointValue::from_float(22.0, 2).unwrap();
        assert_eq!((y.mantissa(), y.exponent()), (22, 0));

        let z = FixedPointValue::from_float(1000.0, 2).unwrap();
        assert_eq!((z.mantissa(), z.exponent()), (10, 2));
    }

    #[test]
    fn test_from_float_three_places() {
        let x = FixedPointValue::from_float(123_000.0, 3).unwrap();
        assert_eq!((x.mantissa(), x.exponent()), (123, 3));
        assert_eq!(x.digits(), 3);
    }

    #[test]
    fn test_from_float_fractional() {
        let x = FixedPointValue::from_float(0.47, 2).unwrap();
        assert_eq!((x.mantissa(), x.exponent()), (47, -2));
        assert_eq!(x.as_float(), 0.47);

        let y = FixedPointValue::from_float(0.1, 3).unwrap();
        assert_eq!((y.mantissa(), y.exponent()), (100, -3));
    }

    #[test]
    fn test_from_float_rounds_half_away_from_zero() {
        let x = FixedPointValue::from_float(125.0, 2).unwrap();
        assert_eq!((x.mantissa(), x.exponent()), (13, 1));

        let y = FixedPointValue::from_float(4749.0, 2).unwrap();
        assert_eq!((y.mantissa(), y.exponent()), (47, 2));
    }

    #[test]
    fn test_from_float_carry_into_exponent() {
        let x = FixedPointValue::from_float(99.6, 2).unwrap();
        assert_eq!((x.mantissa(), x.exponent()), (10, 1));
        assert_eq!(x.digits(), 2);
        assert_eq!(x.as_float(), 100.0);

        let y = FixedPointValue::from_float(999.5, 3).unwrap();
        assert_eq!((y.mantissa(), y.exponent()), (100, 1));
    }

    #[test]
    fn test_from_float_domain_errors() {
        assert_eq!(
            FixedPointValue::from_float(0.0, 2),
            Err(CodecError::Domain { value: 0.0 })
        );
        assert_eq!(
            FixedPointValue::from_float(-10.0, 2),
            Err(CodecError::Domain { value: -10.0 })
        );
        assert!(FixedPointValue::from_float(f64::NAN, 2).is_err());
        assert!(FixedPointValue::from_float(f64::INFINITY, 2).is_err());
        assert!(FixedPointValue::from_float(10.0, 0).is_err());
        assert!(FixedPointValue::from_float(10.0, MAX_PLACES + 1).is_err());
    }

    #[test]
    fn test_as_float() {
        assert_eq!(FixedPointValue::new(47, 2).as_float(), 4700.0);
        assert_eq!(FixedPointValue::new(22, 0).as_float(), 22.0);
        assert_eq!(FixedPointValue::new(10, -2).as_float(), 0.1);
    }

    #[test]
    fn test_digits() {
        assert_eq!(FixedPointValue::new(0, 0).digits(), 1);
        assert_eq!(FixedPointValue::new(9, 0).digits(), 1);
        assert_eq!(FixedPointValue::new(10, 0).digits(), 2);
        assert_eq!(FixedPointValue::new(-470, 0).digits(), 3);
    }

    #[test]
    fn test_to_decimal() {
        let d = FixedPointValue::new(47, 2).to_decimal().unwrap();
        assert_eq!(d, Decimal::from(4700));

        let small = FixedPointValue::new(47, -2).to_decimal().unwrap();
        assert_eq!(small, Decimal::new(47, 2));
        assert_eq!(small.to_string(), "0.47");
    }

    #[test]
    fn test_to_decimal_out_of_range() {
        assert!(FixedPointValue::new(10, 40).to_decimal().is_err());
        assert!(FixedPointValue::new(10, -40).to_decimal().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(FixedPointValue::new(47, 2).to_string(), "47e2");
        assert_eq!(FixedPointValue::new(10, -3).to_string(), "10e-3");
    }
}
