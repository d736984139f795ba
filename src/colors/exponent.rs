// ============================================================================
// Exponent Colors
// Multiplier band: power-of-ten exponents -3..=7
// ============================================================================

use super::traits::{impl_color_str, ColorCode, ColorTable};
use crate::errors::CodecResult;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Color of the multiplier band.
///
/// Black through violet carry the same number as the matching digit color;
/// gold, silver and pink only occur here and scale down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i8)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExponentColor {
    Pink = -3,
    Silver = -2,
    Gold = -1,
    Black = 0,
    Brown = 1,
    Red = 2,
    Orange = 3,
    Yellow = 4,
    Green = 5,
    Blue = 6,
    Violet = 7,
}

impl ExponentColor {
    /// Smallest exponent with a color.
    pub const MIN_EXPONENT: i32 = -3;

    /// Largest exponent with a color.
    pub const MAX_EXPONENT: i32 = 7;

    /// Scale factor `10^code`.
    #[inline]
    pub fn multiplier(self) -> f64 {
        10f64.powi(self.code())
    }
}

impl ColorCode for ExponentColor {
    type Code = i32;

    const TABLE: ColorTable = ColorTable::Exponent;

    const ALL: &'static [Self] = &[
        ExponentColor::Pink,
        ExponentColor::Silver,
        ExponentColor::Gold,
        ExponentColor::Black,
        ExponentColor::Brown,
        ExponentColor::Red,
        ExponentColor::Orange,
        ExponentColor::Yellow,
        ExponentColor::Green,
        ExponentColor::Blue,
        ExponentColor::Violet,
    ];

    const NAMES: &'static [(&'static str, Self)] = &[
        ("pink", ExponentColor::Pink),
        ("silver", ExponentColor::Silver),
        ("gold", ExponentColor::Gold),
        ("black", ExponentColor::Black),
        ("brown", ExponentColor::Brown),
        ("red", ExponentColor::Red),
        ("orange", ExponentColor::Orange),
        ("yellow", ExponentColor::Yellow),
        ("green", ExponentColor::Green),
        ("blue", ExponentColor::Blue),
        ("violet", ExponentColor::Violet),
    ];

    #[inline]
    fn code(self) -> i32 {
        self as i32
    }

    fn name(self) -> &'static str {
        match self {
            ExponentColor::Pink => "pink",
            ExponentColor::Silver => "silver",
            ExponentColor::Gold => "gold",
            ExponentColor::Black => "black",
            ExponentColor::Brown => "brown",
            ExponentColor::Red => "red",
            ExponentColor::Orange => "orange",
            ExponentColor::Yellow => "yellow",
            ExponentColor::Green => "green",
            ExponentColor::Blue => "blue",
            ExponentColor::Violet => "violet",
        }
    }
}

impl_color_str!(ExponentColor);

/// Canonical name of the multiplier color for exponent `code` (-3..=7).
///
/// # Errors
/// Returns `CodeOutOfRange` outside -3..=7.
pub fn exponent_color_name(code: i32) -> CodecResult<&'static str> {
    ExponentColor::from_code(code).map(ExponentColor::name)
}

/// Exponent for a multiplier color name.
///
/// # Errors
/// Returns `UnknownColorName` if `name` is not a multiplier color.
pub fn exponent_color_code(name: &str) -> CodecResult<i32> {
    ExponentColor::from_name(name).map(ExponentColor::code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::ValueColor;

    #[test]
    fn test_name_code_bijection() {
        for code in ExponentColor::MIN_EXPONENT..=ExponentColor::MAX_EXPONENT {
            let name = exponent_color_name(code).unwrap();
            assert_eq!(exponent_color_code(name).unwrap(), code);
        }
        assert_eq!(ExponentColor::ALL.len(), 11);
    }

    #[test]
    fn test_shared_colors_match_digits() {
        // Black..violet mean the same number as a digit or as an exponent
        for code in 0..=7 {
            let exponent = ExponentColor::from_code(code).unwrap();
            let digit = ValueColor::from_code(code).unwrap();
            assert_eq!(exponent.name(), digit.name());
        }
    }

    #[test]
    fn test_negative_exponents() {
        assert_eq!(exponent_color_code("gold"), Ok(-1));
        assert_eq!(exponent_color_code("silver"), Ok(-2));
        assert_eq!(exponent_color_code("pink"), Ok(-3));
    }

    #[test]
    fn test_out_of_range() {
        assert!(exponent_color_name(8).is_err());
        assert!(exponent_color_name(-4).is_err());
        // Gray and white are digit-only
        assert!(exponent_color_code("gray").is_err());
        assert!(exponent_color_code("white").is_err());
    }

    #[test]
    fn test_multiplier() {
        assert_eq!(ExponentColor::Red.multiplier(), 100.0);
        assert_eq!(ExponentColor::Black.multiplier(), 1.0);
        assert!((ExponentColor::Silver.multiplier() - 0.01).abs() < 1e-15);
    }
}
