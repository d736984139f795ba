// ============================================================================
// Tolerance Colors
// Tolerance band: one color per percentage, no digit meaning
// ============================================================================

use super::traits::{impl_color_str, ColorCode, ColorTable};
use crate::errors::CodecResult;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Color of the tolerance band.
///
/// A missing band (`NoColor`, named "none") means ±20 %.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ToleranceColor {
    /// Also spelled "grey"
    #[cfg_attr(feature = "serde", serde(alias = "grey"))]
    Gray,
    Violet,
    Blue,
    Green,
    Brown,
    Red,
    Gold,
    Silver,
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "none"))]
    NoColor,
}

impl ToleranceColor {
    /// Tolerance in percent.
    #[inline]
    pub fn percent(self) -> f64 {
        self.code()
    }
}

impl ColorCode for ToleranceColor {
    type Code = f64;

    const TABLE: ColorTable = ColorTable::Tolerance;

    const ALL: &'static [Self] = &[
        ToleranceColor::Gray,
        ToleranceColor::Violet,
        ToleranceColor::Blue,
        ToleranceColor::Green,
        ToleranceColor::Brown,
        ToleranceColor::Red,
        ToleranceColor::Gold,
        ToleranceColor::Silver,
        ToleranceColor::NoColor,
    ];

    const NAMES: &'static [(&'static str, Self)] = &[
        ("gray", ToleranceColor::Gray),
        ("grey", ToleranceColor::Gray),
        ("violet", ToleranceColor::Violet),
        ("blue", ToleranceColor::Blue),
        ("green", ToleranceColor::Green),
        ("brown", ToleranceColor::Brown),
        ("red", ToleranceColor::Red),
        ("gold", ToleranceColor::Gold),
        ("silver", ToleranceColor::Silver),
        ("none", ToleranceColor::NoColor),
    ];

    // Matched exactly; every percent is one of these literals
    fn code(self) -> f64 {
        match self {
            ToleranceColor::Gray => 0.05,
            ToleranceColor::Violet => 0.1,
            ToleranceColor::Blue => 0.25,
            ToleranceColor::Green => 0.5,
            ToleranceColor::Brown => 1.0,
            ToleranceColor::Red => 2.0,
            ToleranceColor::Gold => 5.0,
            ToleranceColor::Silver => 10.0,
            ToleranceColor::NoColor => 20.0,
        }
    }

    fn name(self) -> &'static str {
        match self {
            ToleranceColor::Gray => "gray",
            ToleranceColor::Violet => "violet",
            ToleranceColor::Blue => "blue",
            ToleranceColor::Green => "green",
            ToleranceColor::Brown => "brown",
            ToleranceColor::Red => "red",
            ToleranceColor::Gold => "gold",
            ToleranceColor::Silver => "silver",
            ToleranceColor::NoColor => "none",
        }
    }
}

impl_color_str!(ToleranceColor);

/// Canonical name of the tolerance color for `percent`.
///
/// # Errors
/// Returns `CodeOutOfRange` if no color has exactly this percentage.
pub fn tolerance_name(percent: f64) -> CodecResult<&'static str> {
    ToleranceColor::from_code(percent).map(ToleranceColor::name)
}

/// Percentage for a tolerance color name.
///
/// # Errors
/// Returns `UnknownColorName` if `name` is not a tolerance color.
pub fn tolerance_percent(name: &str) -> CodecResult<f64> {
    ToleranceColor::from_name(name).map(ToleranceColor::percent)
}
