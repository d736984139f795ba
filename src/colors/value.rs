// ============================================================================
// Value Colors
// Digit bands: one color per decimal digit 0-9
// ============================================================================

use super::traits::{impl_color_str, ColorCode, ColorTable};
use crate::errors::CodecResult;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Color of a significant-digit band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ValueColor {
    Black = 0,
    Brown = 1,
    Red = 2,
    Orange = 3,
    Yellow = 4,
    Green = 5,
    Blue = 6,
    Violet = 7,
    /// Also spelled "grey"
    #[cfg_attr(feature = "serde", serde(alias = "grey"))]
    Gray = 8,
    White = 9,
}

impl ColorCode for ValueColor {
    type Code = i32;

    const TABLE: ColorTable = ColorTable::Value;

    const ALL: &'static [Self] = &[
        ValueColor::Black,
        ValueColor::Brown,
        ValueColor::Red,
        ValueColor::Orange,
        ValueColor::Yellow,
        ValueColor::Green,
        ValueColor::Blue,
        ValueColor::Violet,
        ValueColor::Gray,
        ValueColor::White,
    ];

    const NAMES: &'static [(&'static str, Self)] = &[
        ("black", ValueColor::Black),
        ("brown", ValueColor::Brown),
        ("red", ValueColor::Red),
        ("orange", ValueColor::Orange),
        ("yellow", ValueColor::Yellow),
        ("green", ValueColor::Green),
        ("blue", ValueColor::Blue),
        ("violet", ValueColor::Violet),
        ("gray", ValueColor::Gray),
        ("grey", ValueColor::Gray),
        ("white", ValueColor::White),
    ];

    #[inline]
    fn code(self) -> i32 {
        self as i32
    }

    fn name(self) -> &'static str {
        match self {
            ValueColor::Black => "black",
            ValueColor::Brown => "brown",
            ValueColor::Red => "red",
            ValueColor::Orange => "orange",
            ValueColor::Yellow => "yellow",
            ValueColor::Green => "green",
            ValueColor::Blue => "blue",
            ValueColor::Violet => "violet",
            ValueColor::Gray => "gray",
            ValueColor::White => "white",
        }
    }
}

impl ValueColor {
    /// Decimal digit this band stands for.
    #[inline]
    pub const fn digit(self) -> u8 {
        self as u8
    }
}

impl_color_str!(ValueColor);

/// Canonical name of the digit color for `code` (0-9).
///
/// # Errors
/// Returns `CodeOutOfRange` outside 0-9.
pub fn value_color_name(code: i32) -> CodecResult<&'static str> {
    ValueColor::from_code(code).map(ValueColor::name)
}

/// Digit for a value color name; accepts the "grey" alias.
///
/// # Errors
/// Returns `UnknownColorName` if `name` is not a digit color.
pub fn value_color_code(name: &str) -> CodecResult<i32> {
    ValueColor::from_name(name).map(ValueColor::code)
}
