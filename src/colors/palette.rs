// ============================================================================
// Palette
// Every physical band color with display metadata for card renderers
// ============================================================================

use super::{ColorTable, ExponentColor, ToleranceColor, ValueColor};
use crate::errors::{CodecError, CodecResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Union of the value, exponent and tolerance vocabularies.
///
/// Renderers receive band colors from any table; converting to `Color` gives
/// them one type with a swatch and a short label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    #[cfg_attr(feature = "serde", serde(alias = "grey"))]
    Gray,
    White,
    Gold,
    Silver,
    Pink,
    /// Absent tolerance band
    #[cfg_attr(feature = "serde", serde(rename = "none"))]
    NoColor,
}

impl Color {
    pub const ALL: [Color; 14] = [
        Color::Black,
        Color::Brown,
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Violet,
        Color::Gray,
        Color::White,
        Color::Gold,
        Color::Silver,
        Color::Pink,
        Color::NoColor,
    ];

    /// Canonical lower-case name.
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Brown => "brown",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Violet => "violet",
            Color::Gray => "gray",
            Color::White => "white",
            Color::Gold => "gold",
            Color::Silver => "silver",
            Color::Pink => "pink",
            Color::NoColor => "none",
        }
    }

    /// Parse a name from any band table, "grey" included.
    ///
    /// # Errors
    /// Returns `UnknownColorName` against [`ColorTable::Palette`] if no table
    /// knows the name.
    pub fn from_name(name: &str) -> CodecResult<Self> {
        if name == "grey" {
            return Ok(Color::Gray);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|color| color.name() == name)
            .ok_or_else(|| CodecError::UnknownColorName {
                table: ColorTable::Palette,
                name: name.to_string(),
            })
    }

    /// Two-letter label printed on a band swatch.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Color::Black => "Bk",
            Color::Brown => "Br",
            Color::Red => "Rd",
            Color::Orange => "Or",
            Color::Yellow => "Yl",
            Color::Green => "Gr",
            Color::Blue => "Bl",
            Color::Violet => "Vt",
            Color::Gray => "Gy",
            Color::White => "Wt",
            Color::Gold => "Gd",
            Color::Silver => "Sl",
            Color::Pink => "Pk",
            Color::NoColor => "x",
        }
    }

    /// HTML color chosen to stay distinguishable on paper.
    pub fn hex(self) -> &'static str {
        match self {
            Color::Black => "#000000",
            Color::Brown => "#8B4513",
            Color::Red => "#FF0000",
            Color::Orange => "#FFA500",
            Color::Yellow => "#FFFF00",
            Color::Green => "#008800",
            Color::Blue => "#00008B",
            Color::Violet => "#800080",
            Color::Gray => "#808080",
            Color::White => "#FFFFFF",
            Color::Gold => "#FFD700",
            Color::Silver => "#C0C0C0",
            Color::Pink => "#FFC0CB",
            Color::NoColor => "#D2B48C",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Color {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

// ============================================================================
// Conversions from the band tables
// ============================================================================

impl From<ValueColor> for Color {
    fn from(color: ValueColor) -> Self {
        match color {
            ValueColor::Black => Color::Black,
            ValueColor::Brown => Color::Brown,
            ValueColor::Red => Color::Red,
            ValueColor::Orange => Color::Orange,
            ValueColor::Yellow => Color::Yellow,
            ValueColor::Green => Color::Green,
            ValueColor::Blue => Color::Blue,
            ValueColor::Violet => Color::Violet,
            ValueColor::Gray => Color::Gray,
            ValueColor::White => Color::White,
        }
    }
}

impl From<ExponentColor> for Color {
    fn from(color: ExponentColor) -> Self {
        match color {
            ExponentColor::Pink => Color::Pink,
            ExponentColor::Silver => Color::Silver,
            ExponentColor::Gold => Color::Gold,
            ExponentColor::Black => Color::Black,
            ExponentColor::Brown => Color::Brown,
            ExponentColor::Red => Color::Red,
            ExponentColor::Orange => Color::Orange,
            ExponentColor::Yellow => Color::Yellow,
            ExponentColor::Green => Color::Green,
            ExponentColor::Blue => Color::Blue,
            ExponentColor::Violet => Color::Violet,
        }
    }
}

impl From<ToleranceColor> for Color {
    fn from(color: ToleranceColor) -> Self {
        match color {
            ToleranceColor::Gray => Color::Gray,
            ToleranceColor::Violet => Color::Violet,
            ToleranceColor::Blue => Color::Blue,
            ToleranceColor::Green => Color::Green,
            ToleranceColor::Brown => Color::Brown,
            ToleranceColor::Red => Color::Red,
            ToleranceColor::Gold => Color::Gold,
            ToleranceColor::Silver => Color::Silver,
            ToleranceColor::NoColor => Color::NoColor,
        }
    }
}
