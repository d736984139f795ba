// ============================================================================
// Color Code Trait
// Shared name <-> code capability of every band color table
// ============================================================================

use crate::errors::{CodecError, CodecResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifies a band color table in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColorTable {
    /// Digit bands, codes 0-9
    Value,
    /// Multiplier band, codes -3..=7
    Exponent,
    /// Tolerance band, codes are percentages
    Tolerance,
    /// Union of every band color, no codes
    Palette,
}

impl fmt::Display for ColorTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorTable::Value => write!(f, "value"),
            ColorTable::Exponent => write!(f, "exponent"),
            ColorTable::Tolerance => write!(f, "tolerance"),
            ColorTable::Palette => write!(f, "palette"),
        }
    }
}

/// Bidirectional lookup between a closed color vocabulary and numeric codes.
///
/// Implementors are plain enums backed by `static` tables, so lookups never
/// allocate and the tables can be shared freely across threads.
///
/// # Names
/// Names are lower-case and matched exactly. `NAMES` lists every accepted
/// spelling including aliases (`grey` for `gray`), while [`ColorCode::name`]
/// always returns the single canonical spelling.
pub trait ColorCode: Copy + PartialEq + Sized + 'static {
    /// Numeric code type (digit, exponent or percent).
    type Code: Copy + PartialEq + fmt::Display;

    /// Table reported in lookup errors.
    const TABLE: ColorTable;

    /// Every color, ordered by code.
    const ALL: &'static [Self];

    /// Every accepted spelling, aliases included.
    const NAMES: &'static [(&'static str, Self)];

    /// Numeric code of this color.
    fn code(self) -> Self::Code;

    /// Canonical lower-case name.
    fn name(self) -> &'static str;

    /// Look up the color for a code.
    ///
    /// # Errors
    /// Returns `CodeOutOfRange` if no color has this code.
    fn from_code(code: Self::Code) -> CodecResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|color| color.code() == code)
            .ok_or_else(|| CodecError::CodeOutOfRange {
                table: Self::TABLE,
                code: code.to_string(),
            })
    }

    /// Look up the color for a name or alias.
    ///
    /// # Errors
    /// Returns `UnknownColorName` if the name is not in the vocabulary.
    fn from_name(name: &str) -> CodecResult<Self> {
        Self::NAMES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, color)| *color)
            .ok_or_else(|| CodecError::UnknownColorName {
                table: Self::TABLE,
                name: name.to_string(),
            })
    }
}

/// `Display` and `FromStr` through the [`ColorCode`] name table.
macro_rules! impl_color_str {
    ($color:ty) => {
        impl std::fmt::Display for $color {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::colors::ColorCode::name(*self))
            }
        }

        impl std::str::FromStr for $color {
            type Err = $crate::errors::CodecError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$color as $crate::colors::ColorCode>::from_name(s)
            }
        }
    };
}

pub(crate) use impl_color_str;

#[cfg(test)]
mod tests {
    use super::*;

    // Minimal table for exercising the provided methods
    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Signal {
        Stop,
        Go,
    }

    impl ColorCode for Signal {
        type Code = i32;
        const TABLE: ColorTable = ColorTable::Value;
        const ALL: &'static [Self] = &[Signal::Stop, Signal::Go];
        const NAMES: &'static [(&'static str, Self)] =
            &[("stop", Signal::Stop), ("halt", Signal::Stop), ("go", Signal::Go)];

        fn code(self) -> i32 {
            match self {
                Signal::Stop => 0,
                Signal::Go => 1,
            }
        }

        fn name(self) -> &'static str {
            match self {
                Signal::Stop => "stop",
                Signal::Go => "go",
            }
        }
    }

    impl_color_str!(Signal);

    #[test]
    fn test_from_code() {
        assert_eq!(Signal::from_code(1), Ok(Signal::Go));
        assert_eq!(
            Signal::from_code(2),
            Err(CodecError::CodeOutOfRange {
                table: ColorTable::Value,
                code: "2".to_string(),
            })
        );
    }

    #[test]
    fn test_from_name_resolves_alias() {
        assert_eq!(Signal::from_name("halt"), Ok(Signal::Stop));
        assert_eq!(Signal::from_name("halt").unwrap().name(), "stop");
        assert!(Signal::from_name("Stop").is_err());
    }

    #[test]
    fn test_str_impls() {
        assert_eq!(Signal::Go.to_string(), "go");
        assert_eq!("halt".parse::<Signal>(), Ok(Signal::Stop));
    }

    #[test]
    fn test_table_display() {
        assert_eq!(ColorTable::Exponent.to_string(), "exponent");
        assert_eq!(ColorTable::Palette.to_string(), "palette");
    }
}
