// ============================================================================
// Band Format
// Digit band count and the decoded band sequence
// ============================================================================

use crate::colors::{Color, ColorCode, ExponentColor, ValueColor};
use crate::errors::{CodecError, CodecResult};
use arrayvec::ArrayVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Most digit bands any supported format uses.
pub const MAX_DIGIT_BANDS: usize = 3;

/// Number of significant-digit bands before the multiplier band.
///
/// Tolerance is not counted: it is a single band in every format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BandFormat {
    /// Two digits and a multiplier (4 bands with tolerance)
    ThreeBand,
    /// Three digits and a multiplier (5 bands with tolerance)
    FourBand,
}

impl BandFormat {
    /// Digit bands in this format.
    #[inline]
    pub const fn digit_bands(self) -> usize {
        match self {
            BandFormat::ThreeBand => 2,
            BandFormat::FourBand => 3,
        }
    }

    /// Significant digits the format can carry.
    #[inline]
    pub const fn places(self) -> u32 {
        self.digit_bands() as u32
    }

    /// Select the format from a digit band count.
    ///
    /// # Errors
    /// Returns `InvalidBandCount` for anything other than 2 or 3.
    pub fn from_digit_bands(count: usize) -> CodecResult<Self> {
        match count {
            2 => Ok(BandFormat::ThreeBand),
            3 => Ok(BandFormat::FourBand),
            _ => Err(CodecError::InvalidBandCount {
                min: BandFormat::ThreeBand.digit_bands(),
                max: BandFormat::FourBand.digit_bands(),
                found: count,
            }),
        }
    }
}

/// Decoded band sequence: digit colors, most significant first, then the
/// multiplier color.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bands {
    format: BandFormat,
    digits: ArrayVec<ValueColor, MAX_DIGIT_BANDS>,
    exponent: ExponentColor,
}

impl Bands {
    /// Build a band sequence, checking the digit count against the format.
    ///
    /// # Errors
    /// Returns `InvalidBandCount` if `digits` does not match `format`.
    pub fn new(
        format: BandFormat,
        digits: &[ValueColor],
        exponent: ExponentColor,
    ) -> CodecResult<Self> {
        if digits.len() != format.digit_bands() {
            return Err(CodecError::InvalidBandCount {
                min: format.digit_bands(),
                max: format.digit_bands(),
                found: digits.len(),
            });
        }
        Ok(Self {
            format,
            digits: digits.iter().copied().collect(),
            exponent,
        })
    }

    /// Parse band names; the number of digit names selects the format.
    ///
    /// # Errors
    /// Returns `InvalidBandCount` for a digit count other than 2 or 3, or
    /// `UnknownColorName` for the first name outside its table.
    pub fn from_names(digits: &[&str], exponent: &str) -> CodecResult<Self> {
        let format = BandFormat::from_digit_bands(digits.len())?;
        let digits = digits
            .iter()
            .map(|name| ValueColor::from_name(name))
            .collect::<CodecResult<ArrayVec<ValueColor, MAX_DIGIT_BANDS>>>()?;
        let exponent = ExponentColor::from_name(exponent)?;
        Ok(Self {
            format,
            digits,
            exponent,
        })
    }

    #[inline]
    pub fn format(&self) -> BandFormat {
        self.format
    }

    /// Digit colors, most significant first.
    #[inline]
    pub fn digits(&self) -> &[ValueColor] {
        &self.digits
    }

    #[inline]
    pub fn exponent(&self) -> ExponentColor {
        self.exponent
    }

    /// Digits folded into an integer mantissa.
    pub fn mantissa(&self) -> i64 {
        self.digits
            .iter()
            .fold(0, |acc, digit| acc * 10 + i64::from(digit.digit()))
    }

    /// Canonical names in band order.
    pub fn names(&self) -> ArrayVec<&'static str, { MAX_DIGIT_BANDS + 1 }> {
        self.digits
            .iter()
            .map(|digit| digit.name())
            .chain(std::iter::once(self.exponent.name()))
            .collect()
    }

    /// Palette colors in band order, for renderers.
    pub fn colors(&self) -> ArrayVec<Color, { MAX_DIGIT_BANDS + 1 }> {
        self.digits
            .iter()
            .map(|&digit| Color::from(digit))
            .chain(std::iter::once(Color::from(self.exponent)))
            .collect()
    }
}
