// ============================================================================
// Resistor Value
// Resistance in ohms and its conversion to and from color bands
// ============================================================================

use super::band_format::{BandFormat, Bands, MAX_DIGIT_BANDS};
use crate::colors::{ColorCode, ExponentColor, ValueColor};
use crate::errors::CodecResult;
use crate::format::display_string;
use crate::numeric::FixedPointValue;
use arrayvec::ArrayVec;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A resistance in ohms, stored as a significant-digit fixed-point value.
///
/// Encoding to bands and decoding from bands are inverses for values that
/// already fit the band format's digit count: 470 Ω survives a three-band
/// round trip, 473 Ω needs four bands.
///
/// # Example
/// ```
/// use resistor_codes::codec::ResistorValue;
/// use resistor_codes::colors::{ExponentColor, ValueColor};
///
/// let r = ResistorValue::from_three_bands("yellow", "violet", "red")?;
/// assert_eq!(r.value(), 4700.0);
/// assert_eq!(r.to_string(), "4.7 kΩ");
/// assert_eq!(
///     r.as_three_bands()?,
///     (ValueColor::Yellow, ValueColor::Violet, ExponentColor::Red)
/// );
/// # Ok::<(), resistor_codes::CodecError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResistorValue {
    fixed: FixedPointValue,
}

impl ResistorValue {
    /// Significant digits kept by [`ResistorValue::from_float`], enough for
    /// the widest band format.
    pub const DEFAULT_PLACES: u32 = BandFormat::FourBand.places();

    // ========================================================================
    // Construction
    // ========================================================================

    #[inline]
    pub const fn new(fixed: FixedPointValue) -> Self {
        Self { fixed }
    }

    /// Round `ohms` to [`Self::DEFAULT_PLACES`] significant digits.
    ///
    /// # Errors
    /// Returns `Domain` for non-positive or non-finite input.
    pub fn from_float(ohms: f64) -> CodecResult<Self> {
        Self::with_places(ohms, Self::DEFAULT_PLACES)
    }

    /// Round `ohms` to `places` significant digits.
    ///
    /// # Errors
    /// Returns `Domain` for non-positive or non-finite input.
    pub fn with_places(ohms: f64, places: u32) -> CodecResult<Self> {
        FixedPointValue::from_float(ohms, places).map(Self::new)
    }

    /// Read a value from digit colors and a multiplier color.
    ///
    /// # Errors
    /// Returns `InvalidBandCount` if `digits` does not match `format`.
    pub fn from_bands(
        format: BandFormat,
        digits: &[ValueColor],
        exponent: ExponentColor,
    ) -> CodecResult<Self> {
        Ok(Self::from(&Bands::new(format, digits, exponent)?))
    }

    /// Read a value from band names; two digit names mean three bands,
    /// three digit names mean four.
    ///
    /// # Errors
    /// Returns `InvalidBandCount` or `UnknownColorName`.
    pub fn from_band_names(digits: &[&str], exponent: &str) -> CodecResult<Self> {
        Ok(Self::from(&Bands::from_names(digits, exponent)?))
    }

    pub fn from_three_bands(first: &str, second: &str, exponent: &str) -> CodecResult<Self> {
        Self::from_band_names(&[first, second], exponent)
    }

    pub fn from_four_bands(
        first: &str,
        second: &str,
        third: &str,
        exponent: &str,
    ) -> CodecResult<Self> {
        Self::from_band_names(&[first, second, third], exponent)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub const fn fixed(self) -> FixedPointValue {
        self.fixed
    }

    /// Resistance in ohms.
    #[inline]
    pub fn value(self) -> f64 {
        self.fixed.as_float()
    }

    // ========================================================================
    // Band Encoding
    // ========================================================================

    /// Encode as bands of the given format.
    ///
    /// The value is re-rounded to the format's digit count; a rounding carry
    /// (99.6 Ω at two digits) lands in the multiplier band.
    ///
    /// # Errors
    /// - `Domain` if the value is not positive
    /// - `CodeOutOfRange` if the exponent has no multiplier color
    pub fn to_bands(self, format: BandFormat) -> CodecResult<Bands> {
        let fixed = FixedPointValue::from_float(self.value(), format.places())?;
        let mantissa = fixed.mantissa();

        let mut digits = ArrayVec::<ValueColor, MAX_DIGIT_BANDS>::new();
        for position in (0..format.places()).rev() {
            let digit = (mantissa / 10i64.pow(position)) % 10;
            digits.push(ValueColor::from_code(digit as i32)?);
        }
        let exponent = ExponentColor::from_code(fixed.exponent())?;

        tracing::debug!(
            ohms = self.value(),
            ?format,
            %fixed,
            "encoded resistor bands"
        );
        Bands::new(format, &digits, exponent)
    }

    pub fn as_three_bands(self) -> CodecResult<(ValueColor, ValueColor, ExponentColor)> {
        let bands = self.to_bands(BandFormat::ThreeBand)?;
        let d = bands.digits();
        Ok((d[0], d[1], bands.exponent()))
    }

    pub fn as_four_bands(
        self,
    ) -> CodecResult<(ValueColor, ValueColor, ValueColor, ExponentColor)> {
        let bands = self.to_bands(BandFormat::FourBand)?;
        let d = bands.digits();
        Ok((d[0], d[1], d[2], bands.exponent()))
    }
}

impl From<&Bands> for ResistorValue {
    fn from(bands: &Bands) -> Self {
        Self::new(FixedPointValue::new(
            bands.mantissa(),
            bands.exponent().code(),
        ))
    }
}

impl fmt::Display for ResistorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&display_string(self.value()))
    }
}
