// ============================================================================
// Band Encoding Entry Points
// Number <-> color tuple conversions used by card renderers
// ============================================================================

use super::band_format::{BandFormat, Bands};
use super::resistor::ResistorValue;
use crate::colors::{ExponentColor, ValueColor};
use crate::errors::CodecResult;

/// Encode ohms as two digit colors and a multiplier, rounding to two
/// significant digits.
///
/// # Errors
/// `Domain` for non-positive input, `CodeOutOfRange` outside 0.01 Ω–990 MΩ.
pub fn encode_3band(ohms: f64) -> CodecResult<(ValueColor, ValueColor, ExponentColor)> {
    ResistorValue::with_places(ohms, BandFormat::ThreeBand.places())?.as_three_bands()
}

/// Encode ohms as three digit colors and a multiplier, rounding to three
/// significant digits.
///
/// # Errors
/// `Domain` for non-positive input, `CodeOutOfRange` outside 0.1 Ω–9.99 GΩ.
pub fn encode_4band(
    ohms: f64,
) -> CodecResult<(ValueColor, ValueColor, ValueColor, ExponentColor)> {
    ResistorValue::with_places(ohms, BandFormat::FourBand.places())?.as_four_bands()
}

/// Encode ohms in any band format.
pub fn encode(ohms: f64, format: BandFormat) -> CodecResult<Bands> {
    ResistorValue::with_places(ohms, format.places())?.to_bands(format)
}

/// Decode digit color names and a multiplier color name to ohms.
///
/// Two digit names decode a three-band code, three decode a four-band code.
///
/// # Errors
/// `InvalidBandCount` or `UnknownColorName`.
pub fn decode(value_colors: &[&str], exponent_color: &str) -> CodecResult<f64> {
    let value = ResistorValue::from_band_names(value_colors, exponent_color)?;
    tracing::debug!(?value_colors, exponent_color, ohms = value.value(), "decoded resistor bands");
    Ok(value.value())
}
