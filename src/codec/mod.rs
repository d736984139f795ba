// ============================================================================
// Codec Module
// Resistance values <-> color band sequences
// ============================================================================
//
// Three- and four-band codes share one routine parameterized by BandFormat:
// round to format.places() significant digits, split the mantissa into digit
// colors, map the exponent to a multiplier color. Decoding folds the digits
// back into a mantissa.

mod band_format;
mod encoding;
mod resistor;

pub use band_format::{BandFormat, Bands, MAX_DIGIT_BANDS};
pub use encoding::{decode, encode, encode_3band, encode_4band};
pub use resistor::ResistorValue;
