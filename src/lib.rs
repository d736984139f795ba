// ============================================================================
// Resistor Codes Library
// Resistance values <-> color band codes, with SI-prefixed display strings
// ============================================================================

//! # Resistor Codes
//!
//! Encodes resistances as the color bands printed on through-hole resistors
//! and decodes band colors back to ohms.
//!
//! ## Features
//!
//! - **Significant-digit fixed point**: values are rounded once to the digit
//!   count of the band format (2 or 3), carrying into the exponent on overflow
//! - **Static color tables** for digit, multiplier and tolerance bands, with
//!   "grey" accepted everywhere "gray" is
//! - **SI display strings** such as "4.7 kΩ" and "220 Ω"
//! - **Card series** generation over E12 decades for printable reference cards
//!
//! ## Example
//!
//! ```rust
//! use resistor_codes::prelude::*;
//!
//! // Number -> bands
//! let (first, second, multiplier) = encode_3band(4700.0)?;
//! assert_eq!((first, second, multiplier), (ValueColor::Yellow, ValueColor::Violet, ExponentColor::Red));
//!
//! // Bands -> number -> display string
//! let ohms = decode(&["brown", "red", "orange"], "orange")?;
//! assert_eq!(display_string(ohms), "123 kΩ");
//!
//! // Tolerance band
//! assert_eq!(tolerance_name(5.0)?, "gold");
//! # Ok::<(), CodecError>(())
//! ```

pub mod codec;
pub mod colors;
pub mod errors;
pub mod format;
pub mod numeric;
pub mod series;

pub use errors::{CodecError, CodecResult};

// Re-exports for convenience
pub mod prelude {
    pub use crate::codec::{
        decode, encode, encode_3band, encode_4band, BandFormat, Bands, ResistorValue,
    };
    pub use crate::colors::{
        exponent_color_code, exponent_color_name, tolerance_name, tolerance_percent,
        value_color_code, value_color_name, Color, ColorCode, ColorTable, ExponentColor,
        ToleranceColor, ValueColor,
    };
    pub use crate::errors::{CodecError, CodecResult};
    pub use crate::format::{display_string, si_prefix, SiFormatter};
    pub use crate::numeric::FixedPointValue;
    pub use crate::series::{CardSeries, CardSeriesConfig, CardSpec};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_end_to_end_three_band() {
        for ohms in [470.0, 1000.0, 22.0, 0.47, 820_000.0] {
            let (first, second, multiplier) = encode_3band(ohms).unwrap();
            let decoded = decode(&[first.name(), second.name()], multiplier.name()).unwrap();
            assert_eq!(decoded, ohms);
        }
    }

    #[test]
    fn test_end_to_end_four_band() {
        for ohms in [123_000.0, 4990.0, 0.1, 1000.0] {
            let (a, b, c, multiplier) = encode_4band(ohms).unwrap();
            let decoded = decode(&[a.name(), b.name(), c.name()], multiplier.name()).unwrap();
            assert_eq!(decoded, ohms);
        }
    }

    #[test]
    fn test_decode_then_display() {
        let ohms = decode(&["yellow", "violet"], "red").unwrap();
        assert_eq!(display_string(ohms), "4.7 kΩ");

        let ohms = decode(&["red", "red"], "brown").unwrap();
        assert_eq!(display_string(ohms), "220 Ω");

        let ohms = decode(&["red", "red"], "green").unwrap();
        assert_eq!(display_string(ohms), "2.2 MΩ");
    }

    #[test]
    fn test_errors_surface_one_kind() {
        assert_eq!(
            FixedPointValue::from_float(0.0, 2),
            Err(CodecError::Domain { value: 0.0 })
        );
        assert!(matches!(
            decode(&["yellow", "violett"], "red"),
            Err(CodecError::UnknownColorName { .. })
        ));
        assert!(matches!(
            si_prefix(220.0),
            Err(CodecError::PrefixNotFound { .. })
        ));
    }

    #[test]
    fn test_tolerance_attaches_independently() {
        let card = CardSpec::new(0, ResistorValue::from_float(10_000.0).unwrap(), 10.0, 0.5)
            .unwrap();
        assert_eq!(card.three_band_tolerance.name(), "silver");
        assert_eq!(card.four_band_tolerance.name(), "green");
        assert_eq!(tolerance_percent(card.four_band_tolerance.name()).unwrap(), 0.5);
    }

    #[test]
    fn test_tables_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || {
                    let ohms = 1000.0 * f64::from(i + 1);
                    display_string(decode(&["brown", "black"], "red").unwrap() * f64::from(i + 1))
                        == display_string(ohms)
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_card() {
        let cards = CardSeries::generate(&CardSeriesConfig::e12(3, 3)).unwrap();
        let json = serde_json::to_string(&cards[8]).unwrap();
        assert!(json.contains("\"yellow\""));
        let back: CardSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cards[8]);
    }
}
