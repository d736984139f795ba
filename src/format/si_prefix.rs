// ============================================================================
// SI Prefix Formatting
// Human-readable resistance strings such as "4.7 kΩ"
// ============================================================================

use crate::errors::{CodecError, CodecResult};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

/// Significant digits kept by general number formatting.
pub const GENERAL_DIGITS: u32 = 6;

/// Ohm sign appended to every display string.
pub const OHM: &str = "Ω";

/// A power-of-ten scale with its symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiPrefix {
    pub exponent: i32,
    pub symbol: &'static str,
}

/// Prefixes used for resistor labels, ascending by exponent.
pub const RESISTOR_PREFIXES: &[SiPrefix] = &[
    SiPrefix {
        exponent: 3,
        symbol: "k",
    },
    SiPrefix {
        exponent: 6,
        symbol: "M",
    },
];

/// Scales values by the largest applicable prefix and renders them.
///
/// A prefix applies when `floor(value / 10^exponent) != 0`, so 1000 Ω is
/// already "1 kΩ".
#[derive(Debug, Clone, Copy)]
pub struct SiFormatter {
    prefixes: &'static [SiPrefix],
    unit: &'static str,
}

impl Default for SiFormatter {
    fn default() -> Self {
        Self::new(RESISTOR_PREFIXES, OHM)
    }
}

impl SiFormatter {
    /// `prefixes` must be sorted ascending by exponent.
    pub const fn new(prefixes: &'static [SiPrefix], unit: &'static str) -> Self {
        Self { prefixes, unit }
    }

    /// Scale `value` by the largest prefix that leaves a non-zero integer part.
    ///
    /// # Errors
    /// Returns `PrefixNotFound` when the value is below every prefix.
    pub fn si_prefix(&self, value: f64) -> CodecResult<(f64, &'static str)> {
        self.prefixes
            .iter()
            .rev()
            .map(|prefix| (value / 10f64.powi(prefix.exponent), prefix.symbol))
            .find(|(scaled, _)| scaled.floor() != 0.0)
            .ok_or(CodecError::PrefixNotFound { value })
    }

    /// Render `value` as "{number} {prefix}{unit}", falling back to the
    /// unscaled number when no prefix applies.
    pub fn display_string(&self, value: f64) -> String {
        let (number, prefix) = match self.si_prefix(value) {
            Ok(scaled) => scaled,
            Err(_) => (value, ""),
        };
        format!("{} {}{}", format_general(number), prefix, self.unit)
            .trim_end()
            .to_string()
    }
}

/// Select the largest resistor prefix (k, M) for `value`.
///
/// # Errors
/// Returns `PrefixNotFound` below 1000.
pub fn si_prefix(value: f64) -> CodecResult<(f64, &'static str)> {
    SiFormatter::default().si_prefix(value)
}

/// Display string for a resistance in ohms, e.g. "4.7 kΩ" or "220 Ω".
pub fn display_string(value: f64) -> String {
    SiFormatter::default().display_string(value)
}

/// Shortest general rendering: up to [`GENERAL_DIGITS`] significant digits,
/// trailing zeros and a bare decimal point removed.
pub fn format_general(value: f64) -> String {
    Decimal::from_f64(value)
        .and_then(|d| d.round_sf(GENERAL_DIGITS))
        .map(|d| d.normalize().to_string())
        .unwrap_or_else(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_si_prefix() {
        assert_eq!(si_prefix(4700.0), Ok((4.7, "k")));
        assert_eq!(si_prefix(2_200_000.0), Ok((2.2, "M")));
        assert_eq!(si_prefix(1000.0), Ok((1.0, "k")));
    }

    #[test]
    fn test_si_prefix_not_found() {
        assert_eq!(
            si_prefix(220.0),
            Err(CodecError::PrefixNotFound { value: 220.0 })
        );
        assert!(si_prefix(999.9).is_err());
    }

    #[test]
    fn test_display_string() {
        assert_eq!(display_string(4700.0), "4.7 kΩ");
        assert_eq!(display_string(220.0), "220 Ω");
        assert_eq!(display_string(2_200_000.0), "2.2 MΩ");
        assert_eq!(display_string(1000.0), "1 kΩ");
        assert_eq!(display_string(0.47), "0.47 Ω");
        assert_eq!(display_string(56_000_000.0), "56 MΩ");
    }

    #[test]
    fn test_format_general() {
        assert_eq!(format_general(4.7), "4.7");
        assert_eq!(format_general(1.0), "1");
        assert_eq!(format_general(220.0), "220");
        assert_eq!(format_general(0.05), "0.05");
        assert_eq!(format_general(1.0 / 3.0), "0.333333");
    }

    #[test]
    fn test_custom_formatter() {
        const VOLT_PREFIXES: &[SiPrefix] = &[SiPrefix {
            exponent: 3,
            symbol: "k",
        }];
        let volts = SiFormatter::new(VOLT_PREFIXES, "V");
        assert_eq!(volts.display_string(12_000.0), "12 kV");
        assert_eq!(volts.display_string(5_000_000.0), "5000 kV");

        let bare = SiFormatter::new(RESISTOR_PREFIXES, "");
        assert_eq!(bare.display_string(12.0), "12");
    }
}
