// ============================================================================
// Card Series Configuration
// Which values, decades and tolerance bands a card set covers
// ============================================================================

use crate::codec::BandFormat;
use crate::colors::{tolerance_name, ExponentColor};
use crate::errors::{CodecError, CodecResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// E12 preferred number series, one decade.
pub const E12: [f64; 12] = [1.0, 1.2, 1.5, 1.8, 2.2, 2.7, 3.3, 3.9, 4.7, 5.6, 6.8, 8.2];

/// Common values outside E12 that still get cards.
pub const E12_EXTRAS: [f64; 2] = [3.0, 5.1];

/// Lowest decade with a multiplier color in the three-band format.
pub const MIN_DECADE: i32 =
    ExponentColor::MIN_EXPONENT + BandFormat::ThreeBand.places() as i32 - 1;

/// Highest decade with a multiplier color in the four-band format.
pub const MAX_DECADE: i32 =
    ExponentColor::MAX_EXPONENT + BandFormat::FourBand.places() as i32 - 1;

/// Configuration for generating a series of resistor cards
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CardSeriesConfig {
    /// Base values within one decade (order does not matter)
    pub values: Vec<f64>,

    /// First decade exponent: cards start at `value × 10^min_exponent`
    pub min_exponent: i32,

    /// Last decade exponent (inclusive)
    pub max_exponent: i32,

    /// Tolerance percent printed with the three-band code
    pub three_band_tolerance: f64,

    /// Tolerance percent printed with the four-band code
    pub four_band_tolerance: f64,
}

impl CardSeriesConfig {
    /// Create a configuration with gold (5 %) and brown (1 %) tolerances
    pub fn new(values: Vec<f64>, min_exponent: i32, max_exponent: i32) -> Self {
        Self {
            values,
            min_exponent,
            max_exponent,
            three_band_tolerance: 5.0,
            four_band_tolerance: 1.0,
        }
    }

    /// Builder method: Set the three-band tolerance percent
    pub fn with_three_band_tolerance(mut self, percent: f64) -> Self {
        self.three_band_tolerance = percent;
        self
    }

    /// Builder method: Set the four-band tolerance percent
    pub fn with_four_band_tolerance(mut self, percent: f64) -> Self {
        self.four_band_tolerance = percent;
        self
    }

    /// Builder method: Restrict to a decade range
    pub fn with_exponents(mut self, min_exponent: i32, max_exponent: i32) -> Self {
        self.min_exponent = min_exponent;
        self.max_exponent = max_exponent;
        self
    }

    /// Number of cards the configuration produces
    pub fn card_count(&self) -> usize {
        let decades = i64::from(self.max_exponent) - i64::from(self.min_exponent) + 1;
        usize::try_from(decades.max(0))
            .ok()
            .and_then(|decades| decades.checked_mul(self.values.len()))
            .unwrap_or(usize::MAX)
    }

    /// Validate the configuration
    pub fn validate(&self) -> CodecResult<()> {
        if self.values.is_empty() {
            return Err(invalid("values cannot be empty"));
        }

        if self
            .values
            .iter()
            .any(|value| !value.is_finite() || *value <= 0.0)
        {
            return Err(invalid("values must be positive and finite"));
        }

        if self.min_exponent > self.max_exponent {
            return Err(invalid("min exponent cannot exceed max exponent"));
        }

        if self.min_exponent < MIN_DECADE || self.max_exponent > MAX_DECADE {
            return Err(CodecError::InvalidConfig(format!(
                "decades must lie within {}..={}",
                MIN_DECADE, MAX_DECADE
            )));
        }

        if tolerance_name(self.three_band_tolerance).is_err() {
            return Err(CodecError::InvalidConfig(format!(
                "no tolerance color for {}%",
                self.three_band_tolerance
            )));
        }

        if tolerance_name(self.four_band_tolerance).is_err() {
            return Err(CodecError::InvalidConfig(format!(
                "no tolerance color for {}%",
                self.four_band_tolerance
            )));
        }

        Ok(())
    }
}

fn invalid(reason: &str) -> CodecError {
    CodecError::InvalidConfig(reason.to_string())
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl CardSeriesConfig {
    /// Standard hobbyist kit
    /// - E12 plus 3.0 and 5.1
    /// - 0.1 Ω up to 8.2 MΩ (decades -1..=6)
    /// - 5 % three-band, 1 % four-band
    pub fn e12_standard() -> Self {
        let values = E12.iter().chain(E12_EXTRAS.iter()).copied().collect();
        Self::new(values, -1, 6)
    }

    /// Plain E12 over a decade range
    pub fn e12(min_exponent: i32, max_exponent: i32) -> Self {
        Self::new(E12.to_vec(), min_exponent, max_exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = CardSeriesConfig::new(vec![4.7], 2, 3);
        assert_eq!(config.three_band_tolerance, 5.0);
        assert_eq!(config.four_band_tolerance, 1.0);
        assert_eq!(config.card_count(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = CardSeriesConfig::e12(0, 0)
            .with_three_band_tolerance(10.0)
            .with_four_band_tolerance(0.5)
            .with_exponents(1, 2);

        assert_eq!(config.three_band_tolerance, 10.0);
        assert_eq!(config.four_band_tolerance, 0.5);
        assert_eq!(config.card_count(), 24);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        assert!(CardSeriesConfig::new(vec![], 0, 1).validate().is_err());
        assert!(CardSeriesConfig::new(vec![-1.0], 0, 1).validate().is_err());
        assert!(CardSeriesConfig::new(vec![f64::NAN], 0, 1).validate().is_err());
        assert!(CardSeriesConfig::new(vec![1.0], 2, 1).validate().is_err());

        let bad_tolerance = CardSeriesConfig::new(vec![1.0], 0, 1).with_three_band_tolerance(3.0);
        assert_eq!(
            bad_tolerance.validate(),
            Err(CodecError::InvalidConfig(
                "no tolerance color for 3%".to_string()
            ))
        );
    }

    #[test]
    fn test_decade_window() {
        assert_eq!((MIN_DECADE, MAX_DECADE), (-2, 9));
        assert!(CardSeriesConfig::e12(MIN_DECADE, MAX_DECADE).validate().is_ok());

        let expected = Err(CodecError::InvalidConfig(
            "decades must lie within -2..=9".to_string(),
        ));
        assert_eq!(CardSeriesConfig::new(vec![1.0], i32::MIN, 0).validate(), expected);
        assert_eq!(CardSeriesConfig::new(vec![1.0], 0, i32::MAX).validate(), expected);
        assert_eq!(
            CardSeriesConfig::e12(-1_000_000_000, 1_000_000_000).validate(),
            expected
        );
        assert_eq!(CardSeriesConfig::e12(-3, 0).validate(), expected);
        assert_eq!(CardSeriesConfig::e12(0, 10).validate(), expected);
    }

    #[test]
    fn test_card_count_extremes() {
        let widest = CardSeriesConfig::new(vec![1.0], i32::MIN, i32::MAX);
        assert_eq!(widest.card_count() as u64, 1 << 32);
        assert_eq!(CardSeriesConfig::e12(i32::MIN, i32::MAX).card_count() as u64, 12 << 32);

        let inverted = CardSeriesConfig::new(vec![1.0], i32::MAX, i32::MIN);
        assert_eq!(inverted.card_count(), 0);
    }

    #[test]
    fn test_preset_configs() {
        let standard = CardSeriesConfig::e12_standard();
        assert_eq!(standard.values.len(), 14);
        assert_eq!((standard.min_exponent, standard.max_exponent), (-1, 6));
        assert_eq!(standard.card_count(), 112);
        assert!(standard.validate().is_ok());
    }
}
