// ============================================================================
// Resistor Cards
// Band data for one reference card per value, ready for a renderer
// ============================================================================

use super::config::CardSeriesConfig;
use crate::codec::{BandFormat, Bands, ResistorValue, MAX_DIGIT_BANDS};
use crate::colors::{Color, ColorCode, ToleranceColor};
use crate::errors::CodecResult;
use crate::format::format_general;
use arrayvec::ArrayVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything a renderer needs to draw one card: both band codes with their
/// tolerance bands and the printed value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CardSpec {
    pub index: usize,
    pub value: ResistorValue,
    pub three_band: Bands,
    pub three_band_tolerance: ToleranceColor,
    pub four_band: Bands,
    pub four_band_tolerance: ToleranceColor,
    pub display: String,
}

impl CardSpec {
    /// Build the card for `value`.
    ///
    /// # Errors
    /// `CodeOutOfRange` if the value has no multiplier color in either format
    /// or a tolerance percent has no color.
    pub fn new(
        index: usize,
        value: ResistorValue,
        three_band_tolerance: f64,
        four_band_tolerance: f64,
    ) -> CodecResult<Self> {
        Ok(Self {
            index,
            value,
            three_band: value.to_bands(BandFormat::ThreeBand)?,
            three_band_tolerance: ToleranceColor::from_code(three_band_tolerance)?,
            four_band: value.to_bands(BandFormat::FourBand)?,
            four_band_tolerance: ToleranceColor::from_code(four_band_tolerance)?,
            display: value.to_string(),
        })
    }

    /// Caption, e.g. "4.7 kΩ, 5%, 1%".
    pub fn label(&self) -> String {
        format!(
            "{}, {}%, {}%",
            self.display,
            format_general(self.three_band_tolerance.percent()),
            format_general(self.four_band_tolerance.percent())
        )
    }

    /// Image file name without extension, sortable by index.
    pub fn file_stem(&self) -> String {
        format!("{:03}-{}", self.index, self.display)
    }

    /// Three-band code plus tolerance, in drawing order.
    pub fn three_band_colors(&self) -> ArrayVec<Color, { MAX_DIGIT_BANDS + 2 }> {
        with_tolerance(&self.three_band, self.three_band_tolerance)
    }

    /// Four-band code plus tolerance, in drawing order.
    pub fn four_band_colors(&self) -> ArrayVec<Color, { MAX_DIGIT_BANDS + 2 }> {
        with_tolerance(&self.four_band, self.four_band_tolerance)
    }
}

fn with_tolerance(
    bands: &Bands,
    tolerance: ToleranceColor,
) -> ArrayVec<Color, { MAX_DIGIT_BANDS + 2 }> {
    bands
        .colors()
        .into_iter()
        .chain(std::iter::once(Color::from(tolerance)))
        .collect()
}

/// Generates the card set described by a [`CardSeriesConfig`].
pub struct CardSeries;

impl CardSeries {
    /// One card per decade and base value, decades ascending and values
    /// sorted within each decade.
    ///
    /// # Errors
    /// `InvalidConfig` if validation fails, otherwise the first encoding error.
    pub fn generate(config: &CardSeriesConfig) -> CodecResult<Vec<CardSpec>> {
        config.validate()?;

        let mut values = config.values.clone();
        values.sort_by(f64::total_cmp);

        let mut cards = Vec::with_capacity(config.card_count());
        for exponent in config.min_exponent..=config.max_exponent {
            for base in &values {
                let value = ResistorValue::from_float(base * 10f64.powi(exponent))?;
                let card = CardSpec::new(
                    cards.len(),
                    value,
                    config.three_band_tolerance,
                    config.four_band_tolerance,
                )?;
                tracing::trace!(index = card.index, display = %card.display, "generated card");
                cards.push(card);
            }
        }

        tracing::debug!(cards = cards.len(), "generated card series");
        Ok(cards)
    }
}
