// ============================================================================
// Series Module
// Reference card sets over preferred-number series
// ============================================================================

pub mod card;
pub mod config;

pub use card::{CardSeries, CardSpec};
pub use config::{CardSeriesConfig, E12, E12_EXTRAS, MAX_DECADE, MIN_DECADE};
