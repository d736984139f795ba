// ============================================================================
// Numeric Module
// Significant-digit fixed-point values for band encoding
// ============================================================================
//
// This module provides:
// - FixedPointValue: (mantissa, exponent) pair rounded to N significant digits
//
// Design principles:
// - Rounding is half away from zero everywhere (f64::round)
// - A rounding carry (99.6 -> 100 at 2 places) moves into the exponent
// - Construction returns Result (no panics)

mod fixed_point;

pub use fixed_point::{FixedPointValue, MAX_PLACES};
