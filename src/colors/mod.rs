// ============================================================================
// Colors Module
// Band color vocabularies and their numeric codes
// ============================================================================
//
// Three independent tables share the ColorCode capability:
// - ValueColor: digit bands, 0-9
// - ExponentColor: multiplier band, -3..=7
// - ToleranceColor: tolerance band, percentages
//
// Color is the union palette handed to card renderers.

mod traits;

mod exponent;
mod palette;
mod tolerance;
mod value;

pub use exponent::{exponent_color_code, exponent_color_name, ExponentColor};
pub use palette::Color;
pub use tolerance::{tolerance_name, tolerance_percent, ToleranceColor};
pub use traits::{ColorCode, ColorTable};
pub use value::{value_color_code, value_color_name, ValueColor};
