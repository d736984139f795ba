// ============================================================================
// Format Module
// SI-prefixed display strings for resistance values
// ============================================================================

mod si_prefix;

pub use si_prefix::{
    display_string, format_general, si_prefix, SiFormatter, SiPrefix, GENERAL_DIGITS, OHM,
    RESISTOR_PREFIXES,
};
