// ============================================================================
// Codec Errors
// Error types for fixed-point rounding, color lookups and formatting
// ============================================================================

use crate::colors::ColorTable;
use std::fmt;

/// Errors that can occur while encoding, decoding or formatting a resistance.
#[derive(Debug, Clone, PartialEq)]
pub enum CodecError {
    /// Value cannot be expressed in significant digits (zero, negative, NaN,
    /// infinite, or an unusable digit count)
    Domain { value: f64 },
    /// Name is not part of the table's vocabulary
    UnknownColorName { table: ColorTable, name: String },
    /// Numeric code has no color in the table
    CodeOutOfRange { table: ColorTable, code: String },
    /// No configured SI prefix covers the magnitude
    PrefixNotFound { value: f64 },
    /// Wrong number of digit bands for the band format
    InvalidBandCount { min: usize, max: usize, found: usize },
    /// Configuration failed validation
    InvalidConfig(String),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Domain { value } => {
                write!(f, "domain error: {} has no significant-digit form", value)
            },
            CodecError::UnknownColorName { table, name } => {
                write!(f, "unknown {} color name: {:?}", table, name)
            },
            CodecError::CodeOutOfRange { table, code } => {
                write!(f, "code {} is out of range for {} colors", code, table)
            },
            CodecError::PrefixNotFound { value } => {
                write!(f, "couldn't find SI prefix for {}", value)
            },
            CodecError::InvalidBandCount { min, max, found } if min == max => write!(
                f,
                "invalid band count: expected {} digit bands, got {}",
                min, found
            ),
            CodecError::InvalidBandCount { min, max, found } => write!(
                f,
                "invalid band count: expected {} to {} digit bands, got {}",
                min, max, found
            ),
            CodecError::InvalidConfig(reason) => write!(f, "invalid configuration: {}", reason),
        }
    }
}

impl std::error::Error for CodecError {}

/// Result type alias for codec operations
pub type CodecResult<T> = Result<T, CodecError>;
