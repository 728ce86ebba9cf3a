//! Error types for the tristimulus library

use thiserror::Error;

/// Result type alias for tristimulus operations
pub type Result<T> = std::result::Result<T, ConversionError>;

/// Error types for the fallible conversion surface
///
/// The core conversion functions never fail; these errors are produced only
/// by the opt-in [`checked`](crate::checked) layer and by hex parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// A conversion produced a non-finite component
    ///
    /// Raised by the checked layer when a result contains NaN or an
    /// infinity, e.g. Hunter Lab at the Y=0 black singularity.
    #[error("non-finite {space} result: {value:?}")]
    NonFinite {
        space: &'static str,
        value: [f64; 3],
    },

    /// A hex color string could not be parsed
    #[error("invalid hex color: {message}")]
    InvalidHex { message: String },
}

impl ConversionError {
    /// Create a non-finite result error for the named color space
    pub fn non_finite(space: &'static str, value: [f64; 3]) -> Self {
        Self::NonFinite { space, value }
    }

    /// Create a hex parsing error with context
    pub fn invalid_hex(message: impl Into<String>) -> Self {
        Self::InvalidHex {
            message: message.into(),
        }
    }
}
