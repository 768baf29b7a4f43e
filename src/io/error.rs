//! Error types for mosaic configuration and composition

use std::fmt;

/// Main error type for all mosaic operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MosaicError {
    /// A configuration parameter failed validation before any work started
    InvalidConfiguration {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// No candidate tiles were supplied, so no cell can be matched
    EmptyTileSet,

    /// An image or region has no pixels to work with
    ///
    /// Occurs when:
    /// - The target image has zero width or height
    /// - A tile image has zero width or height
    /// - An average color is requested over an empty region
    DegenerateInput {
        /// Description of what's wrong with the input
        reason: String,
    },

    /// Internal computation produced an inconsistent result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration {
                parameter,
                value,
                reason,
            } => {
                write!(
                    f,
                    "Invalid configuration '{parameter}' = '{value}': {reason}"
                )
            }
            Self::EmptyTileSet => {
                write!(f, "No tile images supplied; at least one tile is required")
            }
            Self::DegenerateInput { reason } => {
                write!(f, "Degenerate input: {reason}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for MosaicError {}

impl From<ndarray::ShapeError> for MosaicError {
    fn from(err: ndarray::ShapeError) -> Self {
        computation_error("grid shape", &err)
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

/// Create an invalid configuration error
pub fn invalid_configuration(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidConfiguration {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a degenerate input error
pub fn degenerate_input(reason: &impl ToString) -> MosaicError {
    MosaicError::DegenerateInput {
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> MosaicError {
    MosaicError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
