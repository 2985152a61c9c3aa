//! Error types for reordering, grid fills, and the command-line driver

use std::fmt;

/// Main error type for all spectrafill operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpectraError {
    /// A required argument is missing or outside its valid range
    ///
    /// Raised before any computation starts, so no partial work is performed.
    InvalidArgument {
        /// Name of the offending argument
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A named variant (strategy, extractor, palette) was not recognised
    UnknownVariant {
        /// What kind of thing was being looked up
        kind: &'static str,
        /// The name that failed to resolve
        name: String,
        /// Accepted names
        expected: &'static [&'static str],
    },
}

impl fmt::Display for SpectraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid argument '{parameter}' = '{value}': {reason}")
            }
            Self::UnknownVariant {
                kind,
                name,
                expected,
            } => {
                write!(
                    f,
                    "Unknown {kind} '{name}' (expected one of: {})",
                    expected.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for SpectraError {}

/// Convenience type alias for spectrafill results
pub type Result<T> = std::result::Result<T, SpectraError>;

/// Create an invalid argument error
pub fn invalid_argument(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SpectraError {
    SpectraError::InvalidArgument {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an unknown variant error
pub fn unknown_variant(
    kind: &'static str,
    name: &str,
    expected: &'static [&'static str],
) -> SpectraError {
    SpectraError::UnknownVariant {
        kind,
        name: name.to_string(),
        expected,
    }
}
