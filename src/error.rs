//! Error types for PLA generation
//!
//! Every fallible operation in the crate returns [`GeneratorError`], so callers can
//! match on the failure instead of inspecting strings.

use std::fmt;
use std::io;

/// The error type for generating and writing PLA truth tables
#[derive(Debug)]
pub enum GeneratorError {
    /// Invalid input provided to a function
    ///
    /// Raised for a zero input width, an empty weight vector, a width too large to
    /// enumerate, or weight text that does not parse.
    InvalidInput {
        /// Description of what was invalid
        message: String,
    },

    /// The weight vector length does not match the requested input width
    DimensionMismatch {
        /// The requested input width `n`
        expected: usize,
        /// The length of the weight vector supplied
        actual: usize,
    },

    /// A configuration file could not be read or parsed
    Config {
        /// Description of the configuration problem
        message: String,
    },

    /// IO error wrapper
    ///
    /// Wraps standard IO errors that occur while writing the table.
    Io(io::Error),
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorError::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)
            }
            GeneratorError::DimensionMismatch { expected, actual } => write!(
                f,
                "Weight vector length ({}) doesn't match input count ({})",
                actual, expected
            ),
            GeneratorError::Config { message } => {
                write!(f, "Configuration error: {}", message)
            }
            GeneratorError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for GeneratorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeneratorError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GeneratorError {
    fn from(err: io::Error) -> Self {
        GeneratorError::Io(err)
    }
}

impl From<GeneratorError> for io::Error {
    fn from(err: GeneratorError) -> Self {
        match err {
            // Already an IO error, return it directly
            GeneratorError::Io(e) => e,
            GeneratorError::Config { .. } => io::Error::new(io::ErrorKind::InvalidData, err),
            GeneratorError::InvalidInput { .. } | GeneratorError::DimensionMismatch { .. } => {
                io::Error::new(io::ErrorKind::InvalidInput, err)
            }
        }
    }
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, GeneratorError>;

impl GeneratorError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        GeneratorError::InvalidInput {
            message: message.into(),
        }
    }
}
