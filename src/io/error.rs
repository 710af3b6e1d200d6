//! Error types for the fallible surface around the lattice
//!
//! Lattice operations themselves never fail; these errors come from parsing
//! scripts, validating parameters and writing output.

use std::fmt;
use std::path::PathBuf;

/// Main error type for script, configuration and export operations
#[derive(Debug)]
pub enum LatticeError {
    /// Direction label is not one of `N`, `NE`, `SE`, `S`, `SW`, `NW`
    InvalidDirection {
        /// The label that failed to parse
        label: String,
    },

    /// Script token could not be turned into a step
    InvalidStep {
        /// Zero-based position of the token in the script
        index: usize,
        /// The offending token
        token: String,
        /// Explanation of what was expected
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Nothing to export because the lattice holds no tiles
    EmptyLattice,

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Log subscriber could not be installed
    Logging {
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDirection { label } => {
                write!(
                    f,
                    "Invalid direction '{label}' (expected one of N, NE, SE, S, SW, NW)"
                )
            }
            Self::InvalidStep {
                index,
                token,
                reason,
            } => {
                write!(f, "Invalid step {index} '{token}': {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::EmptyLattice => write!(f, "Lattice has no tiles to export"),
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Logging { reason } => write!(f, "Failed to initialise logging: {reason}"),
        }
    }
}

impl std::error::Error for LatticeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for lattice results
pub type Result<T> = std::result::Result<T, LatticeError>;

impl From<image::ImageError> for LatticeError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for LatticeError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> LatticeError {
    LatticeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid step error
pub fn invalid_step(index: usize, token: &str, reason: &impl ToString) -> LatticeError {
    LatticeError::InvalidStep {
        index,
        token: token.to_string(),
        reason: reason.to_string(),
    }
}
