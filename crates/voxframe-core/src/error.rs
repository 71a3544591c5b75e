//! Error types for Voxframe.

use thiserror::Error;

/// Crate-wide error type.
///
/// The hot-path operations on `Sqt` and `Frame` never fail; only the checked
/// constructors report errors through this type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid data error
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Out of bounds access
    #[error("Out of bounds: {0}")]
    OutOfBounds(String),

    /// Transform that cannot be inverted
    #[error("Degenerate transform: {0}")]
    DegenerateTransform(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
