//! Error types for landmark validation.

use thiserror::Error;

/// Result type for landmark operations.
pub type Result<T> = std::result::Result<T, LandmarkError>;

/// Errors raised when raw landmark data cannot form a `Hand`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LandmarkError {
    /// The tracker produced the wrong number of joints.
    #[error("expected {expected} landmarks per hand, got {actual}")]
    WrongPointCount { expected: usize, actual: usize },

    /// A coordinate was NaN or infinite.
    #[error("landmark {index} has a non-finite coordinate")]
    NonFinite { index: usize },
}
