//! Error types for color operations.
//!
//! Most of the engine fails soft: malformed channels are coerced instead of
//! rejected. The variants here cover the few places where that is not
//! possible.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in color operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// An operation was called on a color that does not satisfy its
    /// precondition.
    #[error("precondition violated in {operation}: {reason}")]
    Precondition {
        /// Name of the operation that was called.
        operation: &'static str,
        /// What the color failed to satisfy.
        reason: String,
    },

    /// A strict lookup did not find the named color.
    #[error("unknown color name: {0}")]
    UnknownName(String),

    /// The text does not name a serialization notation.
    #[error("unknown notation: {0}")]
    UnknownNotation(String),

    /// The text does not name a blend mode.
    #[error("unknown blend mode: {0}")]
    UnknownBlendMode(String),

    /// The text does not name a filter.
    #[error("unknown filter: {0}")]
    UnknownFilter(String),
}
