//! Error types for range notation parsing

use thiserror::Error;

/// A single rejected token of an id list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    /// Token is neither `N` nor `N-M`
    #[error("malformed token '{token}'")]
    Malformed {
        /// The trimmed token text
        token: String,
    },

    /// Range whose start is greater than its end
    #[error("inverted range {start}-{end}")]
    InvertedRange {
        /// Range start digits
        start: String,
        /// Range end digits
        end: String,
    },
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, NotationError>;
