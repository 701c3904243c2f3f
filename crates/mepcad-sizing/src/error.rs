//! Error types for size selection.

use thiserror::Error;

/// Errors that can occur during size selection.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SizingError {
    /// Size table has no entries.
    #[error("size table is empty")]
    EmptyTable,

    /// Size table entries are not strictly ascending.
    #[error("size table is not strictly ascending at index {0}")]
    NotAscending(usize),

    /// Size table contains a non-positive entry.
    #[error("size table entry {0} is not positive")]
    NonPositiveEntry(usize),

    /// Required dimension is zero or negative.
    #[error("required dimension {0} must be positive")]
    InvalidDimension(f64),
}

/// Result type for sizing operations.
pub type Result<T> = std::result::Result<T, SizingError>;
