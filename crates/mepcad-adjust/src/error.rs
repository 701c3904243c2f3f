//! Error types for run adjustment.

use thiserror::Error;

/// Errors that can occur during run length adjustment.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AdjustError {
    /// Host model exposed fewer than two end connectors.
    #[error("connectors not found: expected 2 end connectors, got {0}")]
    ConnectorsNotFound(usize),

    /// Connector pair has two connectors on the same end.
    #[error("connector pair must have one start-side and one end-side connector")]
    MismatchedPair,

    /// Requested length is zero or negative.
    #[error("desired length {0} must be positive")]
    InvalidLength(f64),

    /// Adjustment would collapse the segment onto itself.
    #[error("adjusted segment is degenerate (endpoints coincide)")]
    DegenerateResult,
}

/// Result type for adjustment operations.
pub type Result<T> = std::result::Result<T, AdjustError>;
