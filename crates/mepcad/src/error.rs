//! Command-level error taxonomy.

use mepcad_adjust::AdjustError;
use mepcad_sizing::SizingError;
use thiserror::Error;

use crate::host::HostError;

/// Errors surfaced by the command layer.
///
/// Escalation (no catalog size large enough) is deliberately *not*
/// here — it is a first-class decision on
/// [`SizingDecision`](crate::SizingDecision), resolved by the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    /// Input rejected before computation (bad dimension, degenerate
    /// geometry, bad table). The operation aborts; the session does not.
    #[error("invalid input: {0}")]
    InputInvalid(String),

    /// The host model is missing something the operation needs
    /// (connectors, readable geometry). No writes may follow.
    #[error("model inconsistent: {0}")]
    ModelInconsistent(String),

    /// A host write or transaction commit failed; the transaction has
    /// been rolled back.
    #[error("host operation failed: {0}")]
    Host(#[from] HostError),

    /// The user cancelled from the picking layer.
    #[error("operation cancelled")]
    Cancelled,

    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<AdjustError> for CommandError {
    fn from(e: AdjustError) -> Self {
        match e {
            AdjustError::ConnectorsNotFound(_) | AdjustError::MismatchedPair => {
                CommandError::ModelInconsistent(e.to_string())
            }
            AdjustError::InvalidLength(_) | AdjustError::DegenerateResult => {
                CommandError::InputInvalid(e.to_string())
            }
        }
    }
}

impl From<SizingError> for CommandError {
    fn from(e: SizingError) -> Self {
        CommandError::InputInvalid(e.to_string())
    }
}

/// Result type for command operations.
pub type Result<T> = std::result::Result<T, CommandError>;
