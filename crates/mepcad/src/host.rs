//! The host-document seam.
//!
//! The core never owns host state: reads are unsynchronized snapshots
//! valid for one command invocation, and every write happens through
//! these traits inside a scoped transaction. The host modeling
//! application implements them; tests use in-memory mocks.

use mepcad_adjust::{AttachmentHost, Connector, ConnectorId, PartKind};
use mepcad_math::Segment;
use thiserror::Error;

use crate::error::{CommandError, Result};

/// Opaque host identity of a linear run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunId(pub u64);

/// A failed host-level operation (read, write, or commit).
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{0}")]
pub struct HostError(pub String);

impl HostError {
    /// Create a host error from any message.
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Read/query surface of the host document.
pub trait HostRead {
    /// Current centerline of `run`.
    fn segment_of(&self, run: RunId) -> std::result::Result<Segment, HostError>;

    /// End connectors of `run`, as the host reports them. May return
    /// fewer than two; callers validate with
    /// [`ConnectorPair::from_slice`](mepcad_adjust::ConnectorPair::from_slice).
    fn connectors_of(&self, run: RunId) -> std::result::Result<Vec<Connector>, HostError>;

    /// How the host categorizes `run`.
    fn part_kind_of(&self, run: RunId) -> PartKind;
}

/// Write/command surface of the host document.
///
/// Includes transaction control: every logical operation wraps its
/// writes in exactly one [`in_transaction`] scope.
pub trait HostWrite: AttachmentHost {
    /// Open a transaction scope.
    fn begin_transaction(&mut self);

    /// Commit the open transaction. A failed commit must leave the
    /// document as if the transaction never ran.
    fn commit_transaction(&mut self) -> std::result::Result<(), HostError>;

    /// Discard every write made since [`HostWrite::begin_transaction`].
    fn rollback_transaction(&mut self);

    /// Replace the run's centerline geometry.
    fn replace_segment(
        &mut self,
        run: RunId,
        segment: Segment,
    ) -> std::result::Result<(), HostError>;

    /// Fabrication fast path: set the run's length parameter directly.
    /// Returns false when the part has no such parameter.
    fn try_set_length_param(&mut self, run: RunId, length: f64) -> bool;

    /// Fabrication fast path: ask the host element to adjust the named
    /// end by `delta` with the given orientation flag. Returns false
    /// when the host cannot perform the adjustment.
    fn try_adjust_end(&mut self, run: RunId, end: ConnectorId, delta: f64, flip: bool) -> bool;
}

/// Full host surface a command runs against.
pub trait HostDocument: HostRead + HostWrite {}

impl<T: HostRead + HostWrite> HostDocument for T {}

/// Run `f` inside a transaction scope on `doc`.
///
/// Commits only when `f` returns `Ok`; any error rolls back every
/// write made inside the scope, so partial writes never survive.
/// Cancellation from the picking layer unwinds through here the same
/// way.
pub fn in_transaction<D, T>(doc: &mut D, f: impl FnOnce(&mut D) -> Result<T>) -> Result<T>
where
    D: HostWrite + ?Sized,
{
    doc.begin_transaction();
    match f(doc) {
        Ok(value) => {
            doc.commit_transaction().map_err(CommandError::Host)?;
            Ok(value)
        }
        Err(e) => {
            doc.rollback_transaction();
            Err(e)
        }
    }
}
