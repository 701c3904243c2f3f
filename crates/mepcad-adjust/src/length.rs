//! The length-adjustment algorithm.

use mepcad_math::{Point3, Segment, Vec3, LENGTH_EPS};

use crate::connector::{Connector, ConnectorId, ConnectorPair};
use crate::error::{AdjustError, Result};

/// How the host categorizes the part being adjusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    /// Ordinary run (pipe, duct, conduit).
    Standard,
    /// Fabrication-style part with host-native length behavior.
    Fabrication,
}

/// A computed adjustment, ready for the caller to apply.
///
/// Consumed immediately by attachment propagation and then discarded;
/// it has no persistent identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustmentResult {
    /// The run's new centerline.
    pub new_segment: Segment,
    /// Vector added to the moved endpoint.
    pub displacement: Vec3,
    /// Which connector end was moved.
    pub moved: ConnectorId,
}

/// Outcome of [`adjust`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Adjustment {
    /// The run is already at the target length; nothing to write.
    NoOp,
    /// New geometry and the displacement applied to the moving end.
    Adjusted(AdjustmentResult),
}

/// Pick the connector to move for this adjustment.
///
/// The pinned end is the one nearer the user's reference point; the
/// farther connector moves. Exception: a fabrication part with both
/// connectors unattached moves the *nearer* connector instead —
/// free-floating parts are conventionally grown away from the click.
pub fn moving_connector<'a>(
    pair: &'a ConnectorPair,
    reference: &Point3,
    kind: PartKind,
) -> &'a Connector {
    if kind == PartKind::Fabrication && pair.both_unattached() {
        pair.nearest_to(reference)
    } else {
        pair.farthest_from(reference)
    }
}

/// Compute new run geometry reaching `desired_length`.
///
/// Pure computation: no host-model writes happen here. The caller
/// applies `new_segment` inside a transaction and then propagates
/// `displacement` to attached elements.
///
/// Returns [`Adjustment::NoOp`] when the current length is already
/// within `LENGTH_EPS` of the target; re-running an adjustment with
/// the same target is therefore idempotent.
pub fn adjust(
    segment: &Segment,
    connectors: &ConnectorPair,
    desired_length: f64,
    reference: &Point3,
    kind: PartKind,
) -> Result<Adjustment> {
    if desired_length <= 0.0 {
        return Err(AdjustError::InvalidLength(desired_length));
    }

    let delta = desired_length - segment.length();
    if delta.abs() < LENGTH_EPS {
        return Ok(Adjustment::NoOp);
    }

    let moved = moving_connector(connectors, reference, kind).id;
    let direction = segment.direction().into_inner();

    // Lengthening pushes the moved endpoint outward along the run
    // axis, shortening pulls it inward; either way the displacement is
    // exactly the vector added to that endpoint.
    let (new_segment, displacement) = match moved {
        ConnectorId::Start => {
            let displacement = -delta * direction;
            let new_start = segment.start + displacement;
            let new_segment = Segment::new(new_start, segment.end)
                .map_err(|_| AdjustError::DegenerateResult)?;
            (new_segment, displacement)
        }
        ConnectorId::End => {
            let displacement = delta * direction;
            let new_end = segment.end + displacement;
            let new_segment = Segment::new(segment.start, new_end)
                .map_err(|_| AdjustError::DegenerateResult)?;
            (new_segment, displacement)
        }
    };

    Ok(Adjustment::Adjusted(AdjustmentResult {
        new_segment,
        displacement,
        moved,
    }))
}
