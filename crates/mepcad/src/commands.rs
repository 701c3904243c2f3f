//! Command orchestration over the host-document seam.
//!
//! Each command reads a fresh snapshot, runs the pure kernels, and
//! performs all of its writes inside one transaction scope. Aborting
//! at any point leaves the model unchanged; re-running after a
//! reported failure is safe.

use mepcad_adjust::{
    adjust, moving_connector, propagate, Adjustment, AdjustmentResult, ConnectorId, ConnectorPair,
    PartKind,
};
use mepcad_math::{Point3, Segment};
use mepcad_pierce::{intersects, locate, PlanarHost};
use mepcad_sizing::{
    effective_diameter, select, select_rect, RectClearance, RectDecision, SizeTable,
    SizingDecision,
};

use crate::error::Result;
use crate::host::{in_transaction, HostDocument, RunId};

/// How one run length adjustment was carried out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AdjustOutcome {
    /// The run was already at the target length; nothing was written.
    NoOp,
    /// A host-native fabrication strategy handled the change.
    HostNative,
    /// The geometric path replaced the centerline and propagated the
    /// displacement to attached elements.
    Adjusted(AdjustmentResult),
}

/// Adjust the length of `run` to `desired_length`, pinning the
/// connector nearer `pick`.
///
/// Fabrication parts first try two host-native strategies — setting
/// the length parameter directly, then asking the element to adjust
/// the moving end by the delta with either orientation flag — because
/// host-native adjustment preserves the part's internal fitting
/// logic. Only if both fail does the geometric path run: replace the
/// centerline, then translate attached elements by the displacement.
///
/// All writes happen inside one transaction; a NoOp opens none.
/// Per-element propagation failures are logged and skipped without
/// rolling back the committed geometry.
pub fn adjust_run_length<D: HostDocument>(
    doc: &mut D,
    run: RunId,
    desired_length: f64,
    pick: Point3,
) -> Result<AdjustOutcome> {
    let segment = doc.segment_of(run)?;
    let connectors = ConnectorPair::from_slice(&doc.connectors_of(run)?)?;
    let kind = doc.part_kind_of(run);

    let result = match adjust(&segment, &connectors, desired_length, &pick, kind)? {
        Adjustment::NoOp => return Ok(AdjustOutcome::NoOp),
        Adjustment::Adjusted(result) => result,
    };

    in_transaction(doc, |doc| {
        if kind == PartKind::Fabrication {
            if doc.try_set_length_param(run, desired_length) {
                return Ok(AdjustOutcome::HostNative);
            }
            let delta = desired_length - segment.length();
            let moved = moving_connector(&connectors, &pick, kind).id;
            for flip in [false, true] {
                if doc.try_adjust_end(run, moved, delta, flip) {
                    return Ok(AdjustOutcome::HostNative);
                }
            }
        }

        doc.replace_segment(run, result.new_segment)?;
        let moved = match result.moved {
            ConnectorId::Start => connectors.start,
            ConnectorId::End => connectors.end,
        };
        propagate(&moved, result.displacement, doc);
        Ok(AdjustOutcome::Adjusted(result))
    })
}

/// Select a round sleeve size for a run of `nominal` diameter.
///
/// `insulation_wrap` is the radial wrap thickness when the run is
/// insulated; the effective figure (nominal plus twice the wrap) is
/// computed here. The returned decision may carry
/// `requires_escalation`; resolve it with [`resolve_escalation`]
/// after confirming with the user.
pub fn select_sleeve_size(
    nominal: f64,
    insulation_wrap: Option<f64>,
    table: &SizeTable,
) -> Result<SizingDecision> {
    let decision = match insulation_wrap {
        Some(wrap) => select(effective_diameter(nominal, wrap), true, table)?,
        None => select(nominal, false, table)?,
    };
    Ok(decision)
}

/// Select rectangular sleeve dimensions for a `height` x `width` run,
/// then apply the additive clearance and rounding quantum.
pub fn select_rect_sleeve_size(
    height: f64,
    width: f64,
    insulation_wrap: Option<f64>,
    table: &SizeTable,
    clearance: &RectClearance,
) -> Result<RectDecision> {
    let (h, w) = match insulation_wrap {
        Some(wrap) => select_rect(
            effective_diameter(height, wrap),
            effective_diameter(width, wrap),
            true,
            table,
        )?,
        None => select_rect(height, width, false, table)?,
    };
    Ok(RectDecision::from_axes(h, w, clearance))
}

/// Caller's resolution of an escalated sizing decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscalationChoice {
    /// Fall back to the largest available catalog size.
    UseLargest,
    /// Abort the placement.
    Abort,
}

/// Apply the user's escalation choice to a decision.
///
/// Non-escalated decisions pass through; escalated ones yield the
/// largest size or `None` depending on `choice`.
pub fn resolve_escalation(decision: SizingDecision, choice: EscalationChoice) -> Option<f64> {
    if !decision.requires_escalation {
        return Some(decision.selected_size);
    }
    match choice {
        EscalationChoice::UseLargest => Some(decision.selected_size),
        EscalationChoice::Abort => None,
    }
}

/// Pierce points of `centerline` through each host it crosses.
///
/// Candidates are filtered with the cheap [`intersects`] predicate
/// before the piercing computation runs on the survivors.
pub fn locate_floor_pierces<'a>(
    centerline: &Segment,
    hosts: impl IntoIterator<Item = &'a dyn PlanarHost>,
) -> Vec<Point3> {
    hosts
        .into_iter()
        .filter(|host| intersects(centerline, *host))
        .filter_map(|host| locate(centerline, host))
        .collect()
}
