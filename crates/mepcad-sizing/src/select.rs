//! Size-selection policies for round and rectangular hosts.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SizingError};
use crate::table::SizeTable;

/// Outcome of a size-table lookup.
///
/// `requires_escalation` is not an error: it means every table entry
/// is at or below the required figure, and the caller must decide
/// whether to fall back to the largest available size or abort.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizingDecision {
    /// The selected sleeve size, in table units (inches).
    pub selected_size: f64,
    /// True when no table entry fully covers the requirement.
    pub requires_escalation: bool,
}

/// Effective diameter of an insulated run: nominal plus the wrap on
/// both sides.
pub fn effective_diameter(nominal: f64, wrap_thickness: f64) -> f64 {
    nominal + 2.0 * wrap_thickness
}

/// Select a sleeve size for `required` from `table`.
///
/// Two policies, switched on `has_insulation`:
///
/// - Insulated: `required` already includes the wrap (see
///   [`effective_diameter`]); pick the first entry strictly greater
///   than it. Clearance is baked into the wrap figure.
/// - Bare: find the first entry strictly greater than the nominal
///   diameter, then select the entry *after* it (clamped to the last
///   index) — bare runs get one extra size of clearance.
///
/// Comparisons are strict: a requirement exactly equal to a table
/// entry is not satisfied by that entry.
pub fn select(required: f64, has_insulation: bool, table: &SizeTable) -> Result<SizingDecision> {
    if required <= 0.0 {
        return Err(SizingError::InvalidDimension(required));
    }

    let decision = if has_insulation {
        match table.first_above(required) {
            Some(i) => SizingDecision {
                selected_size: table.size_at(i),
                requires_escalation: false,
            },
            None => SizingDecision {
                selected_size: table.largest(),
                requires_escalation: true,
            },
        }
    } else {
        let last = table.len() - 1;
        match table.first_above(required) {
            // Base entry exists and there is room to step up one size.
            Some(base) if base < last => SizingDecision {
                selected_size: table.size_at(base + 1),
                requires_escalation: false,
            },
            // Base is already the last entry, or the nominal diameter
            // exceeds the whole table: no headroom for the extra step.
            _ => SizingDecision {
                selected_size: table.largest(),
                requires_escalation: true,
            },
        }
    };

    Ok(decision)
}

/// Select sleeve dimensions for a rectangular host.
///
/// Height and width are looked up independently against the same
/// table, each with the policy of [`select`]. The additive clearance
/// and rounding quantum applied afterwards do not consult the table;
/// see [`crate::RectClearance`].
pub fn select_rect(
    required_height: f64,
    required_width: f64,
    has_insulation: bool,
    table: &SizeTable,
) -> Result<(SizingDecision, SizingDecision)> {
    let height = select(required_height, has_insulation, table)?;
    let width = select(required_width, has_insulation, table)?;
    Ok((height, width))
}
