//! Additive clearance and round-up quantum for rectangular openings.

use serde::{Deserialize, Serialize};

use crate::select::SizingDecision;

/// Clearance policy for rectangular sleeve dimensions.
///
/// Applied to each axis after table lookup: add `clearance`, then
/// round the sum up to the nearest multiple of `quantum`. This step
/// never consults the size table and is applied whether or not the
/// run is insulated. A `quantum` of zero or less disables rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectClearance {
    /// Additive clearance per dimension, in inches.
    pub clearance: f64,
    /// Rounding quantum, in inches.
    pub quantum: f64,
}

impl Default for RectClearance {
    fn default() -> Self {
        Self {
            clearance: 0.0,
            quantum: 0.25,
        }
    }
}

impl RectClearance {
    /// Apply clearance and rounding to a single dimension.
    pub fn apply(&self, dimension: f64) -> f64 {
        let padded = dimension + self.clearance;
        if self.quantum <= 0.0 {
            return padded;
        }
        (padded / self.quantum).ceil() * self.quantum
    }
}

/// Final rectangular opening dimensions after clearance and rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectDecision {
    /// Opening height, in inches.
    pub height: f64,
    /// Opening width, in inches.
    pub width: f64,
    /// True when either axis lookup ran out of table.
    pub requires_escalation: bool,
}

impl RectDecision {
    /// Combine two per-axis table decisions under a clearance policy.
    pub fn from_axes(
        height: SizingDecision,
        width: SizingDecision,
        clearance: &RectClearance,
    ) -> Self {
        Self {
            height: clearance.apply(height.selected_size),
            width: clearance.apply(width.selected_size),
            requires_escalation: height.requires_escalation || width.requires_escalation,
        }
    }
}
