//! End connectors of a linear run.

use mepcad_math::Point3;

use crate::error::{AdjustError, Result};

/// Which end of the run a connector sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectorId {
    /// Connector "0", at the segment start.
    Start,
    /// Connector "1", at the segment end.
    End,
}

/// An end connector: identity, origin, and whether another element is
/// attached to it.
///
/// Connectors are looked up fresh from the host model for each
/// command; they carry no persistent identity across calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connector {
    /// Which end this connector occupies.
    pub id: ConnectorId,
    /// World-space origin of the connector.
    pub origin: Point3,
    /// True when another element is attached at this connector.
    pub attached: bool,
}

impl Connector {
    /// Create a connector.
    pub fn new(id: ConnectorId, origin: Point3, attached: bool) -> Self {
        Self {
            id,
            origin,
            attached,
        }
    }

    /// Distance from this connector's origin to `point`.
    pub fn distance_to(&self, point: &Point3) -> f64 {
        (self.origin - point).norm()
    }
}

/// The two end connectors of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectorPair {
    /// The start-side connector.
    pub start: Connector,
    /// The end-side connector.
    pub end: Connector,
}

impl ConnectorPair {
    /// Pair up a start-side and an end-side connector.
    pub fn new(start: Connector, end: Connector) -> Result<Self> {
        if start.id != ConnectorId::Start || end.id != ConnectorId::End {
            return Err(AdjustError::MismatchedPair);
        }
        Ok(Self { start, end })
    }

    /// Build a pair from whatever end connectors the host model
    /// returned. Fewer than two is a hard failure; the caller must
    /// abort the operation.
    pub fn from_slice(connectors: &[Connector]) -> Result<Self> {
        if connectors.len() < 2 {
            return Err(AdjustError::ConnectorsNotFound(connectors.len()));
        }
        let start = connectors
            .iter()
            .find(|c| c.id == ConnectorId::Start)
            .copied()
            .ok_or(AdjustError::MismatchedPair)?;
        let end = connectors
            .iter()
            .find(|c| c.id == ConnectorId::End)
            .copied()
            .ok_or(AdjustError::MismatchedPair)?;
        Ok(Self { start, end })
    }

    /// The connector nearer to `point`. Ties prefer the start side.
    pub fn nearest_to(&self, point: &Point3) -> &Connector {
        if self.start.distance_to(point) <= self.end.distance_to(point) {
            &self.start
        } else {
            &self.end
        }
    }

    /// The connector farther from `point`. Ties prefer the start side.
    pub fn farthest_from(&self, point: &Point3) -> &Connector {
        if self.start.distance_to(point) >= self.end.distance_to(point) {
            &self.start
        } else {
            &self.end
        }
    }

    /// True when neither connector has anything attached.
    pub fn both_unattached(&self) -> bool {
        !self.start.attached && !self.end.attached
    }
}
