#![warn(missing_docs)]

//! Length adjustment for linear MEP runs.
//!
//! A run is a straight segment with one end connector at each
//! endpoint. [`adjust`] computes the new geometry that reaches a
//! target length while pinning the connector nearer a user-picked
//! reference point, and [`propagate`] translates whatever is rigidly
//! attached to the moved end so fittings stay coincident.
//!
//! The adjustment itself performs no host-model writes; the caller
//! applies the returned geometry and displacement inside its own
//! transaction.

mod connector;
mod error;
mod length;
mod propagate;

pub use connector::{Connector, ConnectorId, ConnectorPair};
pub use error::{AdjustError, Result};
pub use length::{adjust, moving_connector, Adjustment, AdjustmentResult, PartKind};
pub use propagate::{propagate, AttachmentHost, ElementId, HostWriteError};
