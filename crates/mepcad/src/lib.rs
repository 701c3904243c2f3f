#![warn(missing_docs)]

//! MEP run editing toolkit for the mepcad kernel crates.
//!
//! Pulls together the pure kernels — length adjustment
//! ([`mepcad_adjust`]), sleeve sizing ([`mepcad_sizing`]) and planar
//! piercing ([`mepcad_pierce`]) — behind the host-document seam that
//! interactive commands run against. All host writes happen inside a
//! single scoped transaction per logical operation; pure computation
//! errors are returned, never thrown.
//!
//! # Example
//!
//! ```no_run
//! use mepcad::{select_sleeve_size, EscalationChoice, SizeTable};
//!
//! let table = SizeTable::catalog();
//! // 4" nominal with 1" insulation wrap
//! let decision = select_sleeve_size(4.0, Some(1.0), &table).unwrap();
//! assert_eq!(decision.selected_size, 8.0);
//! ```

pub use mepcad_adjust;
pub use mepcad_math;
pub use mepcad_pierce;
pub use mepcad_sizing;

pub use mepcad_adjust::{
    adjust, moving_connector, propagate, Adjustment, AdjustmentResult, AttachmentHost, Connector,
    ConnectorId, ConnectorPair, ElementId, HostWriteError, PartKind,
};
pub use mepcad_math::{Dir3, Point3, Segment, Vec3};
pub use mepcad_pierce::{intersects, locate, FloorSlab, PlanarHost, SolidIntersection};
pub use mepcad_sizing::{
    effective_diameter, select, select_rect, RectClearance, RectDecision, SizeTable,
    SizingDecision,
};

mod commands;
mod config;
mod error;
pub mod host;
pub mod interact;

pub use commands::{
    adjust_run_length, locate_floor_pierces, resolve_escalation, select_rect_sleeve_size,
    select_sleeve_size, AdjustOutcome, EscalationChoice,
};
pub use config::SleeveConfig;
pub use error::{CommandError, Result};
pub use host::{in_transaction, HostDocument, HostError, HostRead, HostWrite, RunId};
pub use interact::{CommandQueue, PickOutcome};
