#![warn(missing_docs)]

//! Sleeve size selection for the mepcad kernel.
//!
//! A sleeve is a manufactured opening placed in a floor or wall to let
//! a linear run pass through. Given the run's nominal diameter (or
//! width/height for rectangular hosts) and optional insulation wrap,
//! this crate picks the correct opening size from a discrete ascending
//! size table, signalling escalation when no catalog entry is large
//! enough.

mod error;
mod rect;
mod select;
mod table;

pub use error::{Result, SizingError};
pub use rect::{RectClearance, RectDecision};
pub use select::{effective_diameter, select, select_rect, SizingDecision};
pub use table::SizeTable;
