#![warn(missing_docs)]

//! Math types for the mepcad MEP editing kernel.
//!
//! Thin wrappers around nalgebra providing domain-specific types for
//! linear run geometry: points, vectors, unit directions, the
//! [`Segment`] centerline type, and tolerance constants.

use nalgebra::Unit;
use thiserror::Error;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = nalgebra::Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<nalgebra::Vector3<f64>>;

/// No-op threshold for length adjustment, in model length units.
///
/// A requested length within this distance of the current length
/// leaves the geometry untouched.
pub const LENGTH_EPS: f64 = 1e-3;

/// Degeneracy threshold for geometric construction.
pub const GEOM_EPS: f64 = 1e-9;

/// Errors from math-level construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Tried to normalize a vector with (near-)zero length.
    #[error("cannot normalize a zero-length vector")]
    ZeroLengthVector,

    /// Segment endpoints coincide.
    #[error("segment endpoints coincide at ({0:.4}, {1:.4}, {2:.4})")]
    DegenerateSegment(f64, f64, f64),
}

/// Result type for math operations.
pub type Result<T> = std::result::Result<T, MathError>;

/// Normalize a vector, rejecting (near-)zero input.
pub fn try_direction(v: Vec3) -> Result<Dir3> {
    Dir3::try_new(v, GEOM_EPS).ok_or(MathError::ZeroLengthVector)
}

/// A straight centerline segment with two ordered endpoints.
///
/// The unit direction (`end - start`, normalized) is computed once at
/// construction. Invariant: `start != end`; the constructor rejects
/// coincident endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Start endpoint (connector "0" side).
    pub start: Point3,
    /// End endpoint (connector "1" side).
    pub end: Point3,
    direction: Dir3,
}

impl Segment {
    /// Create a segment from two distinct endpoints.
    pub fn new(start: Point3, end: Point3) -> Result<Self> {
        let direction = Dir3::try_new(end - start, GEOM_EPS)
            .ok_or(MathError::DegenerateSegment(start.x, start.y, start.z))?;
        Ok(Self {
            start,
            end,
            direction,
        })
    }

    /// Unit direction from start to end.
    pub fn direction(&self) -> Dir3 {
        self.direction
    }

    /// Length of the segment.
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Evaluate at normalized parameter `t` (0 = start, 1 = end).
    pub fn point_at(&self, t: f64) -> Point3 {
        self.start + t * (self.end - self.start)
    }

    /// Midpoint of the segment.
    pub fn midpoint(&self) -> Point3 {
        self.point_at(0.5)
    }

    /// This segment rigidly translated by `offset`.
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
            direction: self.direction,
        }
    }
}
