#![warn(missing_docs)]

//! Planar host piercing for the mepcad kernel.
//!
//! Finds where a run centerline pierces a horizontal planar host (a
//! floor slab) using a two-tier strategy: precise solid/segment
//! intersection when the host exposes a usable solid, and an
//! elevation-crossing fallback when it does not. Primary-path failure
//! is an explicit [`SolidIntersection::Unavailable`] value, never a
//! caught exception, so the fallback can be exercised
//! deterministically in tests.

mod slab;

use mepcad_math::{Point3, Segment};

pub use slab::FloorSlab;

/// Result of asking a host for its solid intersection with a curve.
#[derive(Debug, Clone, PartialEq)]
pub enum SolidIntersection {
    /// Intersection segments, possibly empty when the curve misses
    /// the solid entirely.
    Segments(Vec<Segment>),
    /// The host exposes no usable solid; callers fall back to the
    /// elevation test.
    Unavailable,
}

/// A horizontal planar host a run can pass through.
pub trait PlanarHost {
    /// Intersect the host's solid with `centerline`.
    fn solid_intersection(&self, centerline: &Segment) -> SolidIntersection;

    /// Reference elevation of the host's piercing plane.
    fn elevation(&self) -> f64;
}

/// Locate the point where `centerline` pierces `host`.
///
/// Primary path: the start point of the first solid intersection
/// segment. Fallback (solid unavailable): when the centerline's
/// endpoints straddle the host elevation, the curve midpoint with its
/// Z replaced by that elevation — an approximation that differs
/// negligibly from the true piercing point for near-vertical runs.
pub fn locate(centerline: &Segment, host: &dyn PlanarHost) -> Option<Point3> {
    match host.solid_intersection(centerline) {
        SolidIntersection::Segments(segments) => segments.first().map(|s| s.start),
        SolidIntersection::Unavailable => {
            log::debug!(
                "host solid unavailable, using elevation fallback at z={}",
                host.elevation()
            );
            locate_by_elevation(centerline, host.elevation())
        }
    }
}

/// Cheap predicate: does `centerline` cross `host` at all?
///
/// Same two tiers as [`locate`]; used to filter candidate hosts
/// before running the piercing computation on each.
pub fn intersects(centerline: &Segment, host: &dyn PlanarHost) -> bool {
    match host.solid_intersection(centerline) {
        SolidIntersection::Segments(segments) => !segments.is_empty(),
        SolidIntersection::Unavailable => straddles(centerline, host.elevation()),
    }
}

/// One endpoint at or above the elevation, the other at or below.
fn straddles(centerline: &Segment, elevation: f64) -> bool {
    let a = centerline.start.z - elevation;
    let b = centerline.end.z - elevation;
    (a >= 0.0 && b <= 0.0) || (a <= 0.0 && b >= 0.0)
}

fn locate_by_elevation(centerline: &Segment, elevation: f64) -> Option<Point3> {
    if !straddles(centerline, elevation) {
        return None;
    }
    let mid = centerline.midpoint();
    Some(Point3::new(mid.x, mid.y, elevation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Host with no solid at all: always exercises the fallback.
    struct PlaneOnly {
        elevation: f64,
    }

    impl PlanarHost for PlaneOnly {
        fn solid_intersection(&self, _centerline: &Segment) -> SolidIntersection {
            SolidIntersection::Unavailable
        }

        fn elevation(&self) -> f64 {
            self.elevation
        }
    }

    #[test]
    fn test_fallback_straddling_vertical() {
        let line =
            Segment::new(Point3::new(0.0, 0.0, -1.0), Point3::new(0.0, 0.0, 1.0)).unwrap();
        let host = PlaneOnly { elevation: 0.0 };
        let p = locate(&line, &host).unwrap();
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);
        assert!(intersects(&line, &host));
    }

    #[test]
    fn test_fallback_midpoint_xy() {
        // Slanted line: fallback takes the curve midpoint's XY.
        let line =
            Segment::new(Point3::new(0.0, 0.0, -2.0), Point3::new(4.0, 0.0, 2.0)).unwrap();
        let host = PlaneOnly { elevation: 0.0 };
        let p = locate(&line, &host).unwrap();
        assert_relative_eq!(p.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fallback_no_straddle() {
        let line =
            Segment::new(Point3::new(0.0, 0.0, 1.0), Point3::new(0.0, 0.0, 5.0)).unwrap();
        let host = PlaneOnly { elevation: 0.0 };
        assert_eq!(locate(&line, &host), None);
        assert!(!intersects(&line, &host));
    }

    #[test]
    fn test_endpoint_touching_elevation_counts() {
        let line =
            Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, 3.0)).unwrap();
        let host = PlaneOnly { elevation: 0.0 };
        assert!(intersects(&line, &host));
    }

    #[test]
    fn test_primary_path_takes_first_segment_start() {
        struct TwoSegments;
        impl PlanarHost for TwoSegments {
            fn solid_intersection(&self, _c: &Segment) -> SolidIntersection {
                SolidIntersection::Segments(vec![
                    Segment::new(Point3::new(1.0, 1.0, 2.0), Point3::new(1.0, 1.0, 1.0)).unwrap(),
                    Segment::new(Point3::new(9.0, 9.0, 2.0), Point3::new(9.0, 9.0, 1.0)).unwrap(),
                ])
            }
            fn elevation(&self) -> f64 {
                0.0
            }
        }
        let line =
            Segment::new(Point3::new(1.0, 1.0, 5.0), Point3::new(1.0, 1.0, -5.0)).unwrap();
        let p = locate(&line, &TwoSegments).unwrap();
        assert_relative_eq!(p.z, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_solid_result_is_a_miss_not_a_fallback() {
        struct EmptySolid;
        impl PlanarHost for EmptySolid {
            fn solid_intersection(&self, _c: &Segment) -> SolidIntersection {
                SolidIntersection::Segments(Vec::new())
            }
            fn elevation(&self) -> f64 {
                0.0
            }
        }
        // The line straddles z=0, but the solid says "no crossing":
        // the fallback must not override a usable solid answer.
        let line =
            Segment::new(Point3::new(0.0, 0.0, -1.0), Point3::new(0.0, 0.0, 1.0)).unwrap();
        assert_eq!(locate(&line, &EmptySolid), None);
        assert!(!intersects(&line, &EmptySolid));
    }
}
