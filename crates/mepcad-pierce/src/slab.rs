//! Axis-aligned floor slab host.

use mepcad_math::{Segment, GEOM_EPS};

use crate::{PlanarHost, SolidIntersection};

/// A horizontal floor slab: a rectangular extent in XY, a top
/// reference elevation, and a thickness extending downward.
///
/// The slab clips centerlines against its box to produce real solid
/// intersection segments, so the primary piercing path can be
/// exercised without a full B-rep host. A slab built with
/// [`FloorSlab::without_solid`] reports its solid as unavailable and
/// forces the elevation fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct FloorSlab {
    /// Top elevation of the slab (the piercing reference plane).
    pub elevation: f64,
    /// Slab thickness; the solid spans `[elevation - thickness, elevation]`.
    pub thickness: f64,
    /// XY extent minimum corner.
    pub min: (f64, f64),
    /// XY extent maximum corner.
    pub max: (f64, f64),
    solid_available: bool,
}

impl FloorSlab {
    /// Create a slab with a usable solid.
    pub fn new(elevation: f64, thickness: f64, min: (f64, f64), max: (f64, f64)) -> Self {
        Self {
            elevation,
            thickness,
            min,
            max,
            solid_available: true,
        }
    }

    /// Same slab, but reporting no usable solid representation.
    pub fn without_solid(mut self) -> Self {
        self.solid_available = false;
        self
    }

    /// Clip `centerline` against the slab box, returning the
    /// parameter interval of the contained portion.
    fn clip(&self, centerline: &Segment) -> Option<(f64, f64)> {
        let lo = [self.min.0, self.min.1, self.elevation - self.thickness];
        let hi = [self.max.0, self.max.1, self.elevation];
        let s = [centerline.start.x, centerline.start.y, centerline.start.z];
        let e = [centerline.end.x, centerline.end.y, centerline.end.z];

        let mut t0: f64 = 0.0;
        let mut t1: f64 = 1.0;
        for axis in 0..3 {
            let d = e[axis] - s[axis];
            if d.abs() < GEOM_EPS {
                // Parallel to this slab pair: inside or out entirely.
                if s[axis] < lo[axis] || s[axis] > hi[axis] {
                    return None;
                }
                continue;
            }
            let mut a = (lo[axis] - s[axis]) / d;
            let mut b = (hi[axis] - s[axis]) / d;
            if a > b {
                std::mem::swap(&mut a, &mut b);
            }
            t0 = t0.max(a);
            t1 = t1.min(b);
            if t0 > t1 {
                return None;
            }
        }
        Some((t0, t1))
    }
}

impl PlanarHost for FloorSlab {
    fn solid_intersection(&self, centerline: &Segment) -> SolidIntersection {
        if !self.solid_available {
            return SolidIntersection::Unavailable;
        }
        let segments = match self.clip(centerline) {
            Some((t0, t1)) => {
                // A grazing touch gives a degenerate clip; report a miss.
                match Segment::new(centerline.point_at(t0), centerline.point_at(t1)) {
                    Ok(seg) => vec![seg],
                    Err(_) => Vec::new(),
                }
            }
            None => Vec::new(),
        };
        SolidIntersection::Segments(segments)
    }

    fn elevation(&self) -> f64 {
        self.elevation
    }
}
