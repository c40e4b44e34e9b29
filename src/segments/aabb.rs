use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box of a segment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl Aabb {
    /// Component-wise min/max of two endpoints.
    pub fn from_endpoints(p: [f64; 3], q: [f64; 3]) -> Self {
        let mut min = [0.0; 3];
        let mut max = [0.0; 3];
        for axis in 0..3 {
            min[axis] = p[axis].min(q[axis]);
            max[axis] = p[axis].max(q[axis]);
        }
        Self { min, max }
    }

    /// True when `inner` lies inside `self` on every axis, allowing each
    /// bound to overshoot by `tolerance`.
    pub fn contains(&self, inner: &Aabb, tolerance: f64) -> bool {
        (0..3).all(|axis| {
            self.min[axis] - tolerance <= inner.min[axis]
                && self.max[axis] + tolerance >= inner.max[axis]
        })
    }

    /// Containment in either direction.
    pub fn nests_with(&self, other: &Aabb, tolerance: f64) -> bool {
        self.contains(other, tolerance) || other.contains(self, tolerance)
    }
}
