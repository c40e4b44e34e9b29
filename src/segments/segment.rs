use super::aabb::Aabb;
use super::category::Category;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Stable identity of a drawing element. Used for set membership only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentId(pub u64);

impl std::fmt::Display for SegmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Straight line segment between two 3-D endpoints.
///
/// Endpoint order carries no direction. Segments are built once from the
/// input drawing and never mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub id: SegmentId,
    pub p1: [f64; 3],
    pub p2: [f64; 3],
    pub category: Category,
}

impl Segment {
    pub fn new(id: SegmentId, p1: [f64; 3], p2: [f64; 3], category: Category) -> Self {
        Self {
            id,
            p1,
            p2,
            category,
        }
    }

    pub fn start(&self) -> Vector3<f64> {
        Vector3::from(self.p1)
    }

    pub fn end(&self) -> Vector3<f64> {
        Vector3::from(self.p2)
    }

    /// Direction vector `p1 - p2`.
    pub fn direction(&self) -> Vector3<f64> {
        self.start() - self.end()
    }

    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_endpoints(self.p1, self.p2)
    }

    pub fn is_degenerate(&self, tolerance: f64) -> bool {
        self.length() < tolerance
    }
}
