//! Pairwise collinearity and overlap test.
//!
//! Two segments `a` and `b` are redundant with respect to each other when
//!
//! - their direction vectors `v1 = a.p1 - a.p2` and `v2 = b.p1 - b.p2` are
//!   parallel (`|v1 × v2|` below tolerance), and
//! - `a` and `b` lie on the same infinite line (`|v1 × (a.p1 - b.p2)|` below
//!   tolerance), and
//! - one bounding box contains the other within tolerance on every axis.
//!
//! Once collinearity holds, bounding-box containment is equivalent to interval
//! containment along the shared line, so no projection is needed.
//!
//! The longer segment is kept. On an exact length tie the first argument is
//! the one dropped, which makes the outcome depend on argument order; the
//! group reducer relies on that to stay deterministic for a fixed input order.
//!
//! Zero-length segments cross to zero with anything and their box is a point,
//! so they test as redundant against any box that contains them.

use crate::segments::Segment;

/// Absolute tolerance for cross-product magnitudes and box bounds.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Outcome of a positive overlap test: which segment survives the pair.
#[derive(Clone, Copy, Debug)]
pub struct Redundancy<'a> {
    pub keep: &'a Segment,
    pub drop: &'a Segment,
}

/// True when `a` and `b` lie on the same infinite line.
pub fn is_collinear(a: &Segment, b: &Segment, tolerance: f64) -> bool {
    let v1 = a.direction();
    let v2 = b.direction();
    let check = a.start() - b.end();
    v1.cross(&v2).norm() < tolerance && v1.cross(&check).norm() < tolerance
}

/// True when either bounding box contains the other within `tolerance`.
pub fn boxes_nest(a: &Segment, b: &Segment, tolerance: f64) -> bool {
    a.bounding_box().nests_with(&b.bounding_box(), tolerance)
}

/// Decide whether `a` and `b` are duplicates and which one to drop.
pub fn test_pair<'a>(a: &'a Segment, b: &'a Segment, tolerance: f64) -> Option<Redundancy<'a>> {
    if !is_collinear(a, b, tolerance) || !boxes_nest(a, b, tolerance) {
        return None;
    }
    if a.length() > b.length() {
        Some(Redundancy { keep: a, drop: b })
    } else {
        Some(Redundancy { keep: b, drop: a })
    }
}
