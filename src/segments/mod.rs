//! Segment model shared by the overlap tester and the reducers.
//!
//! - [`Segment`]: immutable straight segment with two 3-D endpoints, a stable
//!   [`SegmentId`] and a [`Category`] tag.
//! - [`Category`]: the fixed set of line categories. Each category forms an
//!   independent comparison group.
//! - [`Aabb`]: component-wise bounding box with tolerant containment, used as
//!   the overlap proxy once two segments are known to be collinear.
//!
//! Coordinates are `f64` in drawing units. Nothing in this module allocates
//! beyond the segment itself.

mod aabb;
mod category;
mod segment;

pub use aabb::Aabb;
pub use category::Category;
pub use segment::{Segment, SegmentId};
