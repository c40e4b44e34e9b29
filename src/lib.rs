#![doc = include_str!("../README.md")]

// Core reduction
pub mod overlap;
pub mod reduce;
pub mod segments;

// Host side: documents, command, reports
pub mod command;
pub mod config;
pub mod diagnostics;
pub mod drawing;
pub mod error;
pub mod io;

// --- High-level re-exports -------------------------------------------------

pub use crate::command::{OverkillCommand, OverkillSummary};
pub use crate::diagnostics::ReductionReport;
pub use crate::drawing::{Drawing, DrawingElement, Geometry};
pub use crate::error::{Error, Result};
pub use crate::reduce::{reduce_duplicates, ReduceParams, Reducer};
pub use crate::segments::{Category, Segment, SegmentId};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use line_overkill::prelude::*;
///
/// let segments = vec![
///     Segment::new(SegmentId(1), [0.0, 0.0, 0.0], [10.0, 0.0, 0.0], Category::Model),
///     Segment::new(SegmentId(2), [2.0, 0.0, 0.0], [6.0, 0.0, 0.0], Category::Model),
/// ];
/// let casualties = reduce_duplicates(&segments);
/// assert!(casualties.contains(&SegmentId(2)));
/// assert_eq!(casualties.len(), 1);
/// ```
pub mod prelude {
    pub use crate::{reduce_duplicates, Category, ReduceParams, Reducer, Segment, SegmentId};
}
