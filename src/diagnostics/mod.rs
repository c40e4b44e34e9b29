//! Serializable reports produced by a reduction run.
//!
//! [`ReductionReport`] is returned by [`crate::reduce::Reducer::run`] and
//! embedded in the command summary written by the `overkill` tool. It carries
//! the casualty set, one [`GroupReport`] per category and a
//! [`ReductionTiming`].

pub mod reduction;

pub use reduction::{GroupReport, ReductionReport, ReductionTiming};
