use crate::segments::{Category, SegmentId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Per-category statistics for one reduction run.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupReport {
    pub category: Category,
    pub segments: usize,
    /// Members shorter than the tolerance.
    pub degenerate: usize,
    pub comparisons: usize,
    pub casualties: usize,
    pub elapsed_ms: f64,
}

/// Wall-clock milliseconds spent in each step of a run.
///
/// `reduce_ms` covers every group. With parallel groups it can be shorter than
/// the sum of [`GroupReport::elapsed_ms`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReductionTiming {
    pub partition_ms: f64,
    pub reduce_ms: f64,
    pub total_ms: f64,
}

/// Outcome of a reduction run.
///
/// `casualties` alone decides what gets deleted. `survivors` is advisory
/// bookkeeping and is only filled when survivor tracking is enabled.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReductionReport {
    pub input_segments: usize,
    pub casualties: BTreeSet<SegmentId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub survivors: Vec<SegmentId>,
    pub groups: Vec<GroupReport>,
    pub timing: ReductionTiming,
}

impl ReductionReport {
    pub fn casualty_count(&self) -> usize {
        self.casualties.len()
    }

    pub fn group(&self, category: Category) -> Option<&GroupReport> {
        self.groups.iter().find(|g| g.category == category)
    }
}
