//! Duplicate reduction over a whole selection.
//!
//! The orchestrator partitions segments by [`Category`], reduces each group
//! independently with [`reduce_group`], and unions the casualty sets. Groups
//! never see each other's segments, so their processing order does not change
//! the union, and with the `parallel` feature they can run on the rayon pool.
//! Inside a group the pass stays sequential (see [`group`]).
//!
//! Iteration order within a group follows input order. Combined with the
//! order-sensitive tie-break of [`crate::overlap::test_pair`] this makes the
//! casualty set a pure function of the input sequence.

pub mod group;
mod params;

pub use group::{reduce_group, GroupOutcome};
pub use params::ReduceParams;

use crate::diagnostics::{GroupReport, ReductionReport, ReductionTiming};
use crate::segments::{Category, Segment, SegmentId};
use log::debug;
use std::collections::{BTreeMap, BTreeSet};
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Split segments into category groups, preserving input order within each.
pub fn partition_by_category(segments: &[Segment]) -> BTreeMap<Category, Vec<Segment>> {
    let mut groups: BTreeMap<Category, Vec<Segment>> = BTreeMap::new();
    for seg in segments {
        groups.entry(seg.category).or_default().push(seg.clone());
    }
    groups
}

/// Identities of all redundant segments, using default parameters.
pub fn reduce_duplicates(segments: &[Segment]) -> BTreeSet<SegmentId> {
    Reducer::default().run(segments).casualties
}

/// Runs the per-category reduction and collects diagnostics.
#[derive(Clone, Debug, Default)]
pub struct Reducer {
    params: ReduceParams,
}

impl Reducer {
    pub fn new(params: ReduceParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ReduceParams {
        &self.params
    }

    pub fn run(&self, segments: &[Segment]) -> ReductionReport {
        let total_start = Instant::now();

        let partition_start = Instant::now();
        let groups: Vec<(Category, Vec<Segment>)> =
            partition_by_category(segments).into_iter().collect();
        let partition_ms = partition_start.elapsed().as_secs_f64() * 1000.0;

        let reduce_start = Instant::now();
        let outcomes = self.reduce_groups(&groups);
        let reduce_ms = reduce_start.elapsed().as_secs_f64() * 1000.0;

        let mut casualties = BTreeSet::new();
        let mut survivors = Vec::new();
        let mut group_reports = Vec::with_capacity(groups.len());
        for ((category, members), outcome) in groups.iter().zip(outcomes) {
            debug!(
                "Reduced {} group: {} segments, {} comparisons, {} casualties",
                category,
                members.len(),
                outcome.comparisons,
                outcome.casualties.len()
            );
            group_reports.push(GroupReport {
                category: *category,
                segments: members.len(),
                degenerate: members
                    .iter()
                    .filter(|s| s.is_degenerate(self.params.tolerance))
                    .count(),
                comparisons: outcome.comparisons,
                casualties: outcome.casualties.len(),
                elapsed_ms: outcome.elapsed_ms,
            });
            casualties.extend(outcome.casualties);
            survivors.extend(outcome.survivors);
        }
        let timing = ReductionTiming {
            partition_ms,
            reduce_ms,
            total_ms: total_start.elapsed().as_secs_f64() * 1000.0,
        };

        ReductionReport {
            input_segments: segments.len(),
            casualties,
            survivors,
            groups: group_reports,
            timing,
        }
    }

    fn reduce_groups(&self, groups: &[(Category, Vec<Segment>)]) -> Vec<GroupOutcome> {
        if self.params.parallel {
            #[cfg(feature = "parallel")]
            {
                return reduce_groups_parallel(groups, &self.params);
            }
            #[cfg(not(feature = "parallel"))]
            debug!("Parallel reduction requested without the `parallel` feature -> sequential");
        }
        groups
            .iter()
            .map(|(_, members)| {
                reduce_group(members, self.params.tolerance, self.params.track_survivors)
            })
            .collect()
    }
}

#[cfg(feature = "parallel")]
fn reduce_groups_parallel(
    groups: &[(Category, Vec<Segment>)],
    params: &ReduceParams,
) -> Vec<GroupOutcome> {
    groups
        .par_iter()
        .map(|(_, members)| reduce_group(members, params.tolerance, params.track_survivors))
        .collect()
}
