use crate::overlap::test_pair;
use crate::segments::{Category, Segment, SegmentId};
use std::collections::BTreeSet;
use std::time::Instant;

/// Result of reducing a single category group.
#[derive(Clone, Debug, Default)]
pub struct GroupOutcome {
    pub casualties: BTreeSet<SegmentId>,
    /// Advisory "kept" identities, in comparison order. May repeat ids and may
    /// name segments that were dropped later in the pass.
    pub survivors: Vec<SegmentId>,
    pub comparisons: usize,
    pub elapsed_ms: f64,
}

/// Reduce one category group.
pub fn reduce_group(segments: &[Segment], tolerance: f64, track_survivors: bool) -> GroupOutcome {
    GroupReducer::new(segments, tolerance, track_survivors).reduce()
}

/// Greedy double loop over one group.
///
/// The casualty set is read back by later steps of the same pass, so the loop
/// must stay sequential. The anchor `a` is checked against the casualty set
/// once, before its inner loop; if `a` gets dropped while acting as anchor it
/// still finishes that inner loop.
struct GroupReducer<'a> {
    segments: &'a [Segment],
    tolerance: f64,
    track_survivors: bool,
    casualties: BTreeSet<SegmentId>,
    survivors: Vec<SegmentId>,
    comparisons: usize,
}

impl<'a> GroupReducer<'a> {
    fn new(segments: &'a [Segment], tolerance: f64, track_survivors: bool) -> Self {
        if cfg!(debug_assertions) {
            let category: Option<Category> = segments.first().map(|s| s.category);
            debug_assert!(
                segments.iter().all(|s| Some(s.category) == category),
                "group must hold a single category"
            );
        }
        Self {
            segments,
            tolerance,
            track_survivors,
            casualties: BTreeSet::new(),
            survivors: Vec::new(),
            comparisons: 0,
        }
    }

    fn reduce(mut self) -> GroupOutcome {
        let start = Instant::now();
        for anchor in 0..self.segments.len() {
            self.process_anchor(anchor);
        }
        GroupOutcome {
            casualties: self.casualties,
            survivors: self.survivors,
            comparisons: self.comparisons,
            elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
        }
    }

    fn process_anchor(&mut self, anchor: usize) {
        let segments = self.segments;
        let a = &segments[anchor];
        if self.casualties.contains(&a.id) {
            return;
        }
        for (other, b) in segments.iter().enumerate() {
            if other == anchor || self.casualties.contains(&b.id) {
                continue;
            }
            self.comparisons += 1;
            match test_pair(a, b, self.tolerance) {
                Some(redundancy) => {
                    if self.track_survivors {
                        self.survivors.push(redundancy.keep.id);
                    }
                    self.casualties.insert(redundancy.drop.id);
                }
                None => {
                    if self.track_survivors {
                        self.survivors.push(b.id);
                    }
                }
            }
        }
    }
}
