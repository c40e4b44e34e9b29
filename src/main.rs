use line_overkill::segments::{Category, Segment, SegmentId};
use line_overkill::{ReduceParams, Reducer};

fn main() {
    env_logger::init();
    // Demo stub: a few stacked duplicates along two walls
    let segments = vec![
        Segment::new(SegmentId(1), [0.0, 0.0, 0.0], [10.0, 0.0, 0.0], Category::Model),
        Segment::new(SegmentId(2), [2.0, 0.0, 0.0], [6.0, 0.0, 0.0], Category::Model),
        Segment::new(SegmentId(3), [0.0, 0.0, 0.0], [10.0, 0.0, 0.0], Category::Model),
        Segment::new(SegmentId(4), [0.0, 0.0, 0.0], [0.0, 8.0, 0.0], Category::Detail),
        Segment::new(SegmentId(5), [0.0, 8.0, 0.0], [0.0, 0.0, 0.0], Category::Detail),
    ];

    let report = Reducer::new(ReduceParams::default()).run(&segments);
    let deleted: Vec<u64> = report.casualties.iter().map(|id| id.0).collect();
    println!(
        "deleted={:?} total_ms={:.3}",
        deleted, report.timing.total_ms
    );
}
