use line_overkill::{Category, Drawing, DrawingElement, Geometry, SegmentId};

/// Rectangular room outline drawn twice: once as four full walls and once as
/// shorter pieces lying on the same walls. Every piece is redundant.
pub fn doubled_room(category: Category, first_id: u64, width: f64, depth: f64) -> Vec<DrawingElement> {
    assert!(width > 2.0 && depth > 2.0, "room must be larger than the inset");
    let corners = [
        [0.0, 0.0, 0.0],
        [width, 0.0, 0.0],
        [width, depth, 0.0],
        [0.0, depth, 0.0],
    ];
    let mut elements = Vec::with_capacity(8);
    let mut id = first_id;
    for i in 0..4 {
        let p = corners[i];
        let q = corners[(i + 1) % 4];
        elements.push(DrawingElement::line(id, category, p, q));
        id += 1;
    }
    for i in 0..4 {
        let p = corners[i];
        let q = corners[(i + 1) % 4];
        // Piece from 1 unit past p to 1 unit before q, reversed.
        let len = ((q[0] - p[0]).powi(2) + (q[1] - p[1]).powi(2)).sqrt();
        let t0 = 1.0 / len;
        let t1 = 1.0 - t0;
        let lerp = |t: f64| [p[0] + (q[0] - p[0]) * t, p[1] + (q[1] - p[1]) * t, 0.0];
        elements.push(DrawingElement::line(id, category, lerp(t1), lerp(t0)));
        id += 1;
    }
    elements
}

/// Quarter-circle arc that must never be selected.
pub fn arc(id: u64, category: Category) -> DrawingElement {
    DrawingElement {
        id: SegmentId(id),
        category: category.label().to_string(),
        geometry: Geometry::Arc {
            center: [0.0, 0.0, 0.0],
            radius: 3.0,
            start_angle: 0.0,
            end_angle: std::f64::consts::FRAC_PI_2,
        },
    }
}

pub fn drawing(elements: Vec<DrawingElement>) -> Drawing {
    Drawing::new(elements).expect("synthetic drawings use unique ids")
}
