//! Drawing document: the host side of a reduction.
//!
//! A [`Drawing`] is a flat list of elements, each with a stable id, a host
//! category label and a geometry. The reduction only understands straight
//! lines in the four recognized categories, so [`Drawing::select_lines`]
//! filters everything else out before the core runs. Deletions are committed
//! with [`Drawing::delete`], which either removes every named element or
//! leaves the document untouched.

use crate::error::{Error, Result};
use crate::segments::{Category, Segment, SegmentId};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Element geometry as stored in the document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Geometry {
    Line {
        p1: [f64; 3],
        p2: [f64; 3],
    },
    /// Circular arc in a plane parallel to XY. Never selected for reduction.
    Arc {
        center: [f64; 3],
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawingElement {
    pub id: SegmentId,
    /// Host category label, e.g. `"Lines"` or `"<Room Separation>"`.
    pub category: String,
    pub geometry: Geometry,
}

impl DrawingElement {
    pub fn line(id: u64, category: Category, p1: [f64; 3], p2: [f64; 3]) -> Self {
        Self {
            id: SegmentId(id),
            category: category.label().to_string(),
            geometry: Geometry::Line { p1, p2 },
        }
    }

    /// Segment view of this element, if it is a line in a known category.
    pub fn as_segment(&self) -> Option<Segment> {
        let category = Category::from_label(&self.category)?;
        match self.geometry {
            Geometry::Line { p1, p2 } => Some(Segment::new(self.id, p1, p2, category)),
            Geometry::Arc { .. } => None,
        }
    }
}

/// A drawing whose element ids are unique.
///
/// Every constructor, deserialization included, goes through
/// [`Drawing::new`], so `delete` removes at most one element per id.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DrawingDocument")]
pub struct Drawing {
    elements: Vec<DrawingElement>,
}

/// On-disk shape of a drawing before its ids are checked.
#[derive(Deserialize)]
pub(crate) struct DrawingDocument {
    elements: Vec<DrawingElement>,
}

impl TryFrom<DrawingDocument> for Drawing {
    type Error = Error;

    fn try_from(document: DrawingDocument) -> Result<Self> {
        Drawing::new(document.elements)
    }
}

impl Drawing {
    /// Build a drawing, rejecting duplicate element ids.
    pub fn new(elements: Vec<DrawingElement>) -> Result<Self> {
        let drawing = Self { elements };
        drawing.check_unique_ids()?;
        Ok(drawing)
    }

    pub fn elements(&self) -> &[DrawingElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, id: SegmentId) -> bool {
        self.elements.iter().any(|e| e.id == id)
    }

    fn check_unique_ids(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.elements.len());
        for element in &self.elements {
            if !seen.insert(element.id) {
                return Err(Error::DuplicateElement(element.id));
            }
        }
        Ok(())
    }

    /// Straight lines in recognized categories, in document order.
    pub fn select_lines(&self) -> Vec<Segment> {
        let mut selected = Vec::with_capacity(self.elements.len());
        for element in &self.elements {
            match element.as_segment() {
                Some(segment) => selected.push(segment),
                None => debug!(
                    "Skipping element {} ({}): not a line in a recognized category",
                    element.id, element.category
                ),
            }
        }
        selected
    }

    /// Remove every element named in `ids`. Returns the number removed.
    ///
    /// All ids must belong to the drawing; otherwise nothing is removed.
    pub fn delete(&mut self, ids: &BTreeSet<SegmentId>) -> Result<usize> {
        if let Some(missing) = ids.iter().find(|id| !self.contains(**id)) {
            return Err(Error::UnknownElement(*missing));
        }
        let before = self.elements.len();
        self.elements.retain(|e| !ids.contains(&e.id));
        Ok(before - self.elements.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arc(id: u64) -> DrawingElement {
        DrawingElement {
            id: SegmentId(id),
            category: "Lines".to_string(),
            geometry: Geometry::Arc {
                center: [0.0, 0.0, 0.0],
                radius: 5.0,
                start_angle: 0.0,
                end_angle: std::f64::consts::PI,
            },
        }
    }

    fn sample() -> Drawing {
        Drawing::new(vec![
            DrawingElement::line(1, Category::Model, [0.0, 0.0, 0.0], [10.0, 0.0, 0.0]),
            arc(2),
            DrawingElement {
                id: SegmentId(3),
                category: "Walls".to_string(),
                geometry: Geometry::Line {
                    p1: [0.0, 0.0, 0.0],
                    p2: [1.0, 0.0, 0.0],
                },
            },
            DrawingElement::line(4, Category::Detail, [2.0, 0.0, 0.0], [6.0, 0.0, 0.0]),
        ])
        .expect("unique ids")
    }

    #[test]
    fn selection_skips_arcs_and_unknown_categories() {
        let selected = sample().select_lines();
        let ids: Vec<u64> = selected.iter().map(|s| s.id.0).collect();
        assert_eq!(ids, vec![1, 4]);
        assert_eq!(selected[0].category, Category::Model);
        assert_eq!(selected[1].category, Category::Detail);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Drawing::new(vec![
            DrawingElement::line(1, Category::Model, [0.0; 3], [1.0, 0.0, 0.0]),
            DrawingElement::line(1, Category::Model, [0.0; 3], [2.0, 0.0, 0.0]),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::DuplicateElement(SegmentId(1))));
    }

    #[test]
    fn delete_removes_named_elements() {
        let mut drawing = sample();
        let ids: BTreeSet<SegmentId> = [SegmentId(1), SegmentId(2)].into_iter().collect();
        assert_eq!(drawing.delete(&ids).unwrap(), 2);
        assert_eq!(drawing.len(), 2);
        assert!(!drawing.contains(SegmentId(1)));
        assert!(drawing.contains(SegmentId(4)));
    }

    #[test]
    fn deserializing_duplicate_ids_fails() {
        let json = r#"{"elements": [
            {"id": 1, "category": "Lines", "geometry": {"kind": "line", "p1": [0, 0, 0], "p2": [1, 0, 0]}},
            {"id": 1, "category": "Lines", "geometry": {"kind": "line", "p1": [0, 0, 0], "p2": [2, 0, 0]}}
        ]}"#;
        let err = serde_json::from_str::<Drawing>(json).unwrap_err();
        assert!(err.to_string().contains("#1 appears more than once"));
    }

    #[test]
    fn deleted_count_matches_ids_after_json_reload() {
        let json = serde_json::to_string(&sample()).unwrap();
        let mut drawing: Drawing = serde_json::from_str(&json).unwrap();
        assert_eq!(drawing, sample());
        let ids: BTreeSet<SegmentId> = [SegmentId(3), SegmentId(4)].into_iter().collect();
        assert_eq!(drawing.delete(&ids).unwrap(), ids.len());
        let kept: Vec<u64> = drawing.elements().iter().map(|e| e.id.0).collect();
        assert_eq!(kept, vec![1, 2]);
    }

    #[test]
    fn delete_is_all_or_nothing() {
        let mut drawing = sample();
        let ids: BTreeSet<SegmentId> = [SegmentId(1), SegmentId(99)].into_iter().collect();
        let err = drawing.delete(&ids).unwrap_err();
        assert!(matches!(err, Error::UnknownElement(SegmentId(99))));
        assert_eq!(drawing, sample());
    }

    #[test]
    fn geometry_json_is_tagged_by_kind() {
        let json = r#"{
            "id": 9,
            "category": "<Area Boundary>",
            "geometry": {"kind": "line", "p1": [0, 0, 0], "p2": [1, 2, 3]}
        }"#;
        let element: DrawingElement = serde_json::from_str(json).unwrap();
        let segment = element.as_segment().expect("line in known category");
        assert_eq!(segment.category, Category::AreaBoundary);
        assert_eq!(segment.p2, [1.0, 2.0, 3.0]);

        let value = serde_json::to_value(arc(2)).unwrap();
        assert_eq!(value["geometry"]["kind"], serde_json::json!("arc"));
    }
}
