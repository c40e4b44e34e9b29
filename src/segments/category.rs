use serde::{Deserialize, Serialize};

/// Classification tag partitioning segments into independent groups.
///
/// Segments in different categories are never compared with each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Detail,
    Model,
    RoomSeparation,
    AreaBoundary,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Detail,
        Category::Model,
        Category::RoomSeparation,
        Category::AreaBoundary,
    ];

    /// Resolve a host category label. Unrecognized labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Detail Lines" => Some(Category::Detail),
            "Lines" => Some(Category::Model),
            "<Room Separation>" => Some(Category::RoomSeparation),
            "<Area Boundary>" => Some(Category::AreaBoundary),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Detail => "Detail Lines",
            Category::Model => "Lines",
            Category::RoomSeparation => "<Room Separation>",
            Category::AreaBoundary => "<Area Boundary>",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
