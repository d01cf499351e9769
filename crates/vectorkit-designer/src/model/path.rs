use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Anchor, Point, Style};

/// Pen and line shapes: an anchored bezier path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathShape {
    pub id: Uuid,
    #[serde(default)]
    pub style: Style,
    pub anchors: Vec<Anchor>,
    #[serde(default)]
    pub is_closed: bool,
}

impl PathShape {
    pub fn new(anchors: Vec<Anchor>, is_closed: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            style: Style::default(),
            anchors,
            is_closed,
        }
    }

    /// A fresh path shape that inherits `style`.
    pub fn derived(anchors: Vec<Anchor>, is_closed: bool, style: Style) -> Self {
        Self {
            style,
            ..Self::new(anchors, is_closed)
        }
    }
}

/// Raw freehand stroke as sampled from the pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrushShape {
    pub id: Uuid,
    #[serde(default)]
    pub style: Style,
    pub points: Vec<Point>,
}

impl BrushShape {
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            id: Uuid::new_v4(),
            style: Style::default(),
            points,
        }
    }
}

/// Three-point arc: `[start, end, via]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcShape {
    pub id: Uuid,
    #[serde(default)]
    pub style: Style,
    pub points: [Point; 3],
}

impl ArcShape {
    pub fn new(start: Point, end: Point, via: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            style: Style::default(),
            points: [start, end, via],
        }
    }

    pub fn start(&self) -> Point {
        self.points[0]
    }

    pub fn end(&self) -> Point {
        self.points[1]
    }

    pub fn via(&self) -> Point {
        self.points[2]
    }
}
