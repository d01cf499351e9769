use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Shape;

/// A group owns its children; index order is paint order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupShape {
    pub id: Uuid,
    #[serde(default)]
    pub children: Vec<Shape>,
}

impl GroupShape {
    pub fn new(children: Vec<Shape>) -> Self {
        Self {
            id: Uuid::new_v4(),
            children,
        }
    }

    /// Rebuilds the group with every child replaced by `f(child)`.
    pub fn map_children(&self, f: impl FnMut(&Shape) -> Shape) -> GroupShape {
        GroupShape {
            id: self.id,
            children: self.children.iter().map(f).collect(),
        }
    }
}
