use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Point, Rect, Style};

/// Position, size, and orientation of a box-shape.
///
/// `rotation` is in radians about the box center. `width`/`height` never go
/// negative; a mirrored box carries a negative `scale_x`/`scale_y` instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxFrame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default = "unit_scale")]
    pub scale_x: f64,
    #[serde(default = "unit_scale")]
    pub scale_y: f64,
}

fn unit_scale() -> f64 {
    1.0
}

impl BoxFrame {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Same size and orientation, re-positioned so its center is `center`.
    pub fn with_center(&self, center: Point) -> BoxFrame {
        BoxFrame {
            x: center.x - self.width / 2.0,
            y: center.y - self.height / 2.0,
            ..*self
        }
    }

    /// The unrotated box.
    pub fn local_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Maps a point given in the unrotated box space onto the canvas:
    /// mirror by the scale signs, then rotate, both about the center.
    pub fn to_world(&self, p: Point) -> Point {
        let c = self.center();
        let mut mirrored = p;
        if self.scale_x < 0.0 {
            mirrored.x = 2.0 * c.x - p.x;
        }
        if self.scale_y < 0.0 {
            mirrored.y = 2.0 * c.y - p.y;
        }
        mirrored.rotate_about(c, self.rotation)
    }

    /// The four corners on the canvas, clockwise from the top-left.
    pub fn corners(&self) -> [Point; 4] {
        let r = self.local_rect();
        [
            Point::new(r.min_x(), r.min_y()),
            Point::new(r.max_x(), r.min_y()),
            Point::new(r.max_x(), r.max_y()),
            Point::new(r.min_x(), r.max_y()),
        ]
        .map(|p| self.to_world(p))
    }

    pub fn is_valid(&self) -> bool {
        self.width >= 0.0
            && self.height >= 0.0
            && [self.x, self.y, self.width, self.height, self.rotation]
                .iter()
                .all(|v| v.is_finite())
    }

    pub fn normalized(&self) -> BoxFrame {
        let mut frame = *self;
        if frame.width < 0.0 {
            frame.x += frame.width;
            frame.width = -frame.width;
            frame.scale_x = -frame.scale_x;
        }
        if frame.height < 0.0 {
            frame.y += frame.height;
            frame.height = -frame.height;
            frame.scale_y = -frame.scale_y;
        }
        frame
    }
}

/// Rectangle, ellipse and frame shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxShape {
    pub id: Uuid,
    #[serde(default)]
    pub style: Style,
    pub frame: BoxFrame,
}

impl BoxShape {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            style: Style::default(),
            frame: BoxFrame::new(x, y, width, height),
        }
    }
}

/// A regular polygon inscribed in its box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonShape {
    pub id: Uuid,
    #[serde(default)]
    pub style: Style,
    pub frame: BoxFrame,
    pub sides: u32,
}

impl PolygonShape {
    pub fn new(x: f64, y: f64, width: f64, height: f64, sides: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            style: Style::default(),
            frame: BoxFrame::new(x, y, width, height),
            sides,
        }
    }
}

/// A raster image placed in a box. `data` holds the encoded file bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageShape {
    pub id: Uuid,
    #[serde(default)]
    pub style: Style,
    pub frame: BoxFrame,
    pub data: Vec<u8>,
    /// Visible window in the image's local, unrotated space.
    #[serde(default)]
    pub crop: Option<Rect>,
}

impl ImageShape {
    pub fn new(x: f64, y: f64, width: f64, height: f64, data: Vec<u8>) -> Self {
        Self {
            id: Uuid::new_v4(),
            style: Style::default(),
            frame: BoxFrame::new(x, y, width, height),
            data,
            crop: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextShape {
    pub id: Uuid,
    #[serde(default)]
    pub style: Style,
    pub frame: BoxFrame,
    pub text: String,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
}

fn default_font_size() -> f64 {
    16.0
}

impl TextShape {
    pub fn new(x: f64, y: f64, width: f64, height: f64, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            style: Style::default(),
            frame: BoxFrame::new(x, y, width, height),
            text: text.into(),
            font_size: default_font_size(),
        }
    }
}
