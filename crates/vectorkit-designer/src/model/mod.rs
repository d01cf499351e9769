//! Shape model: the vocabulary every kernel operation works over.
//!
//! Shapes are immutable values. Every kernel operation takes a shape by
//! reference and returns a new one; nothing in this module mutates shared
//! state.

use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

mod box_shape;
mod group;
mod path;

pub use box_shape::{BoxFrame, BoxShape, ImageShape, PolygonShape, TextShape};
pub use group::GroupShape;
pub use path::{ArcShape, BrushShape, PathShape};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn dot(&self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product.
    pub fn cross(&self, other: Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn lerp(&self, other: Point, t: f64) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// Rotates this point by `angle` radians about `center`.
    pub fn rotate_about(&self, center: Point, angle: f64) -> Point {
        if angle == 0.0 {
            return *self;
        }
        let (s, c) = angle.sin_cos();
        let dx = self.x - center.x;
        let dy = self.y - center.y;
        Point {
            x: center.x + dx * c - dy * s,
            y: center.y + dx * s + dy * c,
        }
    }

    /// Scales this point's offset from `pivot` by `(sx, sy)`.
    pub fn scale_about(&self, pivot: Point, sx: f64, sy: f64) -> Point {
        Point {
            x: pivot.x + (self.x - pivot.x) * sx,
            y: pivot.y + (self.y - pivot.y) * sy,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

/// A cubic-bezier control vertex. Handles are absolute positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawAnchor")]
pub struct Anchor {
    pub point: Point,
    pub handle_in: Point,
    pub handle_out: Point,
}

/// Serialized anchors may omit their handles; they default to the point.
#[derive(Deserialize)]
struct RawAnchor {
    point: Point,
    handle_in: Option<Point>,
    handle_out: Option<Point>,
}

impl From<RawAnchor> for Anchor {
    fn from(raw: RawAnchor) -> Self {
        Anchor {
            point: raw.point,
            handle_in: raw.handle_in.unwrap_or(raw.point),
            handle_out: raw.handle_out.unwrap_or(raw.point),
        }
    }
}

impl Anchor {
    pub fn new(point: Point, handle_in: Point, handle_out: Point) -> Self {
        Self {
            point,
            handle_in,
            handle_out,
        }
    }

    /// An uncurved vertex whose handles sit on the point itself.
    pub fn corner(point: Point) -> Self {
        Self::new(point, point, point)
    }

    pub fn is_corner(&self) -> bool {
        self.handle_in == self.point && self.handle_out == self.point
    }

    /// Applies `f` to the point and both handles.
    pub fn map(&self, f: impl Fn(Point) -> Point) -> Anchor {
        Anchor {
            point: f(self.point),
            handle_in: f(self.handle_in),
            handle_out: f(self.handle_out),
        }
    }

    fn normalized(&self) -> Anchor {
        let fix = |h: Point| if h.is_finite() { h } else { self.point };
        Anchor {
            point: self.point,
            handle_in: fix(self.handle_in),
            handle_out: fix(self.handle_out),
        }
    }
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_min_max(min: Point, max: Point) -> Self {
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Smallest rectangle containing every point, or `None` for no points.
    pub fn from_points<I: IntoIterator<Item = Point>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        Some(Self::from_min_max(min, max))
    }

    pub fn min_x(&self) -> f64 {
        self.x
    }

    pub fn min_y(&self) -> f64 {
        self.y
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn union(&self, other: &Rect) -> Rect {
        Rect::from_min_max(
            Point::new(self.min_x().min(other.min_x()), self.min_y().min(other.min_y())),
            Point::new(self.max_x().max(other.max_x()), self.max_y().max(other.max_y())),
        )
    }

    pub fn inflate(&self, amount: f64) -> Rect {
        Rect::new(
            self.x - amount,
            self.y - amount,
            self.width + amount * 2.0,
            self.height + amount * 2.0,
        )
    }
}

/// Non-geometric presentation fields, inherited by derived shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub stroke_color: String,
    pub fill_color: Option<String>,
    pub stroke_width: f64,
    pub opacity: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke_color: "#000000".to_string(),
            fill_color: None,
            stroke_width: 2.0,
            opacity: 1.0,
        }
    }
}

/// The variant tag of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    Rectangle,
    Ellipse,
    Frame,
    Polygon,
    Image,
    Text,
    Pen,
    Line,
    Brush,
    Arc,
    Group,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tool", rename_all = "lowercase")]
pub enum Shape {
    Rectangle(BoxShape),
    Ellipse(BoxShape),
    Frame(BoxShape),
    Polygon(PolygonShape),
    Image(ImageShape),
    Text(TextShape),
    Pen(PathShape),
    Line(PathShape),
    Brush(BrushShape),
    Arc(ArcShape),
    Group(GroupShape),
}

impl Shape {
    pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> Self {
        Shape::Rectangle(BoxShape::new(x, y, width, height))
    }

    pub fn ellipse(x: f64, y: f64, width: f64, height: f64) -> Self {
        Shape::Ellipse(BoxShape::new(x, y, width, height))
    }

    pub fn frame(x: f64, y: f64, width: f64, height: f64) -> Self {
        Shape::Frame(BoxShape::new(x, y, width, height))
    }

    pub fn polygon(x: f64, y: f64, width: f64, height: f64, sides: u32) -> Self {
        Shape::Polygon(PolygonShape::new(x, y, width, height, sides))
    }

    pub fn image(x: f64, y: f64, width: f64, height: f64, data: Vec<u8>) -> Self {
        Shape::Image(ImageShape::new(x, y, width, height, data))
    }

    pub fn text(x: f64, y: f64, width: f64, height: f64, text: impl Into<String>) -> Self {
        Shape::Text(TextShape::new(x, y, width, height, text))
    }

    pub fn pen(anchors: Vec<Anchor>, is_closed: bool) -> Self {
        Shape::Pen(PathShape::new(anchors, is_closed))
    }

    pub fn line(anchors: Vec<Anchor>, is_closed: bool) -> Self {
        Shape::Line(PathShape::new(anchors, is_closed))
    }

    pub fn brush(points: Vec<Point>) -> Self {
        Shape::Brush(BrushShape::new(points))
    }

    pub fn arc(start: Point, end: Point, via: Point) -> Self {
        Shape::Arc(ArcShape::new(start, end, via))
    }

    pub fn group(children: Vec<Shape>) -> Self {
        Shape::Group(GroupShape::new(children))
    }

    pub fn tool(&self) -> Tool {
        match self {
            Shape::Rectangle(_) => Tool::Rectangle,
            Shape::Ellipse(_) => Tool::Ellipse,
            Shape::Frame(_) => Tool::Frame,
            Shape::Polygon(_) => Tool::Polygon,
            Shape::Image(_) => Tool::Image,
            Shape::Text(_) => Tool::Text,
            Shape::Pen(_) => Tool::Pen,
            Shape::Line(_) => Tool::Line,
            Shape::Brush(_) => Tool::Brush,
            Shape::Arc(_) => Tool::Arc,
            Shape::Group(_) => Tool::Group,
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            Shape::Rectangle(s) | Shape::Ellipse(s) | Shape::Frame(s) => s.id,
            Shape::Polygon(s) => s.id,
            Shape::Image(s) => s.id,
            Shape::Text(s) => s.id,
            Shape::Pen(s) | Shape::Line(s) => s.id,
            Shape::Brush(s) => s.id,
            Shape::Arc(s) => s.id,
            Shape::Group(s) => s.id,
        }
    }

    /// Returns a copy of this shape carrying `id`.
    pub fn with_id(&self, id: Uuid) -> Shape {
        let mut shape = self.clone();
        match &mut shape {
            Shape::Rectangle(s) | Shape::Ellipse(s) | Shape::Frame(s) => s.id = id,
            Shape::Polygon(s) => s.id = id,
            Shape::Image(s) => s.id = id,
            Shape::Text(s) => s.id = id,
            Shape::Pen(s) | Shape::Line(s) => s.id = id,
            Shape::Brush(s) => s.id = id,
            Shape::Arc(s) => s.id = id,
            Shape::Group(s) => s.id = id,
        }
        shape
    }

    /// Style of a drawable shape; groups have none.
    pub fn style(&self) -> Option<&Style> {
        match self {
            Shape::Rectangle(s) | Shape::Ellipse(s) | Shape::Frame(s) => Some(&s.style),
            Shape::Polygon(s) => Some(&s.style),
            Shape::Image(s) => Some(&s.style),
            Shape::Text(s) => Some(&s.style),
            Shape::Pen(s) | Shape::Line(s) => Some(&s.style),
            Shape::Brush(s) => Some(&s.style),
            Shape::Arc(s) => Some(&s.style),
            Shape::Group(_) => None,
        }
    }

    /// The box geometry of a box-shape.
    pub fn frame_geometry(&self) -> Option<&BoxFrame> {
        match self {
            Shape::Rectangle(s) | Shape::Ellipse(s) | Shape::Frame(s) => Some(&s.frame),
            Shape::Polygon(s) => Some(&s.frame),
            Shape::Image(s) => Some(&s.frame),
            Shape::Text(s) => Some(&s.frame),
            Shape::Pen(_) | Shape::Line(_) | Shape::Brush(_) | Shape::Arc(_) | Shape::Group(_) => {
                None
            }
        }
    }

    /// Returns a copy with the box geometry replaced by `f(frame)`.
    /// Shapes without a box are returned unchanged.
    pub fn map_frame(&self, f: impl FnOnce(&BoxFrame) -> BoxFrame) -> Shape {
        let mut shape = self.clone();
        match &mut shape {
            Shape::Rectangle(s) | Shape::Ellipse(s) | Shape::Frame(s) => s.frame = f(&s.frame),
            Shape::Polygon(s) => s.frame = f(&s.frame),
            Shape::Image(s) => s.frame = f(&s.frame),
            Shape::Text(s) => s.frame = f(&s.frame),
            Shape::Pen(_) | Shape::Line(_) | Shape::Brush(_) | Shape::Arc(_) | Shape::Group(_) => {}
        }
        shape
    }

    /// Rotation in radians; zero for shapes without a box.
    pub fn rotation(&self) -> f64 {
        self.frame_geometry().map_or(0.0, |f| f.rotation)
    }

    pub fn children(&self) -> &[Shape] {
        match self {
            Shape::Group(g) => &g.children,
            _ => &[],
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Shape::Group(_))
    }

    /// True if this shape (or any descendant) holds raster content.
    pub fn contains_image(&self) -> bool {
        match self {
            Shape::Image(_) => true,
            Shape::Group(g) => g.children.iter().any(Shape::contains_image),
            _ => false,
        }
    }

    /// Checks the model invariants: non-negative box sizes, finite anchor
    /// handles, arc triples, and the same for every descendant.
    pub fn is_valid(&self) -> bool {
        match self {
            Shape::Pen(p) | Shape::Line(p) => p
                .anchors
                .iter()
                .all(|a| a.point.is_finite() && a.handle_in.is_finite() && a.handle_out.is_finite()),
            Shape::Group(g) => g.children.iter().all(Shape::is_valid),
            Shape::Brush(b) => b.points.iter().all(Point::is_finite),
            Shape::Arc(a) => a.points.iter().all(Point::is_finite),
            Shape::Rectangle(_)
            | Shape::Ellipse(_)
            | Shape::Frame(_)
            | Shape::Polygon(_)
            | Shape::Image(_)
            | Shape::Text(_) => self.frame_geometry().is_some_and(BoxFrame::is_valid),
        }
    }

    /// Returns a copy satisfying the model invariants. Negative box sizes are
    /// folded into the mirror sign and non-finite handles snap to their point.
    pub fn normalized(&self) -> Shape {
        match self {
            Shape::Pen(p) | Shape::Line(p) => {
                let anchors = p.anchors.iter().map(Anchor::normalized).collect();
                let path = PathShape {
                    anchors,
                    ..p.clone()
                };
                if matches!(self, Shape::Pen(_)) {
                    Shape::Pen(path)
                } else {
                    Shape::Line(path)
                }
            }
            Shape::Group(g) => Shape::Group(GroupShape {
                children: g.children.iter().map(Shape::normalized).collect(),
                ..g.clone()
            }),
            Shape::Brush(_) | Shape::Arc(_) => self.clone(),
            Shape::Rectangle(_)
            | Shape::Ellipse(_)
            | Shape::Frame(_)
            | Shape::Polygon(_)
            | Shape::Image(_)
            | Shape::Text(_) => self.map_frame(BoxFrame::normalized),
        }
    }
}
