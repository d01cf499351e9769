//! Axis-aligned bounds on the canvas.

use std::f64::consts::FRAC_PI_2;

use lyon::geom::{point, CubicBezierSegment};

use crate::arc::arc_sweep;
use crate::convert::polygon_vertices;
use crate::model::{Anchor, ArcShape, BoxFrame, Point, Rect, Shape};

/// Canvas-space bounds of `shape`. With `include_stroke` the box grows by
/// half the stroke width on every side. Empty groups and paths have none.
pub fn bounding_box(shape: &Shape, include_stroke: bool) -> Option<Rect> {
    let rect = match shape {
        Shape::Rectangle(s) | Shape::Frame(s) => frame_bounds(&s.frame),
        Shape::Image(s) => frame_bounds(&s.frame),
        Shape::Text(s) => frame_bounds(&s.frame),
        Shape::Ellipse(s) => Some(ellipse_bounds(&s.frame)),
        Shape::Polygon(s) => Rect::from_points(polygon_vertices(&s.frame, s.sides)),
        Shape::Pen(p) | Shape::Line(p) => path_bounds(&p.anchors, p.is_closed),
        Shape::Brush(b) => Rect::from_points(b.points.iter().copied()),
        Shape::Arc(a) => Some(arc_bounds(a)),
        Shape::Group(g) => return bounding_box_of(&g.children, include_stroke),
    }?;

    match shape.style() {
        Some(style) if include_stroke => Some(rect.inflate(style.stroke_width / 2.0)),
        _ => Some(rect),
    }
}

/// Union of the bounds of `shapes`.
pub fn bounding_box_of(shapes: &[Shape], include_stroke: bool) -> Option<Rect> {
    shapes
        .iter()
        .filter_map(|s| bounding_box(s, include_stroke))
        .reduce(|acc, r| acc.union(&r))
}

fn frame_bounds(frame: &BoxFrame) -> Option<Rect> {
    if frame.rotation == 0.0 {
        return Some(frame.local_rect());
    }
    Rect::from_points(frame.corners())
}

fn ellipse_bounds(frame: &BoxFrame) -> Rect {
    if frame.rotation == 0.0 {
        return frame.local_rect();
    }
    let c = frame.center();
    let rx = frame.width / 2.0;
    let ry = frame.height / 2.0;
    let (sin, cos) = frame.rotation.sin_cos();
    let hx = ((rx * cos).powi(2) + (ry * sin).powi(2)).sqrt();
    let hy = ((rx * sin).powi(2) + (ry * cos).powi(2)).sqrt();
    Rect::from_min_max(Point::new(c.x - hx, c.y - hy), Point::new(c.x + hx, c.y + hy))
}

fn segment_bounds(from: &Anchor, to: &Anchor) -> Rect {
    let curve = CubicBezierSegment {
        from: point(from.point.x, from.point.y),
        ctrl1: point(from.handle_out.x, from.handle_out.y),
        ctrl2: point(to.handle_in.x, to.handle_in.y),
        to: point(to.point.x, to.point.y),
    };
    let b = curve.bounding_box();
    Rect::from_min_max(Point::new(b.min.x, b.min.y), Point::new(b.max.x, b.max.y))
}

/// Tight bounds of the bezier outline, not of the control polygon.
fn path_bounds(anchors: &[Anchor], closed: bool) -> Option<Rect> {
    let first = anchors.first()?;
    let mut rect = Rect::new(first.point.x, first.point.y, 0.0, 0.0);
    for pair in anchors.windows(2) {
        rect = rect.union(&segment_bounds(&pair[0], &pair[1]));
    }
    if let (true, Some(last)) = (closed && anchors.len() > 1, anchors.last()) {
        rect = rect.union(&segment_bounds(last, first));
    }
    Some(rect)
}

/// Endpoints plus every axis extreme of the circle that lies on the arc.
fn arc_bounds(arc: &ArcShape) -> Rect {
    let ends = [arc.start(), arc.end()];
    let extremes: Vec<Point> = match arc_sweep(arc.start(), arc.end(), arc.via()) {
        Some(sweep) => (-4..=4)
            .map(|k| f64::from(k) * FRAC_PI_2)
            .filter(|angle| sweep.contains_angle(*angle))
            .map(|angle| sweep.circle.point_at(angle))
            .collect(),
        None => Vec::new(),
    };
    let from_ends = Rect::from_min_max(
        Point::new(ends[0].x.min(ends[1].x), ends[0].y.min(ends[1].y)),
        Point::new(ends[0].x.max(ends[1].x), ends[0].y.max(ends[1].y)),
    );
    extremes
        .into_iter()
        .fold(from_ends, |acc, p| acc.union(&Rect::new(p.x, p.y, 0.0, 0.0)))
}
