//! Conversion of any drawable shape into an anchored bezier path.
//!
//! The result is always a fresh `pen` path carrying the source style. Groups
//! have no single outline and do not convert.

use std::f64::consts::{FRAC_PI_2, TAU};

use lyon::math::point;
use lyon::path::Path;
use tracing::trace;

use crate::arc::arc_anchors;
use crate::fitting::{fit_freehand, smooth_anchors};
use crate::model::{Anchor, BoxFrame, PathShape, Point, Shape};

/// Handle length ratio for a quarter-circle cubic.
pub const KAPPA: f64 = 0.5522847498;

/// Smallest polygon the editor draws.
pub const MIN_POLYGON_SIDES: u32 = 3;

/// Canvas positions of a regular polygon inscribed in `frame`, starting at
/// the top and running clockwise.
pub fn polygon_vertices(frame: &BoxFrame, sides: u32) -> Vec<Point> {
    let sides = sides.max(MIN_POLYGON_SIDES);
    let c = frame.center();
    let rx = frame.width / 2.0;
    let ry = frame.height / 2.0;
    (0..sides)
        .map(|i| {
            let angle = -FRAC_PI_2 + TAU * f64::from(i) / f64::from(sides);
            frame.to_world(Point::new(c.x + rx * angle.cos(), c.y + ry * angle.sin()))
        })
        .collect()
}

fn rect_anchors(frame: &BoxFrame) -> Vec<Anchor> {
    frame.corners().into_iter().map(Anchor::corner).collect()
}

fn ellipse_anchors(frame: &BoxFrame) -> Vec<Anchor> {
    let c = frame.center();
    let rx = frame.width / 2.0;
    let ry = frame.height / 2.0;
    let kx = rx * KAPPA;
    let ky = ry * KAPPA;

    // top, right, bottom, left
    let local = [
        Anchor::new(
            Point::new(c.x, c.y - ry),
            Point::new(c.x - kx, c.y - ry),
            Point::new(c.x + kx, c.y - ry),
        ),
        Anchor::new(
            Point::new(c.x + rx, c.y),
            Point::new(c.x + rx, c.y - ky),
            Point::new(c.x + rx, c.y + ky),
        ),
        Anchor::new(
            Point::new(c.x, c.y + ry),
            Point::new(c.x + kx, c.y + ry),
            Point::new(c.x - kx, c.y + ry),
        ),
        Anchor::new(
            Point::new(c.x - rx, c.y),
            Point::new(c.x - rx, c.y + ky),
            Point::new(c.x - rx, c.y - ky),
        ),
    ];
    local.iter().map(|a| a.map(|p| frame.to_world(p))).collect()
}

/// Converts `shape` into path geometry, or `None` for groups.
pub fn to_path(shape: &Shape) -> Option<PathShape> {
    let (anchors, closed) = match shape {
        Shape::Rectangle(s) | Shape::Frame(s) => (rect_anchors(&s.frame), true),
        Shape::Image(s) => (rect_anchors(&s.frame), true),
        Shape::Text(s) => (rect_anchors(&s.frame), true),
        Shape::Ellipse(s) => (ellipse_anchors(&s.frame), true),
        Shape::Polygon(s) => (
            polygon_vertices(&s.frame, s.sides)
                .into_iter()
                .map(Anchor::corner)
                .collect(),
            true,
        ),
        Shape::Arc(s) => (arc_anchors(s.start(), s.end(), s.via()), false),
        Shape::Brush(s) => (fit_freehand(&s.points, s.style.stroke_width), false),
        Shape::Line(s) => (smooth_anchors(&s.anchors, s.is_closed), s.is_closed),
        Shape::Pen(s) => (s.anchors.clone(), s.is_closed),
        Shape::Group(g) => {
            trace!(id = %g.id, "to_path: groups have no outline");
            return None;
        }
    };
    let style = shape.style().cloned().unwrap_or_default();
    Some(PathShape::derived(anchors, closed, style))
}

/// Same as [`to_path`], wrapped as a `pen` shape.
pub fn convert_to_path(shape: &Shape) -> Option<Shape> {
    to_path(shape).map(Shape::Pen)
}

/// Builds a lyon path from anchors. Segments whose handles sit on their
/// endpoints become straight lines.
pub fn to_lyon_path(anchors: &[Anchor], closed: bool) -> Path {
    let mut builder = Path::builder();
    let Some(first) = anchors.first() else {
        return builder.build();
    };
    let to_lyon = |p: Point| point(p.x as f32, p.y as f32);

    builder.begin(to_lyon(first.point));
    let mut segment = |from: &Anchor, to: &Anchor| {
        if from.handle_out == from.point && to.handle_in == to.point {
            builder.line_to(to_lyon(to.point));
        } else {
            builder.cubic_bezier_to(
                to_lyon(from.handle_out),
                to_lyon(to.handle_in),
                to_lyon(to.point),
            );
        }
    };
    for pair in anchors.windows(2) {
        segment(&pair[0], &pair[1]);
    }
    let closes = closed && anchors.len() > 1;
    if let (true, Some(last)) = (closes, anchors.last()) {
        segment(last, first);
    }
    builder.end(closes);
    builder.build()
}
