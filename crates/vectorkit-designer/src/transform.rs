//! Affine transforms over the shape tree.
//!
//! Each operation rebuilds the shape (and for groups, the whole subtree)
//! instead of editing it: the input is never touched.

use crate::model::{BoxFrame, GroupShape, PathShape, Point, Shape};

/// Rebuilds `shape` with every stored point mapped through `point_fn` and
/// every box geometry mapped through `frame_fn`.
fn map_geometry(
    shape: &Shape,
    point_fn: &dyn Fn(Point) -> Point,
    frame_fn: &dyn Fn(&BoxFrame) -> BoxFrame,
) -> Shape {
    match shape {
        Shape::Rectangle(_)
        | Shape::Ellipse(_)
        | Shape::Frame(_)
        | Shape::Polygon(_)
        | Shape::Image(_)
        | Shape::Text(_) => shape.map_frame(frame_fn),
        Shape::Pen(p) => Shape::Pen(map_path(p, point_fn)),
        Shape::Line(p) => Shape::Line(map_path(p, point_fn)),
        Shape::Brush(b) => {
            let mut brush = b.clone();
            brush.points = b.points.iter().map(|p| point_fn(*p)).collect();
            Shape::Brush(brush)
        }
        Shape::Arc(a) => {
            let mut arc = a.clone();
            arc.points = a.points.map(point_fn);
            Shape::Arc(arc)
        }
        Shape::Group(g) => Shape::Group(map_group(g, point_fn, frame_fn)),
    }
}

fn map_path(path: &PathShape, point_fn: &dyn Fn(Point) -> Point) -> PathShape {
    PathShape {
        anchors: path.anchors.iter().map(|a| a.map(point_fn)).collect(),
        ..path.clone()
    }
}

fn map_group(
    group: &GroupShape,
    point_fn: &dyn Fn(Point) -> Point,
    frame_fn: &dyn Fn(&BoxFrame) -> BoxFrame,
) -> GroupShape {
    group.map_children(|child| map_geometry(child, point_fn, frame_fn))
}

/// Translates a shape by `(dx, dy)`.
pub fn move_shape(shape: &Shape, dx: f64, dy: f64) -> Shape {
    if dx == 0.0 && dy == 0.0 {
        return shape.clone();
    }
    let offset = Point::new(dx, dy);
    map_geometry(shape, &|p| p + offset, &|f| BoxFrame {
        x: f.x + dx,
        y: f.y + dy,
        ..*f
    })
}

/// Rotates a shape by `angle` radians about `center`.
///
/// Box-shapes keep their size: their center orbits `center` and the angle
/// accumulates in `rotation`.
pub fn rotate(shape: &Shape, center: Point, angle: f64) -> Shape {
    if angle == 0.0 {
        return shape.clone();
    }
    map_geometry(shape, &|p| p.rotate_about(center, angle), &|f| {
        let moved = f.with_center(f.center().rotate_about(center, angle));
        BoxFrame {
            rotation: f.rotation + angle,
            ..moved
        }
    })
}

/// Scales a shape by `(sx, sy)` about `pivot`. Negative factors mirror.
///
/// Box sizes stay non-negative: the magnitude goes into `width`/`height`
/// and the sign into `scale_x`/`scale_y`. A mirror on exactly one axis
/// reverses the direction of `rotation`.
pub fn scale(shape: &Shape, pivot: Point, sx: f64, sy: f64) -> Shape {
    if sx == 1.0 && sy == 1.0 {
        return shape.clone();
    }
    map_geometry(shape, &|p| p.scale_about(pivot, sx, sy), &|f| {
        scale_frame(f, pivot, sx, sy)
    })
}

fn scale_frame(frame: &BoxFrame, pivot: Point, sx: f64, sy: f64) -> BoxFrame {
    let center = frame.center().scale_about(pivot, sx, sy);
    let mirrored_x = sx < 0.0;
    let mirrored_y = sy < 0.0;

    let resized = BoxFrame {
        width: frame.width * sx.abs(),
        height: frame.height * sy.abs(),
        scale_x: if mirrored_x { -frame.scale_x } else { frame.scale_x },
        scale_y: if mirrored_y { -frame.scale_y } else { frame.scale_y },
        rotation: if mirrored_x != mirrored_y {
            -frame.rotation
        } else {
            frame.rotation
        },
        ..*frame
    };
    resized.with_center(center)
}
