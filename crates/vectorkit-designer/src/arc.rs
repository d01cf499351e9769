//! Three-point arc geometry.
//!
//! An arc shape stores `[start, end, via]`. The circle through the three
//! points is solved with the determinant formula; collinear or nearly
//! collinear triples have no usable circle and degrade to a straight segment
//! everywhere an arc is consumed.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use tracing::trace;

use crate::model::{Anchor, Point};

/// Below this determinant the three points are treated as collinear.
pub const COLLINEAR_EPSILON: f64 = 1e-10;

/// Circles larger than this are numerically meaningless for an editor canvas.
pub const MAX_RADIUS: f64 = 1e6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn point_at(&self, angle: f64) -> Point {
        Point::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }

    pub fn angle_of(&self, p: Point) -> f64 {
        (p.y - self.center.y).atan2(p.x - self.center.x)
    }
}

/// The circle through three points, or `None` for degenerate input.
pub fn circumcircle(p1: Point, p2: Point, p3: Point) -> Option<Circle> {
    let d = 2.0 * (p1.x * (p2.y - p3.y) + p2.x * (p3.y - p1.y) + p3.x * (p1.y - p2.y));
    if d.abs() < COLLINEAR_EPSILON {
        trace!(det = d, "circumcircle: collinear points");
        return None;
    }

    let s1 = p1.x * p1.x + p1.y * p1.y;
    let s2 = p2.x * p2.x + p2.y * p2.y;
    let s3 = p3.x * p3.x + p3.y * p3.y;

    let ux = (s1 * (p2.y - p3.y) + s2 * (p3.y - p1.y) + s3 * (p1.y - p2.y)) / d;
    let uy = (s1 * (p3.x - p2.x) + s2 * (p1.x - p3.x) + s3 * (p2.x - p1.x)) / d;
    let center = Point::new(ux, uy);
    let radius = center.distance_to(&p1);

    if !radius.is_finite() || radius > MAX_RADIUS {
        trace!(radius, "circumcircle: radius out of range");
        return None;
    }

    Some(Circle { center, radius })
}

/// Parameterization of the arc from `start` to `end` that passes through
/// `via`: the circle, the start angle, and the signed angular extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSweep {
    pub circle: Circle,
    pub start_angle: f64,
    /// Positive when the arc runs in the angle-increasing direction.
    pub delta: f64,
}

impl ArcSweep {
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.delta
    }

    /// Whether `angle` falls inside the swept interval.
    pub fn contains_angle(&self, angle: f64) -> bool {
        let rel = angle - self.start_angle;
        if self.delta >= 0.0 {
            rel.rem_euclid(TAU) <= self.delta
        } else {
            let r = rel.rem_euclid(TAU);
            let neg = if r == 0.0 { 0.0 } else { r - TAU };
            neg >= self.delta
        }
    }
}

/// Wraps an angle into `(-pi, pi]`.
fn normalize_pi(angle: f64) -> f64 {
    let r = angle.rem_euclid(TAU);
    if r > PI {
        r - TAU
    } else {
        r
    }
}

pub fn arc_sweep(start: Point, end: Point, via: Point) -> Option<ArcSweep> {
    let circle = circumcircle(start, end, via)?;
    let a1 = circle.angle_of(start);
    let a2 = circle.angle_of(end);
    let a3 = circle.angle_of(via);

    let short = ArcSweep {
        circle,
        start_angle: a1,
        delta: normalize_pi(a2 - a1),
    };
    if short.contains_angle(a3) {
        return Some(short);
    }

    let delta = if short.delta >= 0.0 {
        short.delta - TAU
    } else {
        short.delta + TAU
    };
    Some(ArcSweep { delta, ..short })
}

/// SVG-style description of a three-point arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArcPath {
    Arc {
        start: Point,
        end: Point,
        radius: f64,
        large_arc: bool,
        sweep: bool,
    },
    Line {
        start: Point,
        end: Point,
    },
}

impl ArcPath {
    /// SVG path data, e.g. `M 0 0 A 1 1 0 0 0 2 0`.
    pub fn to_svg(&self) -> String {
        match self {
            ArcPath::Arc {
                start,
                end,
                radius,
                large_arc,
                sweep,
            } => format!(
                "M {} {} A {} {} 0 {} {} {} {}",
                start.x,
                start.y,
                radius,
                radius,
                u8::from(*large_arc),
                u8::from(*sweep),
                end.x,
                end.y
            ),
            ArcPath::Line { start, end } => {
                format!("M {} {} L {} {}", start.x, start.y, end.x, end.y)
            }
        }
    }
}

pub fn arc_path(start: Point, end: Point, via: Point) -> ArcPath {
    let Some(circle) = circumcircle(start, end, via) else {
        return ArcPath::Line { start, end };
    };

    // Y-down canvas: a negative cross product means `via` sits on the side
    // reached by increasing angles.
    let sweep = (end - start).cross(via - start) < 0.0;

    let step = |from: f64, to: f64| {
        let d = to - from;
        if sweep {
            d.rem_euclid(TAU)
        } else {
            -(-d).rem_euclid(TAU)
        }
    };

    let a1 = circle.angle_of(start);
    let a2 = circle.angle_of(end);
    let a3 = circle.angle_of(via);
    let total = step(a1, a3) + step(a3, a2);

    ArcPath::Arc {
        start,
        end,
        radius: circle.radius,
        large_arc: total.abs() > PI,
        sweep,
    }
}

/// Discretizes the arc into `steps + 1` points for rough rendering.
pub fn sample_arc(start: Point, end: Point, via: Point, steps: usize) -> Vec<Point> {
    let Some(sweep) = arc_sweep(start, end, via) else {
        return vec![start, end];
    };

    let steps = steps.max(1);
    (0..=steps)
        .map(|i| {
            if i == 0 {
                start
            } else if i == steps {
                end
            } else {
                let t = i as f64 / steps as f64;
                sweep.circle.point_at(sweep.start_angle + sweep.delta * t)
            }
        })
        .collect()
}

/// Cubic bezier approximation of the arc, split into pieces of at most a
/// quarter turn. Degenerate arcs become a straight two-anchor segment.
pub fn arc_anchors(start: Point, end: Point, via: Point) -> Vec<Anchor> {
    let Some(sweep) = arc_sweep(start, end, via) else {
        return vec![Anchor::corner(start), Anchor::corner(end)];
    };

    let segments = ((sweep.delta.abs() / FRAC_PI_2).ceil() as usize).max(1);
    let dt = sweep.delta / segments as f64;
    let k = 4.0 / 3.0 * (dt / 4.0).tan() * sweep.circle.radius;

    let tangent = |angle: f64| Point::new(-angle.sin(), angle.cos());

    let mut anchors = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        let angle = sweep.start_angle + dt * i as f64;
        let point = if i == 0 {
            start
        } else if i == segments {
            end
        } else {
            sweep.circle.point_at(angle)
        };
        let t = tangent(angle) * k;
        let handle_in = if i == 0 { point } else { point - t };
        let handle_out = if i == segments { point } else { point + t };
        anchors.push(Anchor::new(point, handle_in, handle_out));
    }
    anchors
}
