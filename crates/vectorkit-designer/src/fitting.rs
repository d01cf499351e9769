//! Curve fitting: anchor simplification and freehand smoothing.

use tracing::trace;

use crate::model::{Anchor, Point};

/// Freehand strokes are simplified with `stroke_width * FREEHAND_TOLERANCE_FACTOR`.
pub const FREEHAND_TOLERANCE_FACTOR: f64 = 1.5;

/// Handle length as a fraction of the distance to the neighbouring anchor.
const SMOOTHING: f64 = 1.0 / 3.0;

/// Squared distance from `p` to the segment `a..b`.
fn segment_dist2(p: Point, a: Point, b: Point) -> f64 {
    let v = b - a;
    let w = p - a;
    let vv = v.dot(v);
    if vv == 0.0 {
        return w.dot(w);
    }
    let t = (w.dot(v) / vv).clamp(0.0, 1.0);
    let d = p - (a + v * t);
    d.dot(d)
}

/// Indices of the points kept by Ramer-Douglas-Peucker at `tolerance`.
/// The first and last points always survive.
fn rdp_indices(points: &[Point], tolerance: f64) -> Vec<usize> {
    let n = points.len();
    if n <= 2 {
        return (0..n).collect();
    }

    let tol2 = tolerance * tolerance;
    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;

    let mut stack = vec![(0usize, n - 1)];
    while let Some((first, last)) = stack.pop() {
        if last <= first + 1 {
            continue;
        }
        let (a, b) = (points[first], points[last]);
        let mut idx = first;
        let mut max_d2 = 0.0f64;
        for (i, p) in points.iter().enumerate().take(last).skip(first + 1) {
            let d2 = segment_dist2(*p, a, b);
            if d2 > max_d2 {
                max_d2 = d2;
                idx = i;
            }
        }
        if max_d2 > tol2 {
            keep[idx] = true;
            stack.push((first, idx));
            stack.push((idx, last));
        }
    }

    keep.iter()
        .enumerate()
        .filter_map(|(i, k)| k.then_some(i))
        .collect()
}

/// Drops anchors that lie within `tolerance` of the chord between their
/// surviving neighbours. Kept anchors retain their handles, so simplifying
/// an already simplified list changes nothing.
pub fn simplify(anchors: &[Anchor], tolerance: f64) -> Vec<Anchor> {
    if tolerance.is_nan() || tolerance <= 0.0 {
        return anchors.to_vec();
    }
    let points: Vec<Point> = anchors.iter().map(|a| a.point).collect();
    let kept = rdp_indices(&points, tolerance);
    trace!(before = anchors.len(), after = kept.len(), "simplify");
    kept.into_iter().map(|i| anchors[i]).collect()
}

/// Turns sampled pointer positions into a smooth open bezier path.
pub fn fit_freehand(points: &[Point], stroke_width: f64) -> Vec<Anchor> {
    let mut samples: Vec<Point> = points.to_vec();
    samples.dedup();
    if samples.len() < 2 {
        return samples.into_iter().map(Anchor::corner).collect();
    }

    let tolerance = stroke_width.abs() * FREEHAND_TOLERANCE_FACTOR;
    let reduced: Vec<Point> = if tolerance > 0.0 {
        rdp_indices(&samples, tolerance)
            .into_iter()
            .map(|i| samples[i])
            .collect()
    } else {
        samples
    };

    let corners: Vec<Anchor> = reduced.into_iter().map(Anchor::corner).collect();
    smooth_anchors(&corners, false)
}

/// Gives every interior anchor tangent-continuous handles.
///
/// The tangent at an anchor is the direction from its previous to its next
/// neighbour; each handle reaches a third of the way to that neighbour.
/// Endpoints of an open path stay corners.
pub fn smooth_anchors(anchors: &[Anchor], closed: bool) -> Vec<Anchor> {
    let n = anchors.len();
    if n < 3 {
        return anchors.iter().map(|a| Anchor::corner(a.point)).collect();
    }

    (0..n)
        .map(|i| {
            let p = anchors[i].point;
            let prev = match i {
                0 if closed => Some(anchors[n - 1].point),
                0 => None,
                _ => Some(anchors[i - 1].point),
            };
            let next = if i + 1 < n {
                Some(anchors[i + 1].point)
            } else if closed {
                Some(anchors[0].point)
            } else {
                None
            };

            let (Some(prev), Some(next)) = (prev, next) else {
                return Anchor::corner(p);
            };
            let tangent = next - prev;
            let len = tangent.length();
            if len == 0.0 {
                return Anchor::corner(p);
            }
            let dir = tangent * (1.0 / len);
            Anchor::new(
                p,
                p - dir * (p.distance_to(&prev) * SMOOTHING),
                p + dir * (next.distance_to(&p) * SMOOTHING),
            )
        })
        .collect()
}
