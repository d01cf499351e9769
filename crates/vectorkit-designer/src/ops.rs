//! Boolean operations over path outlines.
//!
//! Operands are converted to paths, flattened into polygon rings, and
//! combined by a [`PathClipper`]. The default clipper is backed by csgrs.

use csgrs::sketch::Sketch;
use csgrs::traits::CSG;
use lyon::path::iterator::*;
use serde::{Deserialize, Serialize};
use tracing::debug;
use vectorkit_core::KernelConfig;

use crate::convert::{to_lyon_path, to_path};
use crate::model::{Anchor, PathShape, Point, Shape};

/// Rings below this area are treated as slivers left by the clipper.
const MIN_RING_AREA: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BooleanOp {
    /// Everything covered by any operand.
    Unite,
    /// The first operand minus every later one.
    Subtract,
    /// The area common to all operands.
    Intersect,
    /// Area covered by an odd number of operands.
    Exclude,
    /// The first operand cut into pieces along the later outlines.
    Trim,
}

/// A closed polygon ring, without a repeated closing point.
pub type Ring = Vec<Point>;

/// Region algebra used by the boolean engine.
pub trait PathClipper {
    type Region: Clone;

    fn region(&self, rings: &[Ring]) -> Self::Region;
    fn unite(&self, a: &Self::Region, b: &Self::Region) -> Self::Region;
    fn subtract(&self, a: &Self::Region, b: &Self::Region) -> Self::Region;
    fn intersect(&self, a: &Self::Region, b: &Self::Region) -> Self::Region;

    fn exclude(&self, a: &Self::Region, b: &Self::Region) -> Self::Region {
        self.unite(&self.subtract(a, b), &self.subtract(b, a))
    }

    /// Splits `a` into the disjoint pieces formed by `b`'s outline.
    fn divide(&self, a: &Self::Region, b: &Self::Region) -> Vec<Self::Region>;

    fn is_empty(&self, region: &Self::Region) -> bool;

    /// Outlines of the region: every exterior, followed by its holes.
    fn rings(&self, region: &Self::Region) -> Vec<Ring>;
}

/// [`PathClipper`] backed by csgrs sketches.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsgClipper;

fn ring_points(coords: impl Iterator<Item = (f64, f64)>) -> Ring {
    let mut ring: Ring = coords.map(|(x, y)| Point::new(x, y)).collect();
    if ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    ring
}

fn to_sketch(ring: &[Point]) -> Sketch<()> {
    let pts: Vec<[f64; 2]> = ring.iter().map(|p| [p.x, p.y]).collect();
    Sketch::polygon(&pts, None)
}

impl CsgClipper {
    fn pieces(&self, region: &Sketch<()>) -> Vec<Sketch<()>> {
        region
            .to_multipolygon()
            .0
            .iter()
            .map(|poly| {
                let outer = to_sketch(&ring_points(poly.exterior().0.iter().map(|c| (c.x, c.y))));
                poly.interiors().iter().fold(outer, |piece, hole| {
                    piece.difference(&to_sketch(&ring_points(hole.0.iter().map(|c| (c.x, c.y)))))
                })
            })
            .filter(|piece| !self.is_empty(piece))
            .collect()
    }
}

impl PathClipper for CsgClipper {
    type Region = Sketch<()>;

    fn region(&self, rings: &[Ring]) -> Sketch<()> {
        rings
            .iter()
            .filter(|ring| ring.len() >= 3)
            .fold(Sketch::new(), |acc, ring| acc.union(&to_sketch(ring)))
    }

    fn unite(&self, a: &Sketch<()>, b: &Sketch<()>) -> Sketch<()> {
        a.union(b)
    }

    fn subtract(&self, a: &Sketch<()>, b: &Sketch<()>) -> Sketch<()> {
        a.difference(b)
    }

    fn intersect(&self, a: &Sketch<()>, b: &Sketch<()>) -> Sketch<()> {
        a.intersection(b)
    }

    fn divide(&self, a: &Sketch<()>, b: &Sketch<()>) -> Vec<Sketch<()>> {
        let mut pieces = self.pieces(&a.intersection(b));
        pieces.extend(self.pieces(&a.difference(b)));
        pieces
    }

    fn is_empty(&self, region: &Sketch<()>) -> bool {
        self.rings(region).is_empty()
    }

    fn rings(&self, region: &Sketch<()>) -> Vec<Ring> {
        let mp = region.to_multipolygon();
        let mut rings = Vec::new();
        for poly in mp.0.iter() {
            rings.push(ring_points(poly.exterior().0.iter().map(|c| (c.x, c.y))));
            for interior in poly.interiors() {
                rings.push(ring_points(interior.0.iter().map(|c| (c.x, c.y))));
            }
        }
        rings.retain(|ring| ring.len() >= 3 && ring_area(ring) > MIN_RING_AREA);
        rings
    }
}

/// Shoelace area of a ring.
fn ring_area(ring: &[Point]) -> f64 {
    let n = ring.len();
    let twice: f64 = (0..n)
        .map(|i| ring[i].cross(ring[(i + 1) % n]))
        .sum();
    twice.abs() / 2.0
}

/// Area enclosed by the anchor points of a closed contour.
pub fn contour_area(anchors: &[Anchor]) -> f64 {
    let ring: Ring = anchors.iter().map(|a| a.point).collect();
    ring_area(&ring)
}

/// Polygon ring of a path. Straight outlines keep their exact vertices;
/// curved ones are flattened through lyon at `tolerance`.
pub fn flatten_ring(path: &PathShape, tolerance: f64) -> Ring {
    if path.anchors.iter().all(Anchor::is_corner) {
        return path.anchors.iter().map(|a| a.point).collect();
    }

    let lyon_path = to_lyon_path(&path.anchors, true);
    let mut ring = Ring::new();
    for event in lyon_path.iter().flattened(tolerance as f32) {
        match event {
            lyon::path::Event::Begin { at } => {
                ring.push(Point::new(f64::from(at.x), f64::from(at.y)));
            }
            lyon::path::Event::Line { to, .. } => {
                ring.push(Point::new(f64::from(to.x), f64::from(to.y)));
            }
            _ => {}
        }
    }
    if ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    ring
}

/// Combines `shapes` with the csgrs clipper and default tolerances.
///
/// Returns `None` when fewer than two operands convert to paths, or when
/// the operation leaves nothing behind.
pub fn boolean_op(shapes: &[Shape], op: BooleanOp) -> Option<Vec<Shape>> {
    boolean_op_with(shapes, op, &CsgClipper, &KernelConfig::default())
}

pub fn boolean_op_with<C: PathClipper>(
    shapes: &[Shape],
    op: BooleanOp,
    clipper: &C,
    config: &KernelConfig,
) -> Option<Vec<Shape>> {
    let operands: Vec<PathShape> = shapes.iter().filter_map(to_path).collect();
    if operands.len() < 2 {
        debug!(
            given = shapes.len(),
            usable = operands.len(),
            ?op,
            "boolean: not enough path operands"
        );
        return None;
    }

    let style = operands[0].style.clone();
    let regions: Vec<C::Region> = operands
        .iter()
        .map(|p| clipper.region(&[flatten_ring(p, config.flatten_tolerance)]))
        .collect();

    let results: Vec<C::Region> = match op {
        BooleanOp::Trim => {
            let mut fragments = vec![regions[0].clone()];
            for cutter in &regions[1..] {
                fragments = fragments
                    .iter()
                    .flat_map(|f| clipper.divide(f, cutter))
                    .filter(|r| !clipper.is_empty(r))
                    .collect();
            }
            fragments
        }
        BooleanOp::Unite | BooleanOp::Subtract | BooleanOp::Intersect | BooleanOp::Exclude => {
            let mut acc = regions[0].clone();
            for r in &regions[1..] {
                acc = match op {
                    BooleanOp::Unite => clipper.unite(&acc, r),
                    BooleanOp::Subtract => clipper.subtract(&acc, r),
                    BooleanOp::Intersect => clipper.intersect(&acc, r),
                    BooleanOp::Exclude | BooleanOp::Trim => clipper.exclude(&acc, r),
                };
                if clipper.is_empty(&acc) {
                    debug!(?op, "boolean: empty intermediate result");
                    return None;
                }
            }
            vec![acc]
        }
    };

    let shapes: Vec<Shape> = results
        .iter()
        .flat_map(|r| clipper.rings(r))
        .filter(|ring| ring.len() >= 3)
        .map(|ring| {
            let anchors = ring.into_iter().map(Anchor::corner).collect();
            Shape::Pen(PathShape::derived(anchors, true, style.clone()))
        })
        .collect();

    if shapes.is_empty() {
        debug!(?op, "boolean: empty result");
        return None;
    }
    debug!(?op, operands = operands.len(), results = shapes.len(), "boolean");
    Some(shapes)
}
