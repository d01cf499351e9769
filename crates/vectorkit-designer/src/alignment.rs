//! Aligning and distributing a selection of shapes.
//!
//! Both operations only translate. Results come back in input order; shapes
//! without bounds (empty groups) are returned untouched.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;
use vectorkit_core::KernelConfig;

use crate::bounds::{bounding_box, bounding_box_of};
use crate::model::{Rect, Shape};
use crate::transform::move_shape;

/// Alignment modes. The canvas is Y-down, so `Top` is the smallest `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    Left,
    CenterHorizontal,
    Right,
    Top,
    CenterVertical,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributeMode {
    /// Gaps are measured between bounding boxes.
    #[default]
    Edges,
    /// Gaps are measured between bounding-box centers.
    Centers,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DistributeOptions {
    /// Fixed gap; `None` spaces the selection evenly between its ends.
    #[serde(default)]
    pub spacing: Option<f64>,
    #[serde(default)]
    pub mode: DistributeMode,
}

/// Per-shape translation for `alignment`, indexed like `shapes`.
fn deltas_by_index(
    shapes: &[Shape],
    alignment: Alignment,
    include_stroke: bool,
) -> Vec<Option<(f64, f64)>> {
    let bounds: Vec<Option<Rect>> = shapes
        .iter()
        .map(|s| bounding_box(s, include_stroke))
        .collect();
    let Some(union) = bounding_box_of(shapes, include_stroke) else {
        return vec![None; shapes.len()];
    };
    let target = match alignment {
        Alignment::Left => union.min_x(),
        Alignment::Right => union.max_x(),
        Alignment::CenterHorizontal => union.center().x,
        Alignment::Top => union.min_y(),
        Alignment::Bottom => union.max_y(),
        Alignment::CenterVertical => union.center().y,
    };

    bounds
        .into_iter()
        .map(|b| {
            b.map(|r| match alignment {
                Alignment::Left => (target - r.min_x(), 0.0),
                Alignment::Right => (target - r.max_x(), 0.0),
                Alignment::CenterHorizontal => (target - r.center().x, 0.0),
                Alignment::Top => (0.0, target - r.min_y()),
                Alignment::Bottom => (0.0, target - r.max_y()),
                Alignment::CenterVertical => (0.0, target - r.center().y),
            })
        })
        .collect()
}

/// The `(id, dx, dy)` moves needed to align `shapes`; shapes already in
/// place are left out.
pub fn alignment_deltas(
    shapes: &[Shape],
    alignment: Alignment,
    include_stroke: bool,
) -> Vec<(Uuid, f64, f64)> {
    if shapes.len() < 2 {
        return Vec::new();
    }
    shapes
        .iter()
        .zip(deltas_by_index(shapes, alignment, include_stroke))
        .filter_map(|(shape, delta)| {
            let (dx, dy) = delta?;
            (dx.abs() > f64::EPSILON || dy.abs() > f64::EPSILON).then(|| (shape.id(), dx, dy))
        })
        .collect()
}

pub fn align(shapes: &[Shape], alignment: Alignment) -> Vec<Shape> {
    align_with(shapes, alignment, &KernelConfig::default())
}

/// Aligns every shape's bounds to the matching edge or center of the
/// selection's union bounds. Fewer than two shapes is a no-op.
pub fn align_with(shapes: &[Shape], alignment: Alignment, config: &KernelConfig) -> Vec<Shape> {
    if shapes.len() < 2 {
        return shapes.to_vec();
    }
    debug!(count = shapes.len(), ?alignment, "align");
    shapes
        .iter()
        .zip(deltas_by_index(shapes, alignment, config.alignment_includes_stroke))
        .map(|(shape, delta)| match delta {
            Some((dx, dy)) => move_shape(shape, dx, dy),
            None => shape.clone(),
        })
        .collect()
}

pub fn distribute(shapes: &[Shape], axis: Axis, options: &DistributeOptions) -> Vec<Shape> {
    distribute_with(shapes, axis, options, &KernelConfig::default())
}

/// A shape's extent along the distribution axis.
#[derive(Debug, Clone, Copy)]
struct Span {
    index: usize,
    min: f64,
    size: f64,
}

impl Span {
    fn center(&self) -> f64 {
        self.min + self.size / 2.0
    }
}

/// Spreads shapes along `axis`. With a fixed spacing the lowest shape stays
/// and the rest follow it; without one the two outermost shapes stay and
/// the interior is spaced evenly.
pub fn distribute_with(
    shapes: &[Shape],
    axis: Axis,
    options: &DistributeOptions,
    config: &KernelConfig,
) -> Vec<Shape> {
    let mut spans: Vec<Span> = shapes
        .iter()
        .enumerate()
        .filter_map(|(index, shape)| {
            let r = bounding_box(shape, config.alignment_includes_stroke)?;
            Some(match axis {
                Axis::Horizontal => Span {
                    index,
                    min: r.min_x(),
                    size: r.width,
                },
                Axis::Vertical => Span {
                    index,
                    min: r.min_y(),
                    size: r.height,
                },
            })
        })
        .collect();

    let key = |s: &Span| match options.mode {
        DistributeMode::Edges => s.min,
        DistributeMode::Centers => s.center(),
    };
    spans.sort_by(|a, b| key(a).total_cmp(&key(b)));

    // New minimum coordinate for each placed span.
    let targets: Vec<(usize, f64)> = match options.spacing {
        Some(spacing) if spacing.is_nan() || spacing < 0.0 => {
            debug!(spacing, "distribute: negative spacing ignored");
            Vec::new()
        }
        Some(spacing) => fixed_spacing(&spans, spacing, options.mode),
        None => even_spacing(&spans, options.mode),
    };

    let mut result = shapes.to_vec();
    for (index, min) in targets {
        let Some(span) = spans.iter().find(|s| s.index == index) else {
            continue;
        };
        let delta = min - span.min;
        result[index] = match axis {
            Axis::Horizontal => move_shape(&shapes[index], delta, 0.0),
            Axis::Vertical => move_shape(&shapes[index], 0.0, delta),
        };
    }
    result
}

fn fixed_spacing(spans: &[Span], spacing: f64, mode: DistributeMode) -> Vec<(usize, f64)> {
    let Some(first) = spans.first() else {
        return Vec::new();
    };
    let mut targets = Vec::with_capacity(spans.len());
    let mut prev_min = first.min;
    let mut prev_size = first.size;
    for span in &spans[1..] {
        let min = match mode {
            DistributeMode::Edges => prev_min + prev_size + spacing,
            DistributeMode::Centers => {
                prev_min + prev_size / 2.0 + spacing - span.size / 2.0
            }
        };
        targets.push((span.index, min));
        prev_min = min;
        prev_size = span.size;
    }
    targets
}

fn even_spacing(spans: &[Span], mode: DistributeMode) -> Vec<(usize, f64)> {
    let n = spans.len();
    if n < 3 {
        debug!(count = n, "distribute: spacing evenly needs three shapes");
        return Vec::new();
    }
    let (first, last) = (spans[0], spans[n - 1]);
    let interior = &spans[1..n - 1];

    match mode {
        DistributeMode::Edges => {
            let total: f64 = spans.iter().map(|s| s.size).sum();
            let span = last.min + last.size - first.min;
            let gap = (span - total) / (n - 1) as f64;
            let mut cursor = first.min + first.size;
            interior
                .iter()
                .map(|s| {
                    let min = cursor + gap;
                    cursor = min + s.size;
                    (s.index, min)
                })
                .collect()
        }
        DistributeMode::Centers => {
            let step = (last.center() - first.center()) / (n - 1) as f64;
            interior
                .iter()
                .enumerate()
                .map(|(i, s)| {
                    let center = first.center() + step * (i + 1) as f64;
                    (s.index, center - s.size / 2.0)
                })
                .collect()
        }
    }
}
