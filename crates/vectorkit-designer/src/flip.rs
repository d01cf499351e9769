//! Mirroring across an axis through a center point.
//!
//! Vector geometry flips synchronously. Raster images are decoded, mirrored
//! and re-encoded, so a tree holding any image is processed on the blocking
//! pool.

use std::io::Cursor;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::FlipError;
use crate::model::{BoxFrame, ImageShape, Point, Rect, Shape};
use crate::transform::scale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlipAxis {
    /// Mirror left to right across the vertical line through the center.
    Horizontal,
    /// Mirror top to bottom across the horizontal line through the center.
    Vertical,
}

impl FlipAxis {
    fn factors(self) -> (f64, f64) {
        match self {
            FlipAxis::Horizontal => (-1.0, 1.0),
            FlipAxis::Vertical => (1.0, -1.0),
        }
    }
}

/// Flips `shape` across `center`. Flipping twice about the same center
/// restores the original geometry.
pub async fn flip(shape: &Shape, center: Point, axis: FlipAxis) -> Result<Shape, FlipError> {
    if !shape.contains_image() {
        return Ok(flip_geometry(shape, center, axis));
    }

    let owned = shape.clone();
    debug!(id = %owned.id(), ?axis, "flip: mirroring raster content");
    tokio::task::spawn_blocking(move || flip_tree(&owned, center, axis)).await?
}

fn flip_geometry(shape: &Shape, center: Point, axis: FlipAxis) -> Shape {
    let (sx, sy) = axis.factors();
    scale(shape, center, sx, sy)
}

fn flip_tree(shape: &Shape, center: Point, axis: FlipAxis) -> Result<Shape, FlipError> {
    match shape {
        Shape::Image(image) => Ok(Shape::Image(flip_image(image, center, axis)?)),
        Shape::Group(group) => {
            let children = group
                .children
                .iter()
                .map(|child| flip_tree(child, center, axis))
                .collect::<Result<Vec<_>, _>>()?;
            let mut flipped = group.clone();
            flipped.children = children;
            Ok(Shape::Group(flipped))
        }
        _ => Ok(flip_geometry(shape, center, axis)),
    }
}

/// The pixels carry the mirror, so the frame only moves: its center is
/// reflected and the rotation reversed, while the scale signs stay.
fn flip_image(image: &ImageShape, center: Point, axis: FlipAxis) -> Result<ImageShape, FlipError> {
    let (sx, sy) = axis.factors();
    let frame = &image.frame;
    let moved = BoxFrame {
        rotation: -frame.rotation,
        ..*frame
    }
    .with_center(frame.center().scale_about(center, sx, sy));

    let crop = image.crop.map(|crop| match axis {
        FlipAxis::Horizontal => Rect {
            x: frame.width - crop.x - crop.width,
            ..crop
        },
        FlipAxis::Vertical => Rect {
            y: frame.height - crop.y - crop.height,
            ..crop
        },
    });

    Ok(ImageShape {
        frame: moved,
        data: flip_pixels(&image.data, axis)?,
        crop,
        ..image.clone()
    })
}

fn flip_pixels(data: &[u8], axis: FlipAxis) -> Result<Vec<u8>, FlipError> {
    if data.is_empty() {
        return Ok(Vec::new());
    }
    let format = image::guess_format(data).map_err(FlipError::Decode)?;
    let decoded = image::load_from_memory_with_format(data, format).map_err(FlipError::Decode)?;
    let flipped = match axis {
        FlipAxis::Horizontal => decoded.fliph(),
        FlipAxis::Vertical => decoded.flipv(),
    };

    let mut out = Cursor::new(Vec::new());
    flipped
        .write_to(&mut out, format)
        .map_err(FlipError::Encode)?;
    Ok(out.into_inner())
}
