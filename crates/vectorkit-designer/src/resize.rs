//! Handle-driven resizing and image crop editing.
//!
//! Resizing happens in the shape's own unrotated frame: the pointer is
//! mapped into that frame, the box is scaled about the anchor opposite the
//! dragged handle, and the result is rotated back so the anchor stays put
//! on the canvas.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::bounds::bounding_box;
use crate::model::{BoxFrame, Point, Rect, Shape};
use crate::transform::{move_shape, rotate, scale};

/// One of the eight selection handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeHandle {
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
}

impl ResizeHandle {
    pub fn moves_left(self) -> bool {
        matches!(self, Self::TopLeft | Self::Left | Self::BottomLeft)
    }

    pub fn moves_right(self) -> bool {
        matches!(self, Self::TopRight | Self::Right | Self::BottomRight)
    }

    pub fn moves_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::Top | Self::TopRight)
    }

    pub fn moves_bottom(self) -> bool {
        matches!(self, Self::BottomLeft | Self::Bottom | Self::BottomRight)
    }

    pub fn affects_x(self) -> bool {
        self.moves_left() || self.moves_right()
    }

    pub fn affects_y(self) -> bool {
        self.moves_top() || self.moves_bottom()
    }

    pub fn is_corner(self) -> bool {
        self.affects_x() && self.affects_y()
    }
}

/// A resize gesture: the handle, the pointer now and at drag start, the
/// aspect lock, and an optional external rotation pivot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeRequest {
    pub handle: ResizeHandle,
    pub current: Point,
    pub initial: Point,
    pub keep_aspect_ratio: bool,
    pub rotation_pivot: Option<Point>,
}

impl ResizeRequest {
    pub fn new(handle: ResizeHandle, initial: Point, current: Point) -> Self {
        Self {
            handle,
            current,
            initial,
            keep_aspect_ratio: false,
            rotation_pivot: None,
        }
    }

    pub fn keep_aspect_ratio(mut self, keep: bool) -> Self {
        self.keep_aspect_ratio = keep;
        self
    }

    pub fn rotation_pivot(mut self, pivot: Point) -> Self {
        self.rotation_pivot = Some(pivot);
        self
    }
}

/// Whether the pointer crossed `anchor` along one axis during the drag.
fn crossed(initial: f64, current: f64, anchor: f64) -> bool {
    (initial - anchor) * (current - anchor) < 0.0
}

/// Resizes `shape` according to `request`. Shapes without bounds come back
/// unchanged.
pub fn resize(shape: &Shape, request: &ResizeRequest) -> Shape {
    let (rect, rotation) = match shape.frame_geometry() {
        Some(frame) => (frame.local_rect(), frame.rotation),
        None => match bounding_box(shape, false) {
            Some(rect) => (rect, 0.0),
            None => return shape.clone(),
        },
    };

    let handle = request.handle;
    let pivot = request.rotation_pivot.unwrap_or(rect.center());
    let to_local = |p: Point| p.rotate_about(pivot, -rotation);

    let center = to_local(rect.center());
    let (w0, h0) = (rect.width, rect.height);
    let min = Point::new(center.x - w0 / 2.0, center.y - h0 / 2.0);
    let max = Point::new(center.x + w0 / 2.0, center.y + h0 / 2.0);
    let initial = to_local(request.initial);
    let current = to_local(request.current);

    let mut ax = if handle.moves_left() {
        max.x
    } else if handle.moves_right() {
        min.x
    } else {
        center.x
    };
    let mut ay = if handle.moves_top() {
        max.y
    } else if handle.moves_bottom() {
        min.y
    } else {
        center.y
    };
    // Edge handles pick the anchor by the side the drag began on.
    if !handle.is_corner() {
        if handle.affects_x() {
            ax = if initial.x < center.x { max.x } else { min.x };
        } else {
            ay = if initial.y < center.y { max.y } else { min.y };
        }
    }

    let mut new_w = if handle.affects_x() {
        (current.x - ax).abs()
    } else {
        w0
    };
    let mut new_h = if handle.affects_y() {
        (current.y - ay).abs()
    } else {
        h0
    };

    if request.keep_aspect_ratio && w0 > 0.0 && h0 > 0.0 {
        let ratio = w0 / h0;
        if handle.is_corner() {
            if new_w / w0 >= new_h / h0 {
                new_h = new_w / ratio;
            } else {
                new_w = new_h * ratio;
            }
        } else if handle.affects_x() {
            new_h = new_w / ratio;
        } else {
            new_w = new_h * ratio;
        }
    }

    let flip_x = handle.affects_x() && crossed(initial.x, current.x, ax);
    let flip_y = handle.affects_y() && crossed(initial.y, current.y, ay);
    let mut sx = if w0 > 0.0 { new_w / w0 } else { 1.0 };
    let mut sy = if h0 > 0.0 { new_h / h0 } else { 1.0 };
    if flip_x {
        sx = -sx;
    }
    if flip_y {
        sy = -sy;
    }

    trace!(?handle, sx, sy, ax, ay, "resize");

    let anchor = Point::new(ax, ay);
    let local = rotate(shape, pivot, -rotation);
    let scaled = scale(&local, anchor, sx, sy);
    if rotation == 0.0 {
        return scaled;
    }

    let new_center = center.scale_about(anchor, sx, sy);
    let reapply_pivot = request.rotation_pivot.unwrap_or(new_center);
    let rotated = rotate(&scaled, reapply_pivot, rotation);

    // Re-rotating about the new center drifts the anchor; pull it back.
    let target = anchor.rotate_about(pivot, rotation);
    let landed = anchor.rotate_about(reapply_pivot, rotation);
    move_shape(&rotated, target.x - landed.x, target.y - landed.y)
}

/// Moves the crop window of an image by dragging one of its handles.
///
/// `crop` lives in the image's local space (origin at the unrotated box's
/// top-left). Pointer positions are canvas positions. The result is
/// normalized and clamped to the image box.
pub fn transform_crop_rect(
    crop: &Rect,
    frame: &BoxFrame,
    handle: ResizeHandle,
    current: Point,
    initial: Point,
) -> Rect {
    let c = frame.center();
    let to_image = |p: Point| {
        let mut local = p.rotate_about(c, -frame.rotation);
        if frame.scale_x < 0.0 {
            local.x = 2.0 * c.x - local.x;
        }
        if frame.scale_y < 0.0 {
            local.y = 2.0 * c.y - local.y;
        }
        Point::new(local.x - frame.x, local.y - frame.y)
    };
    let d = to_image(current) - to_image(initial);

    let (mut x1, mut y1, mut x2, mut y2) = (crop.min_x(), crop.min_y(), crop.max_x(), crop.max_y());
    if handle.moves_left() {
        x1 += d.x;
    }
    if handle.moves_right() {
        x2 += d.x;
    }
    if handle.moves_top() {
        y1 += d.y;
    }
    if handle.moves_bottom() {
        y2 += d.y;
    }

    let clamp_x = |v: f64| v.clamp(0.0, frame.width.max(0.0));
    let clamp_y = |v: f64| v.clamp(0.0, frame.height.max(0.0));
    Rect::from_min_max(
        Point::new(clamp_x(x1.min(x2)), clamp_y(y1.min(y2))),
        Point::new(clamp_x(x1.max(x2)), clamp_y(y1.max(y2))),
    )
}
