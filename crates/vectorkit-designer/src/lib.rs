//! # VectorKit Designer
//!
//! The geometry kernel of the VectorKit editor. Every operation here is a
//! pure function from shapes to new shapes: the editor owns the document,
//! the kernel only computes.
//!
//! ## Core Components
//!
//! - **Model**: the tagged [`Shape`] tree, anchors, box geometry and style
//! - **Arc**: circumcircle, sweep and bezier approximation of three-point arcs
//! - **Transform**: move, rotate, scale, plus handle-driven resize and flip
//! - **Convert**: any drawable shape to an anchored bezier path
//! - **Ops**: unite, subtract, intersect, exclude and trim over path outlines
//! - **Fitting**: anchor simplification and freehand smoothing
//! - **Alignment**: align and distribute a selection
//!
//! ## Architecture
//!
//! ```text
//! Model (Shape, Anchor, BoxFrame)
//!   ├── Arc ─────────────┐
//!   ├── Fitting ─────────┤
//!   │                    └── Convert ── Ops (PathClipper / csgrs)
//!   ├── Transform ── Resize, Flip
//!   └── Bounds ── Alignment
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vectorkit_designer::{boolean_op, BooleanOp, Shape};
//!
//! let a = Shape::rectangle(0.0, 0.0, 1.0, 1.0);
//! let b = Shape::rectangle(0.5, 0.5, 1.0, 1.0);
//! let united = boolean_op(&[a, b], BooleanOp::Unite);
//! ```

pub mod alignment;
pub mod arc;
pub mod bounds;
pub mod convert;
pub mod error;
pub mod fitting;
pub mod flip;
pub mod model;
pub mod ops;
pub mod resize;
pub mod transform;

pub use alignment::{
    align, align_with, alignment_deltas, distribute, distribute_with, Alignment, Axis,
    DistributeMode, DistributeOptions,
};
pub use arc::{arc_anchors, arc_path, arc_sweep, circumcircle, sample_arc, ArcPath, Circle};
pub use bounds::{bounding_box, bounding_box_of};
pub use convert::{convert_to_path, polygon_vertices, to_lyon_path, to_path, KAPPA};
pub use error::FlipError;
pub use fitting::{fit_freehand, simplify, smooth_anchors};
pub use flip::{flip, FlipAxis};
pub use model::{
    Anchor, ArcShape, BoxFrame, BoxShape, BrushShape, GroupShape, ImageShape, PathShape, Point,
    PolygonShape, Rect, Shape, Style, TextShape, Tool,
};
pub use ops::{boolean_op, boolean_op_with, contour_area, BooleanOp, CsgClipper, PathClipper};
pub use resize::{resize, transform_crop_rect, ResizeHandle, ResizeRequest};
pub use transform::{move_shape, rotate, scale};
