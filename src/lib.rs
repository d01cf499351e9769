//! # VectorKit
//!
//! Command-line driver for the VectorKit geometry kernel. Shapes come in as
//! a JSON array, one kernel operation runs over them, and the result goes
//! out as JSON.
//!
//! ## Architecture
//!
//! VectorKit is organized as a workspace with multiple crates:
//!
//! 1. **vectorkit-core** - Error types and the kernel configuration
//! 2. **vectorkit-designer** - Shape model and every geometry operation
//! 3. **vectorkit** - This crate: logging setup and the CLI

pub mod types;

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use clap::Subcommand;
use serde_json::Value;
use tracing::{debug, info};

pub use vectorkit_core::{ConfigError, Error, KernelConfig, Result};
pub use vectorkit_designer as designer;
pub use vectorkit_designer::{Point, Rect, Shape};

use types::{AlignArg, AxisArg, DistributeModeArg, OpArg};
use vectorkit_designer::{
    align_with, bounding_box_of, boolean_op_with, convert_to_path, distribute_with, flip,
    sample_arc, simplify, CsgClipper, DistributeOptions,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty formatting on stderr, leaving stdout for results
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// One kernel operation over the input shapes.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Combine the shapes with a boolean operation
    Boolean {
        #[arg(long, value_enum)]
        op: OpArg,
    },
    /// Align the shapes' bounds
    Align {
        #[arg(long, value_enum)]
        mode: AlignArg,
    },
    /// Spread the shapes along an axis
    Distribute {
        #[arg(long, value_enum)]
        axis: AxisArg,
        /// Fixed gap; omit to space evenly between the outermost shapes
        #[arg(long)]
        spacing: Option<f64>,
        #[arg(long, value_enum, default_value_t = DistributeModeArg::Edges)]
        mode: DistributeModeArg,
    },
    /// Convert every drawable shape to a pen path
    Convert,
    /// Mirror the shapes across an axis through (cx, cy)
    Flip {
        #[arg(long, value_enum)]
        axis: AxisArg,
        #[arg(long, allow_negative_numbers = true)]
        cx: f64,
        #[arg(long, allow_negative_numbers = true)]
        cy: f64,
    },
    /// Drop redundant anchors from pen and line paths
    Simplify {
        #[arg(long)]
        tolerance: f64,
    },
    /// Sample every arc shape into points
    SampleArc {
        #[arg(long)]
        steps: Option<usize>,
    },
    /// Print the union bounds of the shapes
    Bounds {
        #[arg(long)]
        include_stroke: bool,
    },
}

/// Loads the kernel configuration from `path`, or the defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<KernelConfig> {
    match path {
        Some(path) => KernelConfig::load_from_file(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(KernelConfig::default()),
    }
}

/// Reads a JSON array of shapes from `path`, or from stdin.
pub fn read_shapes(path: Option<&Path>) -> anyhow::Result<Vec<Shape>> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };
    let shapes: Vec<Shape> = serde_json::from_str(&text).context("parsing shapes")?;
    debug!(count = shapes.len(), "read shapes");
    Ok(shapes)
}

/// Runs `command` over `shapes` and returns the JSON result.
pub async fn run(command: &Command, shapes: &[Shape], config: &KernelConfig) -> anyhow::Result<Value> {
    info!(?command, count = shapes.len(), "run");
    let value = match command {
        Command::Boolean { op } => {
            serde_json::to_value(boolean_op_with(shapes, (*op).into(), &CsgClipper, config))?
        }
        Command::Align { mode } => serde_json::to_value(align_with(shapes, (*mode).into(), config))?,
        Command::Distribute {
            axis,
            spacing,
            mode,
        } => {
            let options = DistributeOptions {
                spacing: *spacing,
                mode: (*mode).into(),
            };
            serde_json::to_value(distribute_with(shapes, (*axis).into(), &options, config))?
        }
        Command::Convert => {
            let paths: Vec<Shape> = shapes.iter().filter_map(convert_to_path).collect();
            if paths.len() < shapes.len() {
                info!(skipped = shapes.len() - paths.len(), "convert: groups skipped");
            }
            serde_json::to_value(paths)?
        }
        Command::Flip { axis, cx, cy } => {
            let center = Point::new(*cx, *cy);
            let mut flipped = Vec::with_capacity(shapes.len());
            for shape in shapes {
                flipped.push(flip(shape, center, (*axis).into()).await?);
            }
            serde_json::to_value(flipped)?
        }
        Command::Simplify { tolerance } => {
            let simplified: Vec<Shape> = shapes
                .iter()
                .map(|shape| simplify_shape(shape, *tolerance))
                .collect();
            serde_json::to_value(simplified)?
        }
        Command::SampleArc { steps } => {
            let steps = steps.unwrap_or(config.arc_sample_steps);
            let samples: Vec<Vec<Point>> = shapes
                .iter()
                .filter_map(|shape| match shape {
                    Shape::Arc(arc) => Some(sample_arc(arc.start(), arc.end(), arc.via(), steps)),
                    _ => None,
                })
                .collect();
            serde_json::to_value(samples)?
        }
        Command::Bounds { include_stroke } => {
            serde_json::to_value(bounding_box_of(shapes, *include_stroke))?
        }
    };
    Ok(value)
}

fn simplify_shape(shape: &Shape, tolerance: f64) -> Shape {
    match shape {
        Shape::Pen(p) | Shape::Line(p) => {
            let mut path = p.clone();
            path.anchors = simplify(&p.anchors, tolerance);
            if matches!(shape, Shape::Pen(_)) {
                Shape::Pen(path)
            } else {
                Shape::Line(path)
            }
        }
        Shape::Group(g) => Shape::Group(g.map_children(|c| simplify_shape(c, tolerance))),
        _ => shape.clone(),
    }
}
