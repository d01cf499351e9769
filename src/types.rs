//! Command-line value types for the root crate.
//!
//! These mirror the kernel enums so clap can parse them without the kernel
//! depending on clap.

use clap::ValueEnum;
use vectorkit_designer::{Alignment, Axis, BooleanOp, DistributeMode, FlipAxis};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OpArg {
    Unite,
    Subtract,
    Intersect,
    Exclude,
    Trim,
}

impl From<OpArg> for BooleanOp {
    fn from(op: OpArg) -> Self {
        match op {
            OpArg::Unite => BooleanOp::Unite,
            OpArg::Subtract => BooleanOp::Subtract,
            OpArg::Intersect => BooleanOp::Intersect,
            OpArg::Exclude => BooleanOp::Exclude,
            OpArg::Trim => BooleanOp::Trim,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlignArg {
    Left,
    CenterHorizontal,
    Right,
    Top,
    CenterVertical,
    Bottom,
}

impl From<AlignArg> for Alignment {
    fn from(mode: AlignArg) -> Self {
        match mode {
            AlignArg::Left => Alignment::Left,
            AlignArg::CenterHorizontal => Alignment::CenterHorizontal,
            AlignArg::Right => Alignment::Right,
            AlignArg::Top => Alignment::Top,
            AlignArg::CenterVertical => Alignment::CenterVertical,
            AlignArg::Bottom => Alignment::Bottom,
        }
    }
}

/// Shared by `distribute` (as a layout axis) and `flip` (as a mirror axis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AxisArg {
    Horizontal,
    Vertical,
}

impl From<AxisArg> for Axis {
    fn from(axis: AxisArg) -> Self {
        match axis {
            AxisArg::Horizontal => Axis::Horizontal,
            AxisArg::Vertical => Axis::Vertical,
        }
    }
}

impl From<AxisArg> for FlipAxis {
    fn from(axis: AxisArg) -> Self {
        match axis {
            AxisArg::Horizontal => FlipAxis::Horizontal,
            AxisArg::Vertical => FlipAxis::Vertical,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DistributeModeArg {
    #[default]
    Edges,
    Centers,
}

impl From<DistributeModeArg> for DistributeMode {
    fn from(mode: DistributeModeArg) -> Self {
        match mode {
            DistributeModeArg::Edges => DistributeMode::Edges,
            DistributeModeArg::Centers => DistributeMode::Centers,
        }
    }
}
