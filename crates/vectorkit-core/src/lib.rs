//! # VectorKit Core
//!
//! Shared error types and the kernel configuration used by the geometry
//! kernel and the command-line driver.

pub mod config;
pub mod error;

pub use config::KernelConfig;
pub use error::{ConfigError, Error, Result};
