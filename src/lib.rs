//! scale2d: axis tick marks and labels for a 2D chart surface.
//!
//! The crate maps value-space tick positions onto a pixel viewport and emits
//! backend-agnostic line/label primitives. Tick positions, scales and styles
//! are supplied by the caller; nothing here computes ticks or lays out a chart.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{Scale2D, Scale2DConfig, ScaleConfig};
pub use error::{Scale2dError, Scale2dResult};
