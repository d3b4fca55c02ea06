//! chart-axis: Y-axis layout and rendering engine.
//!
//! The crate turns an axis configuration, its tick entries and limit lines into
//! draw calls against a stateful 2D [`render::DrawingContext`]. Geometry comes
//! from a [`core::ViewPortHandler`] and a [`core::CoordinateTransformer`]
//! supplied by the host chart.

pub mod api;
pub mod axis;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::YAxisRenderer;
pub use axis::{AxisConfig, LimitLine, YAxis};
pub use error::{ChartError, ChartResult};
