mod context;
mod primitives;
mod recording;

pub use context::{DrawingContext, StateGuard};
pub use primitives::{Color, Font, LineCap, LineDash, PathDrawingMode, TextHAlign};
pub use recording::{DrawCommand, GraphicsState, RecordingContext};

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContext, CairoDrawStats};
