//! Y-axis renderer: turns a [`YAxis`] plus viewport and transformer state into
//! draw calls on a [`DrawingContext`].
//!
//! Each entry point lives in its own file as an `impl` block on
//! [`YAxisRenderer`]. Entry points are stateless: they read the collaborators,
//! draw inside a [`crate::render::StateGuard`], and leave the context style
//! exactly as they found it.

mod axis_grid_renderer;
mod axis_label_renderer;
mod axis_line_renderer;
mod axis_tick_positions;
mod limit_line_renderer;

pub use axis_label_renderer::{LabelAnchor, label_index_range, label_vertical_offset};
pub use limit_line_renderer::{LimitLabelLayout, limit_label_layout};

use crate::axis::YAxis;
use crate::core::{CoordinateTransformer, Transformer, ViewPortHandler};
use crate::render::{DrawingContext, LineDash};

/// Renders the grid, axis line, zero line, labels and limit lines of one Y axis.
///
/// Collaborators are optional: when one an entry point needs is missing, that
/// entry point draws nothing.
#[derive(Debug)]
pub struct YAxisRenderer<'a, T: CoordinateTransformer + ?Sized = Transformer> {
    view_port: Option<&'a ViewPortHandler>,
    axis: Option<&'a YAxis>,
    transformer: Option<&'a T>,
}

impl<T: CoordinateTransformer + ?Sized> Clone for YAxisRenderer<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: CoordinateTransformer + ?Sized> Copy for YAxisRenderer<'_, T> {}

impl<'a, T: CoordinateTransformer + ?Sized> YAxisRenderer<'a, T> {
    #[must_use]
    pub fn new(
        view_port: Option<&'a ViewPortHandler>,
        axis: Option<&'a YAxis>,
        transformer: Option<&'a T>,
    ) -> Self {
        Self {
            view_port,
            axis,
            transformer,
        }
    }

    #[must_use]
    pub fn from_parts(view_port: &'a ViewPortHandler, axis: &'a YAxis, transformer: &'a T) -> Self {
        Self::new(Some(view_port), Some(axis), Some(transformer))
    }

    #[must_use]
    pub fn view_port(&self) -> Option<&'a ViewPortHandler> {
        self.view_port
    }

    #[must_use]
    pub fn axis(&self) -> Option<&'a YAxis> {
        self.axis
    }

    #[must_use]
    pub fn transformer(&self) -> Option<&'a T> {
        self.transformer
    }

    /// Runs every layer in host draw order: grid (with zero line), axis line,
    /// labels, limit lines.
    pub fn render_all<C: DrawingContext + ?Sized>(&self, context: &mut C) {
        self.render_grid_lines(context);
        self.render_axis_line(context);
        self.render_axis_labels(context);
        self.render_limit_lines(context);
    }
}

/// Applies `dash`, or clears any inherited dash when it is unset.
pub(crate) fn apply_line_dash<C: DrawingContext + ?Sized>(context: &mut C, dash: Option<&LineDash>) {
    match dash {
        Some(dash) => context.set_line_dash(dash.phase, &dash.lengths),
        None => context.set_line_dash(0.0, &[]),
    }
}
