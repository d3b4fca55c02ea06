use tracing::{debug, trace};

use crate::core::{CoordinateTransformer, Point, Rect};
use crate::render::{DrawingContext, StateGuard};

use super::{YAxisRenderer, apply_line_dash};

impl<T: CoordinateTransformer + ?Sized> YAxisRenderer<'_, T> {
    /// Content rect grown vertically by the grid line width, so lines on the
    /// top and bottom edges keep their full stroke.
    #[must_use]
    pub fn grid_clipping_rect(&self) -> Rect {
        let content = self
            .view_port
            .map(|view_port| view_port.content_rect())
            .unwrap_or_default();
        let width = self
            .axis
            .map_or(0.0, |axis| axis.config().grid_line.width);
        content.expanded_vertically(width)
    }

    /// Draws one horizontal grid line per tick, then the zero line.
    ///
    /// The grid flag and the zero line color gate their layers independently.
    pub fn render_grid_lines<C: DrawingContext + ?Sized>(&self, context: &mut C) {
        let Some(axis) = self.axis else {
            debug!("skip y-axis grid: missing axis");
            return;
        };
        let config = axis.config();
        if !config.enabled {
            debug!("skip y-axis grid: axis disabled");
            return;
        }

        if config.draw_grid_lines_enabled {
            if let Some(view_port) = self.view_port {
                let positions = self.transformed_positions();
                let style = &config.grid_line;

                let mut context = StateGuard::new(&mut *context);
                context.clip_to_rect(self.grid_clipping_rect());
                context.set_should_antialias(style.antialias);
                context.set_stroke_color(style.color);
                context.set_line_width(style.width);
                context.set_line_cap(style.cap);
                apply_line_dash(&mut *context, style.dash.as_ref());

                for position in &positions {
                    context.stroke_segment(
                        Point::new(view_port.content_left(), position.y),
                        Point::new(view_port.content_right(), position.y),
                    );
                }
                trace!(lines = positions.len(), "rendered y-axis grid lines");
            }
        }

        self.draw_zero_line(context);
    }

    /// Draws the horizontal line at value-space zero when a zero line color is set.
    pub fn draw_zero_line<C: DrawingContext + ?Sized>(&self, context: &mut C) {
        let (Some(axis), Some(view_port), Some(transformer)) =
            (self.axis, self.view_port, self.transformer)
        else {
            return;
        };
        let style = &axis.config().zero_line;
        let Some(color) = style.color else {
            return;
        };

        let mut context = StateGuard::new(context);
        context.clip_to_rect(view_port.content_rect().expanded_vertically(style.width));
        context.set_stroke_color(color);
        context.set_line_width(style.width);
        apply_line_dash(&mut *context, style.dash.as_ref());

        let zero = transformer.pixel_for_values(0.0, 0.0);
        context.stroke_segment(
            Point::new(view_port.content_left(), zero.y),
            Point::new(view_port.content_right(), zero.y),
        );
        trace!(y = zero.y, "rendered y-axis zero line");
    }
}
