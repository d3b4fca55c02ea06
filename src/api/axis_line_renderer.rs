use tracing::{debug, trace};

use crate::axis::AxisDependency;
use crate::core::{CoordinateTransformer, Point};
use crate::render::{DrawingContext, StateGuard};

use super::{YAxisRenderer, apply_line_dash};

impl<T: CoordinateTransformer + ?Sized> YAxisRenderer<'_, T> {
    /// Draws the vertical axis line along the content edge of the axis side.
    pub fn render_axis_line<C: DrawingContext + ?Sized>(&self, context: &mut C) {
        let (Some(axis), Some(view_port)) = (self.axis, self.view_port) else {
            debug!("skip y-axis line: missing axis or viewport");
            return;
        };
        let config = axis.config();
        if !config.enabled || !config.draw_axis_line_enabled {
            debug!("skip y-axis line: disabled");
            return;
        }

        let x = match config.axis_dependency {
            AxisDependency::Left => view_port.content_left(),
            AxisDependency::Right => view_port.content_right(),
        };

        let mut context = StateGuard::new(context);
        context.set_stroke_color(config.axis_line.color);
        context.set_line_width(config.axis_line.width);
        apply_line_dash(&mut *context, config.axis_line.dash.as_ref());
        context.stroke_segment(
            Point::new(x, view_port.content_top()),
            Point::new(x, view_port.content_bottom()),
        );
        trace!(x, "rendered y-axis line");
    }
}
