use tracing::{debug, trace};

use crate::axis::{LimitLabelPosition, LimitLine, YAxis};
use crate::core::{CoordinateTransformer, Point, Rect, ViewPortHandler};
use crate::render::{Color, DrawingContext, Font, PathDrawingMode, StateGuard, TextHAlign};

use super::YAxisRenderer;

const LABEL_X_PADDING: f64 = 4.0;
const CALLOUT_CORNER_RADIUS: f64 = 3.0;
const CALLOUT_HEIGHT: f64 = 16.0;
const CALLOUT_TOP_OFFSET: f64 = 9.0;
const LEFT_CALLOUT_OVERHANG: f64 = 29.0;
const LEFT_CALLOUT_WIDTH: f64 = 36.0;
const RIGHT_CALLOUT_WIDTH: f64 = 42.0;
const RIGHT_CALLOUT_TEXT_INSET: f64 = 5.0;

/// Resolved placement of one limit line label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimitLabelLayout {
    pub anchor: Point,
    pub align: TextHAlign,
    pub font: Font,
    pub color: Color,
    /// Rounded box drawn behind the text for the box variants.
    pub callout: Option<Rect>,
}

/// Places the label of `line` whose pixel Y is `line_y`.
///
/// Box variants write with the axis label font; the other variants use the
/// line's own value font.
#[must_use]
pub fn limit_label_layout(
    line: &LimitLine,
    line_y: f64,
    view_port: &ViewPortHandler,
    axis: &YAxis,
) -> LimitLabelLayout {
    let label_line_height = line.value_font.line_height;
    let x_offset = LABEL_X_PADDING + line.x_offset;
    let y_offset = line.line_width() + label_line_height + line.y_offset;
    let above = line_y - y_offset;
    let below = line_y + y_offset - label_line_height;

    let text = |anchor: Point, align: TextHAlign| LimitLabelLayout {
        anchor,
        align,
        font: line.value_font,
        color: line.value_text_color,
        callout: None,
    };

    match line.label_position {
        LimitLabelPosition::RightTop => text(
            Point::new(view_port.content_right() - x_offset, above),
            TextHAlign::Right,
        ),
        LimitLabelPosition::RightBottom => text(
            Point::new(view_port.content_right() - x_offset, below),
            TextHAlign::Right,
        ),
        LimitLabelPosition::LeftTop => text(
            Point::new(view_port.content_left() + x_offset, above),
            TextHAlign::Left,
        ),
        LimitLabelPosition::LeftBottom => text(
            Point::new(view_port.content_left() + x_offset, below),
            TextHAlign::Left,
        ),
        LimitLabelPosition::LeftBox => {
            let callout = Rect::new(
                view_port.content_left() - LEFT_CALLOUT_OVERHANG,
                line_y - CALLOUT_TOP_OFFSET,
                LEFT_CALLOUT_WIDTH,
                CALLOUT_HEIGHT,
            );
            LimitLabelLayout {
                anchor: Point::new(
                    view_port.content_left() - (x_offset - 10.0),
                    callout.top() + 1.0,
                ),
                align: TextHAlign::Right,
                font: axis.config().label_font,
                color: line.value_text_color,
                callout: Some(callout),
            }
        }
        LimitLabelPosition::RightBox => {
            let callout = Rect::new(
                view_port.content_right(),
                line_y - CALLOUT_TOP_OFFSET,
                RIGHT_CALLOUT_WIDTH,
                CALLOUT_HEIGHT,
            );
            LimitLabelLayout {
                anchor: Point::new(
                    view_port.content_right() + RIGHT_CALLOUT_TEXT_INSET,
                    callout.top() + 1.0,
                ),
                align: TextHAlign::Left,
                font: axis.config().label_font,
                color: line.value_text_color,
                callout: Some(callout),
            }
        }
    }
}

impl<T: CoordinateTransformer + ?Sized> YAxisRenderer<'_, T> {
    /// Draws every enabled limit line as a thin filled band with an optional label.
    pub fn render_limit_lines<C: DrawingContext + ?Sized>(&self, context: &mut C) {
        let (Some(axis), Some(view_port), Some(transformer)) =
            (self.axis, self.view_port, self.transformer)
        else {
            debug!("skip limit lines: missing axis, viewport or transformer");
            return;
        };
        let limit_lines = axis.limit_lines();
        if limit_lines.is_empty() {
            return;
        }

        let matrix = transformer.value_to_pixel_matrix();
        let mut drawn = 0usize;
        let mut context = StateGuard::new(context);

        for line in limit_lines.iter().filter(|line| line.enabled) {
            let mut line_context = StateGuard::new(&mut *context);
            let position = matrix.apply(Point::new(0.0, line.limit));
            let line_width = line.line_width();

            line_context.set_line_width(line_width);
            line_context.begin_path();
            line_context.set_fill_color(line.line_color);
            line_context.set_stroke_color(Color::WHITE);
            line_context.add_rect(Rect::new(
                view_port.content_left(),
                position.y - (line_width + 2.0),
                view_port.content_width(),
                line_width + 1.0,
            ));
            line_context.draw_path(PathDrawingMode::FillStroke);

            if line.has_drawable_label() {
                let layout = limit_label_layout(line, position.y, view_port, axis);
                if let Some(callout) = layout.callout {
                    line_context.begin_path();
                    line_context.set_fill_color(line.line_color);
                    line_context.set_stroke_color(line.line_color);
                    line_context.set_line_width(line_width);
                    line_context.add_rounded_rect(callout, CALLOUT_CORNER_RADIUS);
                    line_context.close_path();
                    line_context.draw_path(PathDrawingMode::Fill);
                }
                line_context.draw_text(
                    &line.label,
                    layout.anchor,
                    layout.align,
                    layout.font,
                    layout.color,
                );
            }
            drawn += 1;
        }
        trace!(drawn, total = limit_lines.len(), "rendered limit lines");
    }
}
