use std::ops::Range;

use tracing::{debug, trace};

use crate::axis::{AxisDependency, YAxis, YAxisLabelPosition};
use crate::core::{CoordinateTransformer, Point, ViewPortHandler};
use crate::render::{DrawingContext, StateGuard, TextHAlign};

use super::YAxisRenderer;

/// Horizontal anchor shared by every tick label of one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelAnchor {
    pub x: f64,
    pub align: TextHAlign,
}

impl LabelAnchor {
    /// Resolves the anchor from axis side and label position.
    ///
    /// Outside labels grow away from the content rectangle, inside labels
    /// grow into it.
    #[must_use]
    pub fn resolve(view_port: &ViewPortHandler, axis: &YAxis) -> Self {
        let config = axis.config();
        let x_offset = config.x_offset;
        match (config.axis_dependency, config.label_position) {
            (AxisDependency::Left, YAxisLabelPosition::OutsideChart) => Self {
                x: view_port.offset_left() - x_offset,
                align: TextHAlign::Right,
            },
            (AxisDependency::Left, YAxisLabelPosition::InsideChart) => Self {
                x: view_port.offset_left() + x_offset,
                align: TextHAlign::Left,
            },
            (AxisDependency::Right, YAxisLabelPosition::OutsideChart) => Self {
                x: view_port.content_right() + x_offset,
                align: TextHAlign::Left,
            },
            (AxisDependency::Right, YAxisLabelPosition::InsideChart) => Self {
                x: view_port.content_right() - x_offset,
                align: TextHAlign::Right,
            },
        }
    }
}

/// Entry indices that get a label, honoring the top/bottom entry flags.
#[must_use]
pub fn label_index_range(axis: &YAxis) -> Range<usize> {
    let config = axis.config();
    let count = axis.entry_count();
    let from = usize::from(!config.draw_bottom_y_label_entry);
    let to = if config.draw_top_y_label_entry {
        count
    } else {
        count.saturating_sub(1)
    };
    from..to.max(from)
}

/// Offset added to each tick's pixel Y so the label sits centered on the tick.
#[must_use]
pub fn label_vertical_offset(axis: &YAxis) -> f64 {
    let config = axis.config();
    let line_height = config.label_font.line_height;
    line_height / 2.5 + config.y_offset - line_height
}

impl<T: CoordinateTransformer + ?Sized> YAxisRenderer<'_, T> {
    /// Anchor for tick labels, or `None` without an axis or viewport.
    #[must_use]
    pub fn label_anchor(&self) -> Option<LabelAnchor> {
        Some(LabelAnchor::resolve(self.view_port?, self.axis?))
    }

    #[must_use]
    pub fn label_index_range(&self) -> Range<usize> {
        self.axis.map_or(0..0, label_index_range)
    }

    /// Draws the formatted tick labels.
    pub fn render_axis_labels<C: DrawingContext + ?Sized>(&self, context: &mut C) {
        let (Some(axis), Some(view_port)) = (self.axis, self.view_port) else {
            debug!("skip y-axis labels: missing axis or viewport");
            return;
        };
        let config = axis.config();
        if !config.enabled || !config.draw_labels_enabled {
            debug!(
                enabled = config.enabled,
                labels = config.draw_labels_enabled,
                "skip y-axis labels: disabled"
            );
            return;
        }

        let anchor = LabelAnchor::resolve(view_port, axis);
        let positions = self.transformed_positions();
        if positions.is_empty() {
            return;
        }
        debug_assert_eq!(
            positions.len(),
            axis.entry_count(),
            "tick positions must align with axis entries"
        );

        let offset = label_vertical_offset(axis);
        let range = label_index_range(axis);
        let label_count = range.len();

        let mut context = StateGuard::new(context);
        for index in range {
            let text = axis.formatted_label(index);
            context.draw_text(
                &text,
                Point::new(anchor.x, positions[index].y + offset),
                anchor.align,
                config.label_font,
                config.label_text_color,
            );
        }
        trace!(labels = label_count, x = anchor.x, "rendered y-axis labels");
    }
}

#[cfg(test)]
mod tests {
    use super::{LabelAnchor, label_index_range, label_vertical_offset};
    use crate::axis::{AxisConfig, AxisDependency, YAxis, YAxisLabelPosition};
    use crate::core::ViewPortHandler;
    use crate::render::{Font, TextHAlign};

    fn view_port() -> ViewPortHandler {
        ViewPortHandler::new(320.0, 220.0)
            .and_then(|h| h.with_offsets(10.0, 10.0, 20.0, 10.0))
            .expect("viewport")
    }

    fn axis_with(
        dependency: AxisDependency,
        position: YAxisLabelPosition,
        x_offset: f64,
    ) -> YAxis {
        let config = AxisConfig {
            axis_dependency: dependency,
            label_position: position,
            x_offset,
            ..AxisConfig::default()
        };
        YAxis::new(config).expect("axis")
    }

    #[test]
    fn anchor_table_covers_all_side_position_pairs() {
        let vp = view_port();
        let cases = [
            (AxisDependency::Left, YAxisLabelPosition::OutsideChart, 8.0, TextHAlign::Right),
            (AxisDependency::Left, YAxisLabelPosition::InsideChart, 12.0, TextHAlign::Left),
            (AxisDependency::Right, YAxisLabelPosition::OutsideChart, 302.0, TextHAlign::Left),
            (AxisDependency::Right, YAxisLabelPosition::InsideChart, 298.0, TextHAlign::Right),
        ];

        for (dependency, position, x, align) in cases {
            let anchor = LabelAnchor::resolve(&vp, &axis_with(dependency, position, 2.0));
            assert_eq!(anchor, LabelAnchor { x, align }, "{dependency:?}/{position:?}");
        }
    }

    #[test]
    fn index_range_drops_suppressed_extremes() {
        let mut axis = YAxis::default();
        axis.set_entries(vec![0.0, 1.0, 2.0, 3.0, 4.0]).expect("entries");
        assert_eq!(label_index_range(&axis), 0..5);

        axis.config_mut().draw_bottom_y_label_entry = false;
        assert_eq!(label_index_range(&axis), 1..5);

        axis.config_mut().draw_top_y_label_entry = false;
        assert_eq!(label_index_range(&axis), 1..4);
    }

    #[test]
    fn index_range_is_empty_when_extremes_overlap() {
        let mut axis = YAxis::default();
        axis.config_mut().draw_bottom_y_label_entry = false;
        axis.config_mut().draw_top_y_label_entry = false;
        assert!(label_index_range(&axis).is_empty());

        axis.set_entries(vec![3.0]).expect("entries");
        assert!(label_index_range(&axis).is_empty());
    }

    #[test]
    fn vertical_offset_centers_on_tick() {
        let mut axis = YAxis::default();
        axis.config_mut().label_font = Font::new(10.0).with_line_height(10.0);
        axis.config_mut().y_offset = 1.0;
        assert!((label_vertical_offset(&axis) - (4.0 + 1.0 - 10.0)).abs() < 1e-12);
    }
}
