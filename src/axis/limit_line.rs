use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, Font, LineDash};

/// Where a limit line's label is drawn relative to the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LimitLabelPosition {
    RightTop,
    RightBottom,
    LeftTop,
    #[default]
    LeftBottom,
    /// Filled callout box hanging off the left content edge.
    LeftBox,
    /// Filled callout box attached to the right content edge.
    RightBox,
}

/// User-configured horizontal threshold marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitLine {
    pub limit: f64,
    pub enabled: bool,
    pub line_color: Color,
    line_width: f64,
    pub line_dash: Option<LineDash>,
    pub label: String,
    pub draw_label_enabled: bool,
    pub value_font: Font,
    pub value_text_color: Color,
    pub x_offset: f64,
    pub y_offset: f64,
    pub label_position: LimitLabelPosition,
}

impl Default for LimitLine {
    fn default() -> Self {
        Self {
            limit: 0.0,
            enabled: true,
            line_color: Color::from_rgb8(237, 91, 91),
            line_width: 2.0,
            line_dash: None,
            label: String::new(),
            draw_label_enabled: true,
            value_font: Font::new(13.0),
            value_text_color: Color::BLACK,
            x_offset: 5.0,
            y_offset: 5.0,
            label_position: LimitLabelPosition::default(),
        }
    }
}

impl LimitLine {
    pub const MIN_LINE_WIDTH: f64 = 0.2;
    pub const MAX_LINE_WIDTH: f64 = 12.0;

    #[must_use]
    pub fn new(limit: f64, label: impl Into<String>) -> Self {
        Self {
            limit,
            label: label.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    /// Sets the line width, clamped to `MIN_LINE_WIDTH..=MAX_LINE_WIDTH`.
    pub fn set_line_width(&mut self, width: f64) {
        if width.is_finite() {
            self.line_width = width.clamp(Self::MIN_LINE_WIDTH, Self::MAX_LINE_WIDTH);
        }
    }

    #[must_use]
    pub fn with_line_width(mut self, width: f64) -> Self {
        self.set_line_width(width);
        self
    }

    #[must_use]
    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = color;
        self
    }

    #[must_use]
    pub fn with_label_position(mut self, position: LimitLabelPosition) -> Self {
        self.label_position = position;
        self
    }

    #[must_use]
    pub fn with_value_font(mut self, font: Font) -> Self {
        self.value_font = font;
        self
    }

    #[must_use]
    pub fn with_value_text_color(mut self, color: Color) -> Self {
        self.value_text_color = color;
        self
    }

    #[must_use]
    pub fn with_offsets(mut self, x_offset: f64, y_offset: f64) -> Self {
        self.x_offset = x_offset;
        self.y_offset = y_offset;
        self
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Whether a label would be drawn for this line.
    #[must_use]
    pub fn has_drawable_label(&self) -> bool {
        self.draw_label_enabled && !self.label.is_empty()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.limit.is_finite() {
            return Err(ChartError::InvalidConfig(
                "limit line value must be finite".to_owned(),
            ));
        }
        if !(Self::MIN_LINE_WIDTH..=Self::MAX_LINE_WIDTH).contains(&self.line_width) {
            return Err(ChartError::InvalidConfig(format!(
                "limit line width must be in [{}, {}]",
                Self::MIN_LINE_WIDTH,
                Self::MAX_LINE_WIDTH
            )));
        }
        if !self.x_offset.is_finite() || !self.y_offset.is_finite() {
            return Err(ChartError::InvalidConfig(
                "limit line label offsets must be finite".to_owned(),
            ));
        }
        self.line_color.validate()?;
        self.value_text_color.validate()?;
        self.value_font.validate()?;
        if let Some(dash) = &self.line_dash {
            dash.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{LimitLabelPosition, LimitLine};

    #[test]
    fn default_label_position_is_left_bottom() {
        assert_eq!(LimitLine::default().label_position, LimitLabelPosition::LeftBottom);
    }

    #[test]
    fn line_width_is_clamped() {
        assert_eq!(LimitLine::new(1.0, "").with_line_width(40.0).line_width(), 12.0);
        assert_eq!(LimitLine::new(1.0, "").with_line_width(0.0).line_width(), 0.2);
        assert_eq!(LimitLine::new(1.0, "").with_line_width(f64::NAN).line_width(), 2.0);
    }

    #[test]
    fn empty_label_is_not_drawable() {
        let mut line = LimitLine::new(3.0, "");
        assert!(!line.has_drawable_label());
        line.label = "Target".to_owned();
        assert!(line.has_drawable_label());
        line.draw_label_enabled = false;
        assert!(!line.has_drawable_label());
    }
}
