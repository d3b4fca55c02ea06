use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::axis::LimitLine;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, Font, LineCap, LineDash};

/// Side of the chart the axis is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisDependency {
    #[default]
    Left,
    Right,
}

/// Whether tick labels sit inside or outside the content rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum YAxisLabelPosition {
    #[default]
    OutsideChart,
    InsideChart,
}

/// Stroke style of the axis line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisLineStyle {
    pub color: Color,
    pub width: f64,
    pub dash: Option<LineDash>,
}

impl Default for AxisLineStyle {
    fn default() -> Self {
        Self {
            color: Color::gray(0.5),
            width: 0.5,
            dash: None,
        }
    }
}

/// Stroke style of the horizontal grid lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLineStyle {
    pub color: Color,
    pub width: f64,
    pub cap: LineCap,
    pub antialias: bool,
    pub dash: Option<LineDash>,
}

impl Default for GridLineStyle {
    fn default() -> Self {
        Self {
            color: Color::gray(0.5),
            width: 0.5,
            cap: LineCap::Butt,
            antialias: true,
            dash: None,
        }
    }
}

/// Stroke style of the zero reference line. No color means no zero line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZeroLineStyle {
    pub color: Option<Color>,
    pub width: f64,
    pub dash: Option<LineDash>,
}

impl Default for ZeroLineStyle {
    fn default() -> Self {
        Self {
            color: None,
            width: 1.0,
            dash: None,
        }
    }
}

/// Declarative Y-axis configuration: flags, offsets, styles and limit lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    pub enabled: bool,
    pub draw_labels_enabled: bool,
    pub draw_axis_line_enabled: bool,
    pub draw_grid_lines_enabled: bool,
    pub draw_top_y_label_entry: bool,
    pub draw_bottom_y_label_entry: bool,
    pub axis_dependency: AxisDependency,
    pub label_position: YAxisLabelPosition,
    pub x_offset: f64,
    pub y_offset: f64,
    pub label_font: Font,
    pub label_text_color: Color,
    pub axis_line: AxisLineStyle,
    pub grid_line: GridLineStyle,
    pub zero_line: ZeroLineStyle,
    /// Desired number of ticks when entries are computed from a range.
    pub label_count: usize,
    pub force_label_count: bool,
    pub inverted: bool,
    pub limit_lines: Vec<LimitLine>,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            draw_labels_enabled: true,
            draw_axis_line_enabled: true,
            draw_grid_lines_enabled: true,
            draw_top_y_label_entry: true,
            draw_bottom_y_label_entry: true,
            axis_dependency: AxisDependency::Left,
            label_position: YAxisLabelPosition::OutsideChart,
            x_offset: 5.0,
            y_offset: 0.0,
            label_font: Font::new(10.0),
            label_text_color: Color::BLACK,
            axis_line: AxisLineStyle::default(),
            grid_line: GridLineStyle::default(),
            zero_line: ZeroLineStyle::default(),
            label_count: 6,
            force_label_count: false,
            inverted: false,
            limit_lines: Vec::new(),
        }
    }
}

impl AxisConfig {
    pub const MIN_LABEL_COUNT: usize = 2;
    pub const MAX_LABEL_COUNT: usize = 25;

    #[must_use]
    pub fn for_dependency(axis_dependency: AxisDependency) -> Self {
        Self {
            axis_dependency,
            ..Self::default()
        }
    }

    /// Sets the desired tick count, clamped to `MIN_LABEL_COUNT..=MAX_LABEL_COUNT`.
    pub fn set_label_count(&mut self, count: usize, force: bool) {
        self.label_count = count.clamp(Self::MIN_LABEL_COUNT, Self::MAX_LABEL_COUNT);
        self.force_label_count = force;
    }

    pub fn validate(&self) -> ChartResult<()> {
        let result = self.validate_fields();
        if let Err(err) = &result {
            warn!(error = %err, "rejected y-axis configuration");
        }
        result
    }

    fn validate_fields(&self) -> ChartResult<()> {
        if !self.x_offset.is_finite() || !self.y_offset.is_finite() {
            return Err(ChartError::InvalidConfig(
                "axis label offsets must be finite".to_owned(),
            ));
        }
        for (name, width) in [
            ("axis line", self.axis_line.width),
            ("grid line", self.grid_line.width),
            ("zero line", self.zero_line.width),
        ] {
            if !width.is_finite() || width < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "{name} width must be finite and >= 0"
                )));
            }
        }
        if !(Self::MIN_LABEL_COUNT..=Self::MAX_LABEL_COUNT).contains(&self.label_count) {
            return Err(ChartError::InvalidConfig(format!(
                "label count must be in [{}, {}]",
                Self::MIN_LABEL_COUNT,
                Self::MAX_LABEL_COUNT
            )));
        }

        self.label_font.validate()?;
        self.label_text_color.validate()?;
        self.axis_line.color.validate()?;
        self.grid_line.color.validate()?;
        if let Some(color) = self.zero_line.color {
            color.validate()?;
        }
        for dash in [&self.axis_line.dash, &self.grid_line.dash, &self.zero_line.dash]
            .into_iter()
            .flatten()
        {
            dash.validate()?;
        }
        for line in &self.limit_lines {
            line.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{AxisConfig, AxisDependency};
    use crate::axis::LimitLine;
    use crate::error::ChartError;
    use crate::render::LineDash;

    #[test]
    fn default_config_is_valid() {
        AxisConfig::default().validate().expect("valid defaults");
        AxisConfig::for_dependency(AxisDependency::Right)
            .validate()
            .expect("valid right axis");
    }

    #[test]
    fn label_count_is_clamped() {
        let mut config = AxisConfig::default();
        config.set_label_count(100, true);
        assert_eq!(config.label_count, 25);
        assert!(config.force_label_count);
        config.set_label_count(0, false);
        assert_eq!(config.label_count, 2);
    }

    #[test]
    fn rejects_negative_grid_width() {
        let mut config = AxisConfig::default();
        config.grid_line.width = -1.0;
        let err = config.validate().expect_err("negative width");
        assert!(matches!(err, ChartError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_invalid_dash_and_limit_lines() {
        let mut config = AxisConfig::default();
        config.zero_line.dash = Some(LineDash::new(f64::NAN, &[2.0]));
        assert!(config.validate().is_err());

        let mut config = AxisConfig::default();
        config.limit_lines.push(LimitLine::new(f64::INFINITY, "oops"));
        assert!(config.validate().is_err());
    }
}
