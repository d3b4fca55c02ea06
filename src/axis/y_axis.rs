use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::axis::ticks::compute_axis_values;
use crate::axis::{AxisConfig, LimitLine};
use crate::core::{Transformer, ViewPortHandler};
use crate::error::{ChartError, ChartResult};

/// Custom tick label formatter: receives the tick value and the axis decimals.
pub type AxisValueFormatter = Arc<dyn Fn(f64, usize) -> String + Send + Sync>;

/// Vertical chart axis: configuration plus the computed tick entries.
#[derive(Clone)]
pub struct YAxis {
    config: AxisConfig,
    entries: Vec<f64>,
    decimals: usize,
    axis_minimum: f64,
    axis_maximum: f64,
    value_formatter: Option<AxisValueFormatter>,
}

impl fmt::Debug for YAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YAxis")
            .field("config", &self.config)
            .field("entries", &self.entries)
            .field("decimals", &self.decimals)
            .field("axis_minimum", &self.axis_minimum)
            .field("axis_maximum", &self.axis_maximum)
            .field("value_formatter", &self.value_formatter.is_some())
            .finish()
    }
}

impl Default for YAxis {
    fn default() -> Self {
        Self {
            config: AxisConfig::default(),
            entries: Vec::new(),
            decimals: 0,
            axis_minimum: 0.0,
            axis_maximum: 0.0,
            value_formatter: None,
        }
    }
}

impl YAxis {
    pub fn new(config: AxisConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn config(&self) -> &AxisConfig {
        &self.config
    }

    /// Mutable access for hosts that restyle the axis between redraws.
    pub fn config_mut(&mut self) -> &mut AxisConfig {
        &mut self.config
    }

    #[must_use]
    pub fn entries(&self) -> &[f64] {
        &self.entries
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn decimals(&self) -> usize {
        self.decimals
    }

    #[must_use]
    pub fn axis_range(&self) -> (f64, f64) {
        (self.axis_minimum, self.axis_maximum)
    }

    /// Replaces the tick entries; decimals are left unchanged.
    pub fn set_entries(&mut self, entries: Vec<f64>) -> ChartResult<()> {
        if entries.iter().any(|value| !value.is_finite()) {
            return Err(ChartError::InvalidData(
                "axis entries must be finite".to_owned(),
            ));
        }
        self.entries = entries;
        Ok(())
    }

    pub fn set_decimals(&mut self, decimals: usize) {
        self.decimals = decimals;
    }

    /// Recomputes entries and decimals for the visible value range.
    pub fn compute_axis(&mut self, min: f64, max: f64) -> ChartResult<()> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ChartError::InvalidData(
                "axis range must be finite".to_owned(),
            ));
        }
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let values =
            compute_axis_values(min, max, self.config.label_count, self.config.force_label_count);
        debug!(
            min,
            max,
            entries = values.entries.len(),
            decimals = values.decimals,
            "computed y-axis entries"
        );
        self.axis_minimum = min;
        self.axis_maximum = max;
        self.entries = values.entries;
        self.decimals = values.decimals;
        Ok(())
    }

    /// Builds a transformer for this axis' range against an X range.
    pub fn transformer(
        &self,
        view_port: &ViewPortHandler,
        x_min: f64,
        x_max: f64,
    ) -> ChartResult<Transformer> {
        Transformer::for_ranges(
            view_port,
            x_min,
            x_max,
            self.axis_minimum,
            self.axis_maximum,
            self.config.inverted,
        )
    }

    pub fn set_value_formatter(
        &mut self,
        formatter: impl Fn(f64, usize) -> String + Send + Sync + 'static,
    ) {
        self.value_formatter = Some(Arc::new(formatter));
    }

    pub fn clear_value_formatter(&mut self) {
        self.value_formatter = None;
    }

    /// Label text for entry `index`; empty when the index is out of range.
    #[must_use]
    pub fn formatted_label(&self, index: usize) -> String {
        let Some(&value) = self.entries.get(index) else {
            return String::new();
        };
        match &self.value_formatter {
            Some(formatter) => formatter(value, self.decimals),
            None => format_fixed(value, self.decimals),
        }
    }

    /// Longest label text in characters, for hosts sizing the axis margin.
    #[must_use]
    pub fn longest_label(&self) -> String {
        (0..self.entry_count())
            .map(|index| self.formatted_label(index))
            .max_by_key(|label| label.chars().count())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn limit_lines(&self) -> &[LimitLine] {
        &self.config.limit_lines
    }

    pub fn add_limit_line(&mut self, line: LimitLine) -> ChartResult<()> {
        line.validate()?;
        self.config.limit_lines.push(line);
        Ok(())
    }

    /// Removes the first limit line equal to `line`; returns whether one was removed.
    pub fn remove_limit_line(&mut self, line: &LimitLine) -> bool {
        match self.config.limit_lines.iter().position(|l| l == line) {
            Some(index) => {
                self.config.limit_lines.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn remove_all_limit_lines(&mut self) {
        self.config.limit_lines.clear();
    }
}

fn format_fixed(value: f64, decimals: usize) -> String {
    let text = format!("{value:.decimals$}");
    // "-0", "-0.00" and friends read as zero.
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text[1..].to_owned()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::{YAxis, format_fixed};
    use crate::axis::{AxisConfig, LimitLine};

    #[test]
    fn compute_axis_stores_entries_and_decimals() {
        let mut axis = YAxis::new(AxisConfig::default()).expect("axis");
        axis.compute_axis(0.0, 1.0).expect("compute");

        assert_eq!(axis.decimals(), 1);
        assert_eq!(axis.entry_count(), axis.entries().len());
        assert_eq!(axis.formatted_label(1), "0.2");
        assert_eq!(axis.axis_range(), (0.0, 1.0));
    }

    #[test]
    fn compute_axis_labels_narrow_fractional_range() {
        let mut axis = YAxis::new(AxisConfig::default()).expect("axis");
        axis.compute_axis(5.0, 5.42).expect("compute");

        assert!(axis.entry_count() >= 5);
        assert_eq!(axis.decimals(), 2);
        assert_eq!(axis.formatted_label(0), "5.04");
        assert!(axis.entries().iter().all(|v| (5.0..=5.42).contains(v)));
    }

    #[test]
    fn formatted_label_out_of_range_is_empty() {
        let mut axis = YAxis::default();
        axis.set_entries(vec![1.0]).expect("entries");
        assert_eq!(axis.formatted_label(1), "");
    }

    #[test]
    fn custom_formatter_overrides_fixed_decimals() {
        let mut axis = YAxis::default();
        axis.set_entries(vec![1.5, 2.5]).expect("entries");
        axis.set_decimals(2);
        axis.set_value_formatter(|value, decimals| format!("{value:.decimals$} %"));

        assert_eq!(axis.formatted_label(0), "1.50 %");
        axis.clear_value_formatter();
        assert_eq!(axis.formatted_label(1), "2.50");
    }

    #[test]
    fn rejects_non_finite_entries() {
        let mut axis = YAxis::default();
        assert!(axis.set_entries(vec![0.0, f64::NAN]).is_err());
        assert!(axis.compute_axis(f64::NEG_INFINITY, 1.0).is_err());
    }

    #[test]
    fn limit_lines_add_and_remove() {
        let mut axis = YAxis::default();
        let line = LimitLine::new(50.0, "Target");
        axis.add_limit_line(line.clone()).expect("add");
        assert_eq!(axis.limit_lines().len(), 1);
        assert!(axis.remove_limit_line(&line));
        assert!(!axis.remove_limit_line(&line));
        axis.add_limit_line(line).expect("add");
        axis.remove_all_limit_lines();
        assert!(axis.limit_lines().is_empty());
    }

    #[test]
    fn negative_zero_formats_as_zero() {
        assert_eq!(format_fixed(-0.0, 2), "0.00");
        assert_eq!(format_fixed(-0.001, 1), "0.0");
        assert_eq!(format_fixed(-1.26, 1), "-1.3");
    }

    #[test]
    fn longest_label_picks_widest_text() {
        let mut axis = YAxis::default();
        axis.set_entries(vec![5.0, -1000.0, 20.0]).expect("entries");
        assert_eq!(axis.longest_label(), "-1000");
    }
}
