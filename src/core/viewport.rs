use crate::core::geometry::Rect;
use crate::error::{ChartError, ChartResult};

/// Chart canvas size plus the content rectangle left after axis margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPortHandler {
    chart_width: f64,
    chart_height: f64,
    content_rect: Rect,
}

impl ViewPortHandler {
    /// Creates a handler whose content rectangle covers the whole chart.
    pub fn new(chart_width: f64, chart_height: f64) -> ChartResult<Self> {
        validate_chart_dimensions(chart_width, chart_height)?;
        Ok(Self {
            chart_width,
            chart_height,
            content_rect: Rect::new(0.0, 0.0, chart_width, chart_height),
        })
    }

    /// Resizes the chart while keeping the current offsets.
    pub fn set_chart_dimensions(&mut self, chart_width: f64, chart_height: f64) -> ChartResult<()> {
        validate_chart_dimensions(chart_width, chart_height)?;
        let (left, top, right, bottom) = (
            self.offset_left(),
            self.offset_top(),
            self.offset_right(),
            self.offset_bottom(),
        );
        self.chart_width = chart_width;
        self.chart_height = chart_height;
        self.restrain_view_port(left, top, right, bottom)
    }

    /// Shrinks the content rectangle by the given margins.
    pub fn restrain_view_port(
        &mut self,
        offset_left: f64,
        offset_top: f64,
        offset_right: f64,
        offset_bottom: f64,
    ) -> ChartResult<()> {
        for (name, value) in [
            ("left", offset_left),
            ("top", offset_top),
            ("right", offset_right),
            ("bottom", offset_bottom),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "viewport offset `{name}` must be finite and >= 0"
                )));
            }
        }
        if offset_left + offset_right > self.chart_width
            || offset_top + offset_bottom > self.chart_height
        {
            return Err(ChartError::InvalidData(
                "viewport offsets exceed chart dimensions".to_owned(),
            ));
        }

        self.content_rect = Rect::from_edges(
            offset_left,
            offset_top,
            self.chart_width - offset_right,
            self.chart_height - offset_bottom,
        );
        Ok(())
    }

    pub fn with_offsets(
        mut self,
        offset_left: f64,
        offset_top: f64,
        offset_right: f64,
        offset_bottom: f64,
    ) -> ChartResult<Self> {
        self.restrain_view_port(offset_left, offset_top, offset_right, offset_bottom)?;
        Ok(self)
    }

    #[must_use]
    pub fn chart_width(&self) -> f64 {
        self.chart_width
    }

    #[must_use]
    pub fn chart_height(&self) -> f64 {
        self.chart_height
    }

    #[must_use]
    pub fn content_rect(&self) -> Rect {
        self.content_rect
    }

    #[must_use]
    pub fn content_left(&self) -> f64 {
        self.content_rect.left()
    }

    #[must_use]
    pub fn content_right(&self) -> f64 {
        self.content_rect.right()
    }

    #[must_use]
    pub fn content_top(&self) -> f64 {
        self.content_rect.top()
    }

    #[must_use]
    pub fn content_bottom(&self) -> f64 {
        self.content_rect.bottom()
    }

    #[must_use]
    pub fn content_width(&self) -> f64 {
        self.content_rect.width
    }

    #[must_use]
    pub fn content_height(&self) -> f64 {
        self.content_rect.height
    }

    #[must_use]
    pub fn offset_left(&self) -> f64 {
        self.content_rect.left()
    }

    #[must_use]
    pub fn offset_right(&self) -> f64 {
        self.chart_width - self.content_rect.right()
    }

    #[must_use]
    pub fn offset_top(&self) -> f64 {
        self.content_rect.top()
    }

    #[must_use]
    pub fn offset_bottom(&self) -> f64 {
        self.chart_height - self.content_rect.bottom()
    }
}

fn validate_chart_dimensions(chart_width: f64, chart_height: f64) -> ChartResult<()> {
    if !chart_width.is_finite()
        || !chart_height.is_finite()
        || chart_width <= 0.0
        || chart_height <= 0.0
    {
        return Err(ChartError::InvalidViewport {
            width: chart_width,
            height: chart_height,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::ViewPortHandler;
    use crate::error::ChartError;

    #[test]
    fn restrain_view_port_derives_content_edges_and_offsets() {
        let handler = ViewPortHandler::new(340.0, 230.0)
            .and_then(|h| h.with_offsets(40.0, 10.0, 40.0, 30.0))
            .expect("valid viewport");

        assert_eq!(handler.content_left(), 40.0);
        assert_eq!(handler.content_right(), 300.0);
        assert_eq!(handler.content_top(), 10.0);
        assert_eq!(handler.content_bottom(), 200.0);
        assert_eq!(handler.offset_left(), 40.0);
        assert_eq!(handler.offset_bottom(), 30.0);
    }

    #[test]
    fn resize_keeps_offsets() {
        let mut handler = ViewPortHandler::new(200.0, 100.0)
            .and_then(|h| h.with_offsets(10.0, 5.0, 20.0, 15.0))
            .expect("valid viewport");
        handler.set_chart_dimensions(400.0, 300.0).expect("resize");

        assert_eq!(handler.content_right(), 380.0);
        assert_eq!(handler.content_bottom(), 285.0);
        assert_eq!(handler.offset_left(), 10.0);
    }

    #[test]
    fn rejects_non_positive_chart_size() {
        let err = ViewPortHandler::new(0.0, 100.0).expect_err("zero width");
        assert!(matches!(err, ChartError::InvalidViewport { .. }));
    }

    #[test]
    fn rejects_offsets_wider_than_chart() {
        let mut handler = ViewPortHandler::new(100.0, 100.0).expect("viewport");
        let err = handler
            .restrain_view_port(60.0, 0.0, 60.0, 0.0)
            .expect_err("offsets too wide");
        assert!(matches!(err, ChartError::InvalidData(_)));
    }
}
