use crate::core::geometry::{AffineTransform, Point};
use crate::core::viewport::ViewPortHandler;
use crate::error::{ChartError, ChartResult};

/// Maps value-space points into pixel space for one chart axis pair.
///
/// Only `value_to_pixel_matrix` is required; the batch and single-point helpers
/// are derived from it so every implementation maps points identically.
pub trait CoordinateTransformer {
    fn value_to_pixel_matrix(&self) -> AffineTransform;

    /// Converts every point in place from value space to pixel space.
    fn point_values_to_pixel(&self, points: &mut [Point]) {
        let matrix = self.value_to_pixel_matrix();
        for point in points {
            *point = matrix.apply(*point);
        }
    }

    fn pixel_for_values(&self, x: f64, y: f64) -> Point {
        self.value_to_pixel_matrix().apply(Point::new(x, y))
    }

    /// Maps a pixel back into value space; `None` for a degenerate matrix.
    fn values_by_touch_point(&self, pixel: Point) -> Option<Point> {
        self.value_to_pixel_matrix()
            .invert()
            .map(|inverse| inverse.apply(pixel))
    }
}

/// Affine value-to-pixel transformer built from the visible value ranges and
/// the viewport offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transformer {
    matrix_value_to_px: AffineTransform,
    matrix_offset: AffineTransform,
}

impl Default for Transformer {
    fn default() -> Self {
        Self {
            matrix_value_to_px: AffineTransform::IDENTITY,
            matrix_offset: AffineTransform::IDENTITY,
        }
    }
}

impl Transformer {
    /// Builds a transformer mapping `[x_min, x_max] x [y_min, y_max]` onto the
    /// handler's content rectangle.
    pub fn for_ranges(
        view_port: &ViewPortHandler,
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
        inverted: bool,
    ) -> ChartResult<Self> {
        let mut transformer = Self::default();
        transformer.prepare_matrix_value_px(view_port, x_min, x_max - x_min, y_max - y_min, y_min)?;
        transformer.prepare_matrix_offset(view_port, inverted);
        Ok(transformer)
    }

    /// Scales value deltas to content size and moves the value origin to `(x_min, y_min)`.
    ///
    /// A zero delta collapses that axis to a single pixel coordinate instead of
    /// producing an infinite scale.
    pub fn prepare_matrix_value_px(
        &mut self,
        view_port: &ViewPortHandler,
        x_min: f64,
        delta_x: f64,
        delta_y: f64,
        y_min: f64,
    ) -> ChartResult<()> {
        for (name, value) in [
            ("x_min", x_min),
            ("delta_x", delta_x),
            ("delta_y", delta_y),
            ("y_min", y_min),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "transformer input `{name}` must be finite"
                )));
            }
        }

        let scale_x = finite_scale(view_port.content_width(), delta_x);
        let scale_y = finite_scale(view_port.content_height(), delta_y);

        self.matrix_value_to_px = AffineTransform::translation(-x_min, -y_min)
            .then(AffineTransform::scale(scale_x, -scale_y));
        Ok(())
    }

    /// Moves the scaled values into the content rectangle.
    ///
    /// Non-inverted axes grow upward from the content bottom; inverted axes
    /// grow downward from the content top.
    pub fn prepare_matrix_offset(&mut self, view_port: &ViewPortHandler, inverted: bool) {
        self.matrix_offset = if inverted {
            AffineTransform::translation(view_port.offset_left(), -view_port.offset_top())
                .then(AffineTransform::scale(1.0, -1.0))
        } else {
            AffineTransform::translation(
                view_port.offset_left(),
                view_port.chart_height() - view_port.offset_bottom(),
            )
        };
    }
}

impl CoordinateTransformer for Transformer {
    fn value_to_pixel_matrix(&self) -> AffineTransform {
        self.matrix_value_to_px.then(self.matrix_offset)
    }
}

fn finite_scale(extent_px: f64, delta: f64) -> f64 {
    let scale = extent_px / delta;
    if scale.is_finite() { scale } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{CoordinateTransformer, Transformer};
    use crate::core::{Point, ViewPortHandler};

    fn view_port() -> ViewPortHandler {
        ViewPortHandler::new(340.0, 230.0)
            .and_then(|h| h.with_offsets(40.0, 10.0, 40.0, 30.0))
            .expect("viewport")
    }

    #[test]
    fn maps_range_extremes_to_content_edges() {
        let transformer =
            Transformer::for_ranges(&view_port(), 0.0, 10.0, 0.0, 100.0, false).expect("transformer");

        let bottom = transformer.pixel_for_values(0.0, 0.0);
        let top = transformer.pixel_for_values(10.0, 100.0);

        assert_relative_eq!(bottom.x, 40.0);
        assert_relative_eq!(bottom.y, 200.0);
        assert_relative_eq!(top.x, 300.0);
        assert_relative_eq!(top.y, 10.0);
    }

    #[test]
    fn inverted_axis_grows_downward() {
        let transformer =
            Transformer::for_ranges(&view_port(), 0.0, 10.0, 0.0, 100.0, true).expect("transformer");

        assert_relative_eq!(transformer.pixel_for_values(0.0, 0.0).y, 10.0);
        assert_relative_eq!(transformer.pixel_for_values(0.0, 100.0).y, 200.0);
    }

    #[test]
    fn batch_conversion_matches_single_point_conversion() {
        let transformer =
            Transformer::for_ranges(&view_port(), 0.0, 10.0, -50.0, 50.0, false).expect("transformer");
        let mut points = vec![Point::new(0.0, -50.0), Point::new(0.0, 12.5), Point::new(0.0, 50.0)];
        let expected: Vec<Point> = points
            .iter()
            .map(|p| transformer.pixel_for_values(p.x, p.y))
            .collect();

        transformer.point_values_to_pixel(&mut points);

        assert_eq!(points, expected);
    }

    #[test]
    fn touch_point_round_trips_to_values() {
        let transformer =
            Transformer::for_ranges(&view_port(), 0.0, 10.0, 0.0, 100.0, false).expect("transformer");
        let pixel = transformer.pixel_for_values(2.5, 75.0);
        let values = transformer.values_by_touch_point(pixel).expect("invertible");

        assert_relative_eq!(values.x, 2.5, epsilon = 1e-9);
        assert_relative_eq!(values.y, 75.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_value_span_collapses_instead_of_overflowing() {
        let transformer =
            Transformer::for_ranges(&view_port(), 0.0, 10.0, 5.0, 5.0, false).expect("transformer");
        let pixel = transformer.pixel_for_values(0.0, 5.0);

        assert!(pixel.is_finite());
        assert!(transformer.values_by_touch_point(pixel).is_none());
    }
}
