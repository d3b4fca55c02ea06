use crate::core::{CoordinateTransformer, Point};

use super::YAxisRenderer;

impl<T: CoordinateTransformer + ?Sized> YAxisRenderer<'_, T> {
    /// Pixel positions of the tick entries, index-aligned with `YAxis::entries`.
    ///
    /// Only the Y component is meaningful; X is the pixel for value-space `x = 0`.
    #[must_use]
    pub fn transformed_positions(&self) -> Vec<Point> {
        let (Some(axis), Some(transformer)) = (self.axis, self.transformer) else {
            return Vec::new();
        };

        let mut positions: Vec<Point> = axis
            .entries()
            .iter()
            .map(|&value| Point::new(0.0, value))
            .collect();
        transformer.point_values_to_pixel(&mut positions);
        positions
    }
}
