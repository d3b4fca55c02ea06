use serde::{Deserialize, Serialize};

/// Point in either value space or pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned rectangle with the origin at its top-left corner (Y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    #[must_use]
    pub fn left(self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn top(self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    /// Grows the rectangle by `amount` vertically, half above and half below.
    #[must_use]
    pub fn expanded_vertically(self, amount: f64) -> Self {
        Self::new(
            self.x,
            self.y - amount / 2.0,
            self.width,
            self.height + amount,
        )
    }

    #[must_use]
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }
}

/// 2D affine matrix mapping `(x, y)` to
/// `(a * x + c * y + tx, b * x + d * y + ty)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AffineTransform {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    #[must_use]
    pub const fn translation(tx: f64, ty: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    #[must_use]
    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    #[must_use]
    pub fn apply(self, point: Point) -> Point {
        Point::new(
            self.a * point.x + self.c * point.y + self.tx,
            self.b * point.x + self.d * point.y + self.ty,
        )
    }

    /// Returns the transform that applies `self` first and `next` second.
    #[must_use]
    pub fn then(self, next: Self) -> Self {
        Self::new(
            self.a * next.a + self.b * next.c,
            self.a * next.b + self.b * next.d,
            self.c * next.a + self.d * next.c,
            self.c * next.b + self.d * next.d,
            self.tx * next.a + self.ty * next.c + next.tx,
            self.tx * next.b + self.ty * next.d + next.ty,
        )
    }

    /// Inverse matrix, or `None` when the matrix is singular.
    #[must_use]
    pub fn invert(self) -> Option<Self> {
        let det = self.a * self.d - self.b * self.c;
        if !det.is_finite() || det == 0.0 {
            return None;
        }
        Some(Self::new(
            self.d / det,
            -self.b / det,
            -self.c / det,
            self.a / det,
            (self.c * self.ty - self.d * self.tx) / det,
            (self.b * self.tx - self.a * self.ty) / det,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::{AffineTransform, Point, Rect};

    #[test]
    fn then_applies_left_operand_first() {
        let scale_then_move = AffineTransform::scale(2.0, -1.0).then(AffineTransform::translation(10.0, 5.0));
        let mapped = scale_then_move.apply(Point::new(3.0, 4.0));
        assert_eq!(mapped, Point::new(16.0, 1.0));
    }

    #[test]
    fn invert_undoes_scale_and_translation() {
        let matrix = AffineTransform::scale(4.0, -2.0).then(AffineTransform::translation(-7.0, 30.0));
        let inverse = matrix.invert().expect("invertible");
        let point = Point::new(12.5, -3.25);
        let back = inverse.apply(matrix.apply(point));
        assert!((back.x - point.x).abs() < 1e-12);
        assert!((back.y - point.y).abs() < 1e-12);
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        assert!(AffineTransform::scale(0.0, 1.0).invert().is_none());
    }

    #[test]
    fn expanded_vertically_splits_amount_between_edges() {
        let rect = Rect::from_edges(40.0, 10.0, 300.0, 200.0).expanded_vertically(2.0);
        assert_eq!(rect.top(), 9.0);
        assert_eq!(rect.bottom(), 201.0);
        assert_eq!(rect.left(), 40.0);
        assert_eq!(rect.right(), 300.0);
    }
}
