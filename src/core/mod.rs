pub mod geometry;
pub mod transformer;
pub mod viewport;

pub use geometry::{AffineTransform, Point, Rect};
pub use transformer::{CoordinateTransformer, Transformer};
pub use viewport::ViewPortHandler;
