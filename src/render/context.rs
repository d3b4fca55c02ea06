use std::ops::{Deref, DerefMut};

use crate::core::{Point, Rect};
use crate::render::{Color, Font, LineCap, PathDrawingMode, TextHAlign};

/// Stateful immediate-mode 2D drawing sink.
///
/// Style setters (colors, width, dash, cap, antialiasing, clip) persist until
/// the next `restore_state` that pops them, so callers bracket their changes
/// with [`StateGuard`].
pub trait DrawingContext {
    fn save_state(&mut self);
    fn restore_state(&mut self);

    fn set_stroke_color(&mut self, color: Color);
    fn set_fill_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    /// An empty `lengths` slice turns dashing off.
    fn set_line_dash(&mut self, phase: f64, lengths: &[f64]);
    fn set_line_cap(&mut self, cap: LineCap);
    fn set_should_antialias(&mut self, antialias: bool);
    /// Intersects the current clip region with `rect`.
    fn clip_to_rect(&mut self, rect: Rect);

    fn begin_path(&mut self);
    fn move_to(&mut self, point: Point);
    fn add_line_to(&mut self, point: Point);
    fn add_rect(&mut self, rect: Rect);
    fn add_rounded_rect(&mut self, rect: Rect, corner_radius: f64);
    fn close_path(&mut self);
    /// Paints and consumes the current path.
    fn draw_path(&mut self, mode: PathDrawingMode);

    fn draw_text(&mut self, text: &str, anchor: Point, align: TextHAlign, font: Font, color: Color);

    fn stroke_segment(&mut self, from: Point, to: Point) {
        self.begin_path();
        self.move_to(from);
        self.add_line_to(to);
        self.draw_path(PathDrawingMode::Stroke);
    }
}

/// Saves the context state on creation and restores it when dropped.
///
/// Derefs to the wrapped context, so drawing goes through the guard and every
/// exit path (including early returns) rebalances the save.
pub struct StateGuard<'c, C: DrawingContext + ?Sized> {
    context: &'c mut C,
}

impl<'c, C: DrawingContext + ?Sized> StateGuard<'c, C> {
    pub fn new(context: &'c mut C) -> Self {
        context.save_state();
        Self { context }
    }
}

impl<C: DrawingContext + ?Sized> Deref for StateGuard<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.context
    }
}

impl<C: DrawingContext + ?Sized> DerefMut for StateGuard<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.context
    }
}

impl<C: DrawingContext + ?Sized> Drop for StateGuard<'_, C> {
    fn drop(&mut self) {
        self.context.restore_state();
    }
}

impl<C: DrawingContext + ?Sized> std::fmt::Debug for StateGuard<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateGuard").finish_non_exhaustive()
    }
}
