use cairo::{Antialias, Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, PI};

use crate::core::{Point, Rect};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawingContext, Font, LineCap, PathDrawingMode, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoDrawStats {
    pub paths_drawn: usize,
    pub texts_drawn: usize,
}

#[derive(Debug, Clone, Copy)]
struct PaintState {
    stroke_color: Color,
    fill_color: Color,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            stroke_color: Color::BLACK,
            fill_color: Color::BLACK,
        }
    }
}

/// Cairo + Pango + PangoCairo drawing context.
///
/// Cairo has a single source pattern, so stroke and fill colors are tracked
/// here and pushed/popped alongside `cairo_save`/`cairo_restore`.
/// Backend failures never abort a render pass; the first one is kept and
/// reported by [`CairoContext::take_error`].
#[derive(Debug)]
pub struct CairoContext {
    context: Context,
    surface: Option<ImageSurface>,
    paint: PaintState,
    saved_paint: Vec<PaintState>,
    first_error: Option<ChartError>,
    stats: CairoDrawStats,
}

impl CairoContext {
    /// Wraps an external Cairo context (for example a GTK `DrawingArea` callback).
    #[must_use]
    pub fn new(context: Context) -> Self {
        Self {
            context,
            surface: None,
            paint: PaintState::default(),
            saved_paint: Vec::new(),
            first_error: None,
            stats: CairoDrawStats::default(),
        }
    }

    /// Creates an offscreen ARGB32 image surface and a context drawing into it.
    pub fn offscreen(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }
        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        let mut this = Self::new(context);
        this.surface = Some(surface);
        Ok(this)
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> Option<&ImageSurface> {
        self.surface.as_ref()
    }

    #[must_use]
    pub fn stats(&self) -> CairoDrawStats {
        self.stats
    }

    /// Paints the whole clip region with `color`.
    pub fn clear(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        apply_color(&self.context, color);
        self.context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))
    }

    /// Returns and clears the first backend error recorded since the last call.
    pub fn take_error(&mut self) -> Option<ChartError> {
        self.first_error.take()
    }

    fn record(&mut self, prefix: &str, result: Result<(), cairo::Error>) {
        if let Err(err) = result {
            tracing::warn!(error = %err, "{prefix}");
            if self.first_error.is_none() {
                self.first_error = Some(map_backend_error(prefix, err));
            }
        }
    }
}

impl DrawingContext for CairoContext {
    fn save_state(&mut self) {
        let result = self.context.save();
        self.record("failed to save cairo state", result);
        self.saved_paint.push(self.paint);
    }

    fn restore_state(&mut self) {
        let result = self.context.restore();
        self.record("failed to restore cairo state", result);
        if let Some(paint) = self.saved_paint.pop() {
            self.paint = paint;
        }
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.paint.stroke_color = color;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.paint.fill_color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.context.set_line_width(width);
    }

    fn set_line_dash(&mut self, phase: f64, lengths: &[f64]) {
        self.context.set_dash(lengths, phase);
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.context.set_line_cap(match cap {
            LineCap::Butt => cairo::LineCap::Butt,
            LineCap::Round => cairo::LineCap::Round,
            LineCap::Square => cairo::LineCap::Square,
        });
    }

    fn set_should_antialias(&mut self, antialias: bool) {
        self.context.set_antialias(if antialias {
            Antialias::Default
        } else {
            Antialias::None
        });
    }

    fn clip_to_rect(&mut self, rect: Rect) {
        self.context.new_path();
        self.context
            .rectangle(rect.x, rect.y, rect.width, rect.height);
        self.context.clip();
    }

    fn begin_path(&mut self) {
        self.context.new_path();
    }

    fn move_to(&mut self, point: Point) {
        self.context.move_to(point.x, point.y);
    }

    fn add_line_to(&mut self, point: Point) {
        self.context.line_to(point.x, point.y);
    }

    fn add_rect(&mut self, rect: Rect) {
        self.context
            .rectangle(rect.x, rect.y, rect.width, rect.height);
    }

    fn add_rounded_rect(&mut self, rect: Rect, corner_radius: f64) {
        if corner_radius <= 0.0 {
            self.add_rect(rect);
            return;
        }

        let radius = corner_radius.min(rect.width * 0.5).min(rect.height * 0.5);
        let left = rect.left();
        let top = rect.top();
        let right = rect.right();
        let bottom = rect.bottom();

        self.context.new_sub_path();
        self.context
            .arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
        self.context
            .arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
        self.context
            .arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
        self.context
            .arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
        self.context.close_path();
    }

    fn close_path(&mut self) {
        self.context.close_path();
    }

    fn draw_path(&mut self, mode: PathDrawingMode) {
        let result = match mode {
            PathDrawingMode::Fill => {
                apply_color(&self.context, self.paint.fill_color);
                self.context.fill()
            }
            PathDrawingMode::Stroke => {
                apply_color(&self.context, self.paint.stroke_color);
                self.context.stroke()
            }
            PathDrawingMode::FillStroke => {
                apply_color(&self.context, self.paint.fill_color);
                self.context.fill_preserve().and_then(|()| {
                    apply_color(&self.context, self.paint.stroke_color);
                    self.context.stroke()
                })
            }
        };
        self.record("failed to paint path", result);
        self.stats.paths_drawn += 1;
    }

    fn draw_text(&mut self, text: &str, anchor: Point, align: TextHAlign, font: Font, color: Color) {
        let layout = pangocairo::functions::create_layout(&self.context);
        let font_description = FontDescription::from_string(&format!("Sans {}", font.size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(text);

        let (text_width, _text_height) = layout.pixel_size();
        let x = match align {
            TextHAlign::Left => anchor.x,
            TextHAlign::Center => anchor.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => anchor.x - f64::from(text_width),
        };

        apply_color(&self.context, color);
        self.context.move_to(x, anchor.y);
        pangocairo::functions::show_layout(&self.context, &layout);
        self.context.new_path();
        self.stats.texts_drawn += 1;
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
