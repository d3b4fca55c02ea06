use crate::core::{Point, Rect};
use crate::render::{Color, DrawingContext, Font, LineCap, PathDrawingMode, TextHAlign};

/// Snapshot of the style state a [`RecordingContext`] tracks.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphicsState {
    pub stroke_color: Color,
    pub fill_color: Color,
    pub line_width: f64,
    pub dash_phase: f64,
    pub dash_lengths: Vec<f64>,
    pub line_cap: LineCap,
    pub antialias: bool,
    pub clip: Option<Rect>,
}

impl Default for GraphicsState {
    fn default() -> Self {
        Self {
            stroke_color: Color::BLACK,
            fill_color: Color::BLACK,
            line_width: 1.0,
            dash_phase: 0.0,
            dash_lengths: Vec::new(),
            line_cap: LineCap::Butt,
            antialias: true,
            clip: None,
        }
    }
}

/// One call received by a [`RecordingContext`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    SaveState,
    RestoreState,
    SetStrokeColor(Color),
    SetFillColor(Color),
    SetLineWidth(f64),
    SetLineDash { phase: f64, lengths: Vec<f64> },
    SetLineCap(LineCap),
    SetShouldAntialias(bool),
    ClipToRect(Rect),
    BeginPath,
    MoveTo(Point),
    AddLineTo(Point),
    AddRect(Rect),
    AddRoundedRect { rect: Rect, corner_radius: f64 },
    ClosePath,
    DrawPath {
        mode: PathDrawingMode,
        /// State in effect when the path was painted.
        state: GraphicsState,
    },
    DrawText {
        text: String,
        anchor: Point,
        align: TextHAlign,
        font: Font,
        color: Color,
    },
}

/// Headless drawing context that records every call and tracks the state stack.
///
/// Used by tests and by hosts that diff draw passes without a real backend.
#[derive(Debug, Default)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    state: GraphicsState,
    saved: Vec<GraphicsState>,
    unbalanced_restores: usize,
}

impl RecordingContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    #[must_use]
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    #[must_use]
    pub fn state(&self) -> &GraphicsState {
        &self.state
    }

    /// Number of saves not yet matched by a restore.
    #[must_use]
    pub fn save_depth(&self) -> usize {
        self.saved.len()
    }

    /// Number of restores received with an empty save stack.
    #[must_use]
    pub fn unbalanced_restores(&self) -> usize {
        self.unbalanced_restores
    }

    /// Paint commands with the state they were painted with.
    pub fn painted_paths(&self) -> impl Iterator<Item = (PathDrawingMode, &GraphicsState)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::DrawPath { mode, state } => Some((*mode, state)),
            _ => None,
        })
    }

    /// Straight segments as `(from, to)` pairs, read from move/line commands
    /// that were followed by a stroke.
    #[must_use]
    pub fn stroked_segments(&self) -> Vec<(Point, Point)> {
        let mut segments = Vec::new();
        let mut pending = Vec::new();
        let mut cursor: Option<Point> = None;
        for command in &self.commands {
            match command {
                DrawCommand::BeginPath => {
                    pending.clear();
                    cursor = None;
                }
                DrawCommand::MoveTo(point) => cursor = Some(*point),
                DrawCommand::AddLineTo(point) => {
                    if let Some(from) = cursor {
                        pending.push((from, *point));
                    }
                    cursor = Some(*point);
                }
                DrawCommand::DrawPath { mode, .. } => {
                    if matches!(mode, PathDrawingMode::Stroke | PathDrawingMode::FillStroke) {
                        segments.append(&mut pending);
                    }
                    pending.clear();
                    cursor = None;
                }
                _ => {}
            }
        }
        segments
    }

    #[must_use]
    pub fn texts(&self) -> Vec<&DrawCommand> {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::DrawText { .. }))
            .collect()
    }
}

impl DrawingContext for RecordingContext {
    fn save_state(&mut self) {
        self.saved.push(self.state.clone());
        self.commands.push(DrawCommand::SaveState);
    }

    fn restore_state(&mut self) {
        match self.saved.pop() {
            Some(state) => self.state = state,
            None => self.unbalanced_restores += 1,
        }
        self.commands.push(DrawCommand::RestoreState);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.state.stroke_color = color;
        self.commands.push(DrawCommand::SetStrokeColor(color));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.state.fill_color = color;
        self.commands.push(DrawCommand::SetFillColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
        self.commands.push(DrawCommand::SetLineWidth(width));
    }

    fn set_line_dash(&mut self, phase: f64, lengths: &[f64]) {
        self.state.dash_phase = phase;
        self.state.dash_lengths = lengths.to_vec();
        self.commands.push(DrawCommand::SetLineDash {
            phase,
            lengths: lengths.to_vec(),
        });
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.state.line_cap = cap;
        self.commands.push(DrawCommand::SetLineCap(cap));
    }

    fn set_should_antialias(&mut self, antialias: bool) {
        self.state.antialias = antialias;
        self.commands.push(DrawCommand::SetShouldAntialias(antialias));
    }

    fn clip_to_rect(&mut self, rect: Rect) {
        let clipped = match self.state.clip {
            Some(current) => intersect(current, rect),
            None => rect,
        };
        self.state.clip = Some(clipped);
        self.commands.push(DrawCommand::ClipToRect(rect));
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, point: Point) {
        self.commands.push(DrawCommand::MoveTo(point));
    }

    fn add_line_to(&mut self, point: Point) {
        self.commands.push(DrawCommand::AddLineTo(point));
    }

    fn add_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::AddRect(rect));
    }

    fn add_rounded_rect(&mut self, rect: Rect, corner_radius: f64) {
        self.commands
            .push(DrawCommand::AddRoundedRect { rect, corner_radius });
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn draw_path(&mut self, mode: PathDrawingMode) {
        self.commands.push(DrawCommand::DrawPath {
            mode,
            state: self.state.clone(),
        });
    }

    fn draw_text(&mut self, text: &str, anchor: Point, align: TextHAlign, font: Font, color: Color) {
        self.commands.push(DrawCommand::DrawText {
            text: text.to_owned(),
            anchor,
            align,
            font,
            color,
        });
    }
}

fn intersect(a: Rect, b: Rect) -> Rect {
    let left = a.left().max(b.left());
    let top = a.top().max(b.top());
    let right = a.right().min(b.right()).max(left);
    let bottom = a.bottom().min(b.bottom()).max(top);
    Rect::from_edges(left, top, right, bottom)
}
