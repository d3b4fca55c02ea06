use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn gray(level: f64) -> Self {
        Self::rgb(level, level, level)
    }

    /// Builds a color from 8-bit channels.
    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Stroke end-cap style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

/// Dash pattern: alternating on/off lengths starting at `phase`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineDash {
    pub phase: f64,
    pub lengths: SmallVec<[f64; 4]>,
}

impl LineDash {
    #[must_use]
    pub fn new(phase: f64, lengths: &[f64]) -> Self {
        Self {
            phase,
            lengths: SmallVec::from_slice(lengths),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.phase.is_finite() {
            return Err(ChartError::InvalidData(
                "dash phase must be finite".to_owned(),
            ));
        }
        if self.lengths.iter().any(|len| !len.is_finite() || *len < 0.0) {
            return Err(ChartError::InvalidData(
                "dash lengths must be finite and >= 0".to_owned(),
            ));
        }
        if !self.lengths.is_empty() && self.lengths.iter().all(|len| *len == 0.0) {
            return Err(ChartError::InvalidData(
                "dash lengths must not all be zero".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Horizontal text alignment relative to the text anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Font as seen by layout code: a size plus the measured line height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub size_px: f64,
    pub line_height: f64,
}

impl Font {
    /// Line height to size ratio of the default system sans face.
    pub const DEFAULT_LINE_HEIGHT_RATIO: f64 = 1.2;

    #[must_use]
    pub fn new(size_px: f64) -> Self {
        Self {
            size_px,
            line_height: size_px * Self::DEFAULT_LINE_HEIGHT_RATIO,
        }
    }

    #[must_use]
    pub fn with_line_height(mut self, line_height: f64) -> Self {
        self.line_height = line_height;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.size_px.is_finite() || self.size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        if !self.line_height.is_finite() || self.line_height < 0.0 {
            return Err(ChartError::InvalidData(
                "font line height must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// How the current path is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathDrawingMode {
    Fill,
    Stroke,
    FillStroke,
}
