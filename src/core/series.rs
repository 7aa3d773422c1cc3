use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::core::SeriesMatrix;
use crate::error::{PlotError, PlotResult};
use crate::render::Color;

/// Stroke pattern applied when a line is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

impl LineStyle {
    /// Dash lengths in on/off pairs; empty means a solid stroke.
    #[must_use]
    pub fn dash_pattern(self) -> SmallVec<[f64; 4]> {
        match self {
            Self::Solid => SmallVec::new(),
            Self::Dashed => smallvec![6.0, 4.0],
            Self::Dotted => smallvec![1.0, 3.0],
            Self::DashDot => smallvec![6.0, 3.0, 1.0, 3.0],
        }
    }
}

/// Point marker drawn on top of the stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Marker {
    Circle,
    Square,
    Cross,
    Point,
}

/// Display attributes carried by a series into every scene it appears in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub width: f64,
    pub color: Option<Color>,
    pub line_style: LineStyle,
    pub marker: Option<Marker>,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            width: 1.0,
            color: None,
            line_style: LineStyle::Solid,
            marker: None,
        }
    }
}

impl SeriesStyle {
    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_line_style(mut self, line_style: LineStyle) -> Self {
        self.line_style = line_style;
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }
}

/// One named dataset bound to a subplot. Append-only once stored: the canvas
/// never mutates a series, renderers only select different frame columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    name: String,
    x: SeriesMatrix,
    y: SeriesMatrix,
    style: SeriesStyle,
}

impl Series {
    /// Validates the x/payload pairing.
    ///
    /// The x slab must either carry one column shared by every frame or one
    /// column per frame of the payload.
    pub fn new(
        name: impl Into<String>,
        x: SeriesMatrix,
        y: SeriesMatrix,
        style: SeriesStyle,
    ) -> PlotResult<Self> {
        if x.rows() != y.rows() {
            return Err(PlotError::InvalidData(format!(
                "x has {} points but payload has {}",
                x.rows(),
                y.rows()
            )));
        }
        if x.cols() != 1 && x.cols() != y.cols() {
            return Err(PlotError::InvalidData(format!(
                "x has {} frames but payload has {}",
                x.cols(),
                y.cols()
            )));
        }
        Ok(Self {
            name: name.into(),
            x,
            y,
            style,
        })
    }

    /// Single-curve series from two plain sequences.
    pub fn from_curve(
        name: impl Into<String>,
        x: &[f64],
        y: &[f64],
        style: SeriesStyle,
    ) -> PlotResult<Self> {
        Self::new(
            name,
            SeriesMatrix::from_curve(x)?,
            SeriesMatrix::from_curve(y)?,
            style,
        )
    }

    /// Frame family sharing one x sequence across all frames.
    pub fn from_frames(
        name: impl Into<String>,
        x: &[f64],
        frames: &[Vec<f64>],
        style: SeriesStyle,
    ) -> PlotResult<Self> {
        Self::new(
            name,
            SeriesMatrix::from_curve(x)?,
            SeriesMatrix::from_columns(frames)?,
            style,
        )
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn x(&self) -> &SeriesMatrix {
        &self.x
    }

    #[must_use]
    pub fn y(&self) -> &SeriesMatrix {
        &self.y
    }

    #[must_use]
    pub fn style(&self) -> &SeriesStyle {
        &self.style
    }

    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.y.cols()
    }

    /// X column paired with a payload frame; a shared single x column is
    /// reused for every frame.
    #[must_use]
    pub fn x_column_for(&self, frame: usize) -> Vec<f64> {
        self.x.column(frame.min(self.x.cols() - 1))
    }
}
