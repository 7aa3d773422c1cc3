use serde::{Deserialize, Serialize};

use crate::core::{AxisWindow, GridShape, LegendAnchor, ReferenceLine, SeriesStyle, Shape, SubplotId};
use crate::error::{PlotError, PlotResult};

/// Drawable state of one line handle at one instant: the selected x/y frame
/// columns plus the style and legend name carried from its series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineScene {
    pub name: String,
    pub style: SeriesStyle,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl LineScene {
    pub fn validate(&self) -> PlotResult<()> {
        // An init scene carries full x with no y yet; otherwise the slices
        // must pair up point for point.
        if !self.y.is_empty() && self.x.len() != self.y.len() {
            return Err(PlotError::InvalidData(format!(
                "line `{}` has {} x values but {} y values",
                self.name,
                self.x.len(),
                self.y.len()
            )));
        }
        if !self.style.width.is_finite() || self.style.width <= 0.0 {
            return Err(PlotError::InvalidData(format!(
                "line `{}` width must be finite and > 0",
                self.name
            )));
        }
        if let Some(color) = self.style.color {
            color.validate()?;
        }
        Ok(())
    }
}

/// Everything a backend needs to draw one subplot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubplotScene {
    pub id: SubplotId,
    pub axis: AxisWindow,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub title: Option<String>,
    pub legend: Option<LegendAnchor>,
    pub frame_on: bool,
    pub shapes: Vec<Shape>,
    pub reference_lines: Vec<ReferenceLine>,
    pub lines: Vec<LineScene>,
}

impl SubplotScene {
    pub fn validate(&self) -> PlotResult<()> {
        if !(self.axis.x_min.is_finite()
            && self.axis.x_max.is_finite()
            && self.axis.y_min.is_finite()
            && self.axis.y_max.is_finite())
        {
            return Err(PlotError::InvalidData(format!(
                "subplot ({}, {}) axis window must be finite",
                self.id.row, self.id.col
            )));
        }
        for shape in &self.shapes {
            shape.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        Ok(())
    }
}

/// Backend-agnostic scene for one draw pass over the whole canvas.
///
/// Scenes are fully materialized and deterministic so sinks and tests consume
/// the exact same output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneFrame {
    pub grid: GridShape,
    pub subplots: Vec<SubplotScene>,
}

impl SceneFrame {
    pub fn validate(&self) -> PlotResult<()> {
        for subplot in &self.subplots {
            subplot.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.subplots.iter().map(|subplot| subplot.lines.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subplots.iter().all(|subplot| {
            subplot.lines.is_empty() && subplot.shapes.is_empty() && subplot.reference_lines.is_empty()
        })
    }
}
