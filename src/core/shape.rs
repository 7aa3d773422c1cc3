use serde::{Deserialize, Serialize};

use crate::core::SeriesStyle;
use crate::error::{PlotError, PlotResult};

/// Geometric overlay drawn once on a subplot, stored apart from the series
/// and never consulted by axis autoscaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle {
        center: (f64, f64),
        radius: f64,
        fill: bool,
    },
}

impl Shape {
    #[must_use]
    pub const fn circle(center: (f64, f64), radius: f64) -> Self {
        Self::Circle {
            center,
            radius,
            fill: true,
        }
    }

    #[must_use]
    pub const fn circle_outline(center: (f64, f64), radius: f64) -> Self {
        Self::Circle {
            center,
            radius,
            fill: false,
        }
    }

    pub fn validate(&self) -> PlotResult<()> {
        match self {
            Self::Circle { center, radius, .. } => {
                if !center.0.is_finite() || !center.1.is_finite() {
                    return Err(PlotError::InvalidData(
                        "circle center must be finite".to_owned(),
                    ));
                }
                if !radius.is_finite() || *radius <= 0.0 {
                    return Err(PlotError::InvalidData(
                        "circle radius must be finite and > 0".to_owned(),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Vertical reference line at a data-space x position.
///
/// `y_span` is expressed in axis fractions (0 = bottom edge, 1 = top edge),
/// so the line keeps its extent when limits change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLine {
    pub x: f64,
    pub y_span: (f64, f64),
    pub style: SeriesStyle,
}

impl ReferenceLine {
    #[must_use]
    pub fn vertical(x: f64) -> Self {
        Self {
            x,
            y_span: (0.0, 1.0),
            style: SeriesStyle::default(),
        }
    }

    #[must_use]
    pub fn with_span(mut self, y_min: f64, y_max: f64) -> Self {
        self.y_span = (y_min, y_max);
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: SeriesStyle) -> Self {
        self.style = style;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::Shape;

    #[test]
    fn degenerate_circles_are_rejected() {
        assert!(Shape::circle((0.0, 0.0), 0.0).validate().is_err());
        assert!(Shape::circle((f64::NAN, 0.0), 1.0).validate().is_err());
        assert!(Shape::circle((1.0, 1.0), 0.5).validate().is_ok());
    }
}
