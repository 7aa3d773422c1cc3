use std::fmt;

use tracing::warn;

use crate::api::Plotter;
use crate::core::{Canvas, GridShape, Series, SeriesStyle, SubplotTarget};
use crate::error::{PlotError, PlotResult};
use crate::render::SceneSink;
use crate::systems::OdeSolution;

/// Named 2-D projection of a three-component solution.
///
/// Component pairs (`xz`, `xy`, `yz`) plot one state component against
/// another; time pairs (`tx`, `ty`, `tz`) plot a component over the sample
/// times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    Xz,
    Xy,
    Yz,
    Tx,
    Ty,
    Tz,
}

impl Projection {
    /// Parses a projection name, case-insensitively.
    ///
    /// Unknown names are reported and the render of that path aborted.
    pub fn parse(name: &str) -> PlotResult<Self> {
        match name.to_ascii_lowercase().as_str() {
            "xz" => Ok(Self::Xz),
            "xy" => Ok(Self::Xy),
            "yz" => Ok(Self::Yz),
            "tx" => Ok(Self::Tx),
            "ty" => Ok(Self::Ty),
            "tz" => Ok(Self::Tz),
            _ => {
                warn!(name, "projection is not valid");
                Err(PlotError::UnknownProjection(name.to_owned()))
            }
        }
    }

    #[must_use]
    pub const fn axis_labels(self) -> (&'static str, &'static str) {
        match self {
            Self::Xz => ("x", "z"),
            Self::Xy => ("x", "y"),
            Self::Yz => ("y", "z"),
            Self::Tx => ("t", "x"),
            Self::Ty => ("t", "y"),
            Self::Tz => ("t", "z"),
        }
    }

    /// Solution components carried to the horizontal/vertical axis;
    /// `None` means the horizontal axis takes the sample times.
    const fn components(self) -> (Option<usize>, usize) {
        match self {
            Self::Xz => (Some(0), 2),
            Self::Xy => (Some(0), 1),
            Self::Yz => (Some(1), 2),
            Self::Tx => (None, 0),
            Self::Ty => (None, 1),
            Self::Tz => (None, 2),
        }
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, v) = self.axis_labels();
        write!(f, "{h}{v}")
    }
}

/// Wires one integrated solution into a single-subplot canvas and renders it
/// through the chosen projection.
pub fn plot_solution<S: SceneSink>(
    solution: &OdeSolution,
    system_name: &str,
    projection: Projection,
    sink: &mut S,
) -> PlotResult<()> {
    let (horizontal, vertical) = projection.components();
    let required = horizontal.unwrap_or(0).max(vertical) + 1;
    if solution.dimension() < required {
        return Err(PlotError::InvalidData(format!(
            "projection `{projection}` needs {required} components, solution has {}",
            solution.dimension()
        )));
    }

    let x_data = match horizontal {
        Some(component) => solution.component(component),
        None => solution.times(),
    };
    let y_data = solution.component(vertical);

    let mut canvas = Canvas::new(GridShape::new(1, 1)?);
    let _ = canvas.add_series(
        (0, 0),
        Series::from_curve("RK4", x_data, y_data, SeriesStyle::default())?,
    );
    let (x_label, y_label) = projection.axis_labels();
    let _ = canvas.label_axes(
        SubplotTarget::All,
        x_label,
        y_label,
        Some(&format!("{projection}-plot of the {system_name} equations")),
    );

    Plotter::show(canvas, 0.0, sink)
}
