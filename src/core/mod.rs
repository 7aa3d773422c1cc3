pub mod axis;
pub mod canvas;
pub mod grid;
pub mod matrix;
pub mod series;
pub mod shape;

pub use axis::{AnchorPoint, AxisWindow};
pub use canvas::{
    Canvas, DEFAULT_MARGIN_FRACTION, LegendAnchor, OpOutcome, SkipReason, SubplotState,
};
pub use grid::{GridShape, SubplotId, SubplotTarget};
pub use matrix::SeriesMatrix;
pub use series::{LineStyle, Marker, Series, SeriesStyle};
pub use shape::{ReferenceLine, Shape};
