use indexmap::IndexMap;
use tracing::debug;

use super::scene_builder;
use crate::core::{Canvas, SubplotId};
use crate::error::PlotResult;
use crate::render::{SceneFrame, SceneSink};

/// Normalized progress selecting which frame column of each series a static
/// render displays.
///
/// A uniform fraction applies to every subplot; a per-subplot map lets each
/// subplot show its own instant, with absent subplots defaulting to 0.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeFraction {
    Uniform(f64),
    PerSubplot(IndexMap<SubplotId, f64>),
}

impl Default for TimeFraction {
    fn default() -> Self {
        Self::Uniform(0.0)
    }
}

impl From<f64> for TimeFraction {
    fn from(fraction: f64) -> Self {
        Self::Uniform(fraction)
    }
}

impl TimeFraction {
    #[must_use]
    pub fn for_subplot(&self, id: SubplotId) -> f64 {
        match self {
            Self::Uniform(fraction) => *fraction,
            Self::PerSubplot(map) => map.get(&id).copied().unwrap_or(0.0),
        }
    }
}

/// Static renderer: draws one fixed time slice of every stored series.
#[derive(Debug)]
pub struct Plotter;

impl Plotter {
    /// Materializes the scene for one caller-chosen instant.
    ///
    /// Each series shows frame column `round(f · (frame_count − 1))` against
    /// its x data.
    #[must_use]
    pub fn compose(canvas: &Canvas, fraction: &TimeFraction) -> SceneFrame {
        let mut scene = scene_builder::base_scene(canvas);
        for subplot in &mut scene.subplots {
            let Some(state) = canvas.subplot(subplot.id) else {
                continue;
            };
            let f = fraction.for_subplot(subplot.id);
            subplot.lines = state
                .series()
                .iter()
                .map(|series| {
                    let last = series.frame_count() - 1;
                    let column = (f * last as f64).round() as usize;
                    scene_builder::line_at(series, column)
                })
                .collect();
        }
        scene
    }

    /// Terminal render call: composes the scene and applies it to the sink.
    ///
    /// Takes the canvas by value; once a render has started no further
    /// configuration is possible.
    pub fn show<S: SceneSink>(
        canvas: Canvas,
        fraction: impl Into<TimeFraction>,
        sink: &mut S,
    ) -> PlotResult<()> {
        let fraction = fraction.into();
        let scene = Self::compose(&canvas, &fraction);
        debug!(lines = scene.line_count(), "showing static plot");
        sink.apply(&scene)
    }
}
