//! Pure scene composition from canvas state.
//!
//! Renderers call into this module to materialize `SceneFrame`s; nothing
//! here touches a sink, so the exact same output feeds display backends,
//! snapshots, and assertions.

use crate::core::{Canvas, Series, SubplotState};
use crate::render::{LineScene, SceneFrame, SubplotScene};

/// Subplot scene without line data: window, labels, overlays, legend.
pub(crate) fn base_subplot_scene(state: &SubplotState) -> SubplotScene {
    SubplotScene {
        id: state.id(),
        axis: state.axis(),
        x_label: state.x_label().map(str::to_owned),
        y_label: state.y_label().map(str::to_owned),
        title: state.title().map(str::to_owned),
        legend: state.legend(),
        frame_on: state.frame_on(),
        shapes: state.shapes().to_vec(),
        reference_lines: state.reference_lines().to_vec(),
        lines: Vec::new(),
    }
}

/// Line handle showing one frame column of its series.
pub(crate) fn line_at(series: &Series, frame: usize) -> LineScene {
    let frame = frame.min(series.frame_count() - 1);
    LineScene {
        name: series.name().to_owned(),
        style: series.style().clone(),
        x: series.x_column_for(frame),
        y: series.y().column(frame),
    }
}

/// Line handle reset for animation init: full x data, no y yet.
pub(crate) fn line_reset(series: &Series) -> LineScene {
    LineScene {
        name: series.name().to_owned(),
        style: series.style().clone(),
        x: series.x_column_for(0),
        y: Vec::new(),
    }
}

/// Scene skeleton covering every subplot of the grid, lines left empty.
pub(crate) fn base_scene(canvas: &Canvas) -> SceneFrame {
    SceneFrame {
        grid: canvas.shape(),
        subplots: canvas.subplots().map(base_subplot_scene).collect(),
    }
}
