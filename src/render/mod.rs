mod null_sink;
mod primitives;
mod scene;

pub use null_sink::NullSink;
pub use primitives::Color;
pub use scene::{LineScene, SceneFrame, SubplotScene};

use crate::error::PlotResult;

/// Contract implemented by any display backend.
///
/// Sinks receive fully materialized, deterministic `SceneFrame`s so drawing
/// code stays isolated from canvas state and frame scheduling. The animator
/// keeps looping while `is_open` reports a live surface; headless sinks
/// report closed and get exactly one playback pass.
pub trait SceneSink {
    fn apply(&mut self, scene: &SceneFrame) -> PlotResult<()>;

    fn is_open(&self) -> bool {
        false
    }
}
