use crate::error::PlotResult;
use crate::render::{SceneFrame, SceneSink};

/// No-op sink used by tests and headless rendering.
///
/// It still validates every scene so tests catch invalid geometry before a
/// real backend is introduced, and records enough counters to assert on
/// playback behavior.
#[derive(Debug, Default)]
pub struct NullSink {
    pub scenes_applied: usize,
    pub last_line_count: usize,
    pub last_point_total: usize,
}

impl SceneSink for NullSink {
    fn apply(&mut self, scene: &SceneFrame) -> PlotResult<()> {
        scene.validate()?;
        self.scenes_applied += 1;
        self.last_line_count = scene.line_count();
        self.last_point_total = scene
            .subplots
            .iter()
            .flat_map(|subplot| subplot.lines.iter())
            .map(|line| line.y.len())
            .sum();
        Ok(())
    }
}
