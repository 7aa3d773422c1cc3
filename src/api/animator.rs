use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::scene_builder;
use crate::core::Canvas;
use crate::error::{PlotError, PlotResult};
use crate::render::{SceneFrame, SceneSink};

/// Playback parameters for the animated renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimatorConfig {
    /// Frames per second driven against the sink.
    pub frame_rate: f64,
    /// Total animation duration in seconds at speed factor 1.
    pub duration: f64,
    /// Playback speed multiplier; above 1 plays faster with fewer frames.
    pub speed_factor: f64,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60.0,
            duration: 5.0,
            speed_factor: 1.0,
        }
    }
}

impl AnimatorConfig {
    #[must_use]
    pub fn with_frame_rate(mut self, frame_rate: f64) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn with_speed_factor(mut self, speed_factor: f64) -> Self {
        self.speed_factor = speed_factor;
        self
    }
}

/// Accounting returned when playback ends (the sink's surface closed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackReport {
    pub frames_applied: usize,
    pub passes: usize,
}

/// Animated renderer: drives a frame loop over the stored series, each frame
/// selecting one column slice per series so heterogeneous series lengths stay
/// synchronized through a shared progress fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animator {
    config: AnimatorConfig,
    total_frames: usize,
}

impl Animator {
    pub fn new(config: AnimatorConfig) -> PlotResult<Self> {
        for (name, value) in [
            ("frame_rate", config.frame_rate),
            ("duration", config.duration),
            ("speed_factor", config.speed_factor),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlotError::InvalidConfig(format!(
                    "{name} must be finite and > 0, got {value}"
                )));
            }
        }

        let total_frames =
            (config.frame_rate * config.duration / config.speed_factor).round() as usize;
        if total_frames == 0 {
            return Err(PlotError::InvalidConfig(
                "configuration yields zero animation frames".to_owned(),
            ));
        }
        Ok(Self {
            config,
            total_frames,
        })
    }

    #[must_use]
    pub fn config(&self) -> AnimatorConfig {
        self.config
    }

    #[must_use]
    pub fn total_frames(&self) -> usize {
        self.total_frames
    }

    /// Delay between frame updates: `1000 / frame_rate` milliseconds.
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.config.frame_rate)
    }

    /// Progress fraction in `[0, 1)` for a frame index.
    #[must_use]
    pub fn progress(&self, frame: usize) -> f64 {
        frame as f64 / self.total_frames as f64
    }

    /// Scene applied once before the frame loop: every line reset to its
    /// full x data with no y yet, and stored shapes attached to their
    /// subplots exactly once.
    #[must_use]
    pub fn init_scene(&self, canvas: &Canvas) -> SceneFrame {
        let mut scene = scene_builder::base_scene(canvas);
        for subplot in &mut scene.subplots {
            let Some(state) = canvas.subplot(subplot.id) else {
                continue;
            };
            subplot.lines = state.series().iter().map(scene_builder::line_reset).collect();
        }
        scene
    }

    /// Scene for one frame of playback.
    ///
    /// Every series shows column `⌊frame_count · f⌋` of its own slab, so
    /// series of different native lengths reach their final column together.
    /// Overlays are attached once by the init scene and not repeated here.
    #[must_use]
    pub fn frame_scene(&self, canvas: &Canvas, frame: usize) -> SceneFrame {
        // TODO: cache the base scene across frames instead of recomposing the
        // label/overlay skeleton on every update.
        let f = self.progress(frame);
        let mut scene = scene_builder::base_scene(canvas);
        for subplot in &mut scene.subplots {
            subplot.shapes.clear();
            let Some(state) = canvas.subplot(subplot.id) else {
                continue;
            };
            subplot.lines = state
                .series()
                .iter()
                .map(|series| {
                    let column = (series.frame_count() as f64 * f) as usize;
                    scene_builder::line_at(series, column)
                })
                .collect();
        }
        scene
    }

    /// Blocking playback: applies the init scene, then loops the frame
    /// schedule while the sink reports an open surface.
    ///
    /// Frame pacing only applies to live surfaces; a closed (headless) sink
    /// gets exactly one unthrottled pass. Takes the canvas by value; no
    /// configuration is possible once playback has started.
    pub fn show<S: SceneSink>(&self, canvas: Canvas, sink: &mut S) -> PlotResult<PlaybackReport> {
        info!(
            frames = self.total_frames,
            frame_rate = self.config.frame_rate,
            speed_factor = self.config.speed_factor,
            "starting animation playback"
        );
        sink.apply(&self.init_scene(&canvas))?;

        let mut frames_applied = 0;
        let mut passes = 0;
        loop {
            for frame in 0..self.total_frames {
                sink.apply(&self.frame_scene(&canvas, frame))?;
                frames_applied += 1;
                if sink.is_open() {
                    std::thread::sleep(self.frame_interval());
                }
            }
            passes += 1;
            if !sink.is_open() {
                break;
            }
        }
        debug!(frames_applied, passes, "animation playback finished");
        Ok(PlaybackReport {
            frames_applied,
            passes,
        })
    }
}
