mod animator;
mod plotter;
mod scene_builder;

pub use animator::{Animator, AnimatorConfig, PlaybackReport};
pub use plotter::{Plotter, TimeFraction};
