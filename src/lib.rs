//! phaseplot: subplot canvas and renderers for small numerical experiments.
//!
//! This crate provides a Rust-idiomatic canvas state model (subplot grid,
//! append-only series store, lazy axis rescaling) together with a static
//! renderer and a frame-driven animator, both composing backend-agnostic
//! scenes applied through a sink trait.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod systems;
pub mod telemetry;

pub use api::{Animator, AnimatorConfig, Plotter, TimeFraction};
pub use crate::core::{Canvas, OpOutcome};
pub use error::{PlotError, PlotResult};
