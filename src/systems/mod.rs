//! Numerical experiments wired to the canvas: return maps, attractor
//! integration, and the projection glue between them.

pub mod cobweb;
pub mod lorenz;
pub mod ode;
pub mod projection;
pub mod rossler;

pub use cobweb::{CobwebPath, cobweb, poincare_map};
pub use lorenz::LorenzParams;
pub use ode::{OdeDiagnostics, OdeOptions, OdeSolution, solve_ode};
pub use projection::{Projection, plot_solution};
pub use rossler::RosslerParams;

/// Evenly spaced sample times over `[start, end]`, inclusive of both ends.
#[must_use]
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![start];
    }
    let step = (end - start) / (count - 1) as f64;
    (0..count).map(|i| start + step * i as f64).collect()
}
