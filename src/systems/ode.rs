use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PlotError, PlotResult};

/// Integrator options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OdeOptions {
    /// Internal steps taken between consecutive sample times.
    pub substeps: usize,
}

impl Default for OdeOptions {
    fn default() -> Self {
        Self { substeps: 4 }
    }
}

/// Work accounting reported alongside a solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OdeDiagnostics {
    pub steps: usize,
    pub derivative_evals: usize,
}

/// Time series returned by the integrator: for each state-vector component,
/// an ordered sequence of values aligned to the sample times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OdeSolution {
    times: Vec<f64>,
    components: Vec<Vec<f64>>,
    diagnostics: OdeDiagnostics,
}

impl OdeSolution {
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    #[must_use]
    pub fn dimension(&self) -> usize {
        self.components.len()
    }

    #[must_use]
    pub fn component(&self, index: usize) -> &[f64] {
        &self.components[index]
    }

    #[must_use]
    pub fn diagnostics(&self) -> OdeDiagnostics {
        self.diagnostics
    }
}

/// Integrates `dy/dt = deriv(t, y)` with the classical fourth-order
/// Runge-Kutta scheme, sampling the state at each requested time.
///
/// `deriv` receives the current time and state and writes the derivative
/// into its output slice. Sample times must be finite and strictly
/// increasing.
pub fn solve_ode<F>(
    deriv: F,
    y0: &[f64],
    times: &[f64],
    options: OdeOptions,
) -> PlotResult<OdeSolution>
where
    F: Fn(f64, &[f64], &mut [f64]),
{
    if y0.is_empty() {
        return Err(PlotError::InvalidData(
            "initial state must not be empty".to_owned(),
        ));
    }
    if times.len() < 2 {
        return Err(PlotError::InvalidData(
            "at least two sample times are required".to_owned(),
        ));
    }
    if times.iter().any(|t| !t.is_finite()) {
        return Err(PlotError::InvalidData(
            "sample times must be finite".to_owned(),
        ));
    }
    if times.windows(2).any(|pair| pair[1] <= pair[0]) {
        return Err(PlotError::InvalidData(
            "sample times must be strictly increasing".to_owned(),
        ));
    }
    if options.substeps == 0 {
        return Err(PlotError::InvalidConfig(
            "substeps must be > 0".to_owned(),
        ));
    }

    let dim = y0.len();
    let mut state = y0.to_vec();
    let mut components = vec![Vec::with_capacity(times.len()); dim];
    let mut diagnostics = OdeDiagnostics::default();
    record(&mut components, &state);

    let mut k1 = vec![0.0; dim];
    let mut k2 = vec![0.0; dim];
    let mut k3 = vec![0.0; dim];
    let mut k4 = vec![0.0; dim];
    let mut scratch = vec![0.0; dim];

    for pair in times.windows(2) {
        let h = (pair[1] - pair[0]) / options.substeps as f64;
        for substep in 0..options.substeps {
            let t = pair[0] + h * substep as f64;

            deriv(t, &state, &mut k1);
            stage(&state, &k1, h / 2.0, &mut scratch);
            deriv(t + h / 2.0, &scratch, &mut k2);
            stage(&state, &k2, h / 2.0, &mut scratch);
            deriv(t + h / 2.0, &scratch, &mut k3);
            stage(&state, &k3, h, &mut scratch);
            deriv(t + h, &scratch, &mut k4);

            for i in 0..dim {
                state[i] += h / 6.0 * (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]);
            }
            diagnostics.steps += 1;
            diagnostics.derivative_evals += 4;
        }
        record(&mut components, &state);
    }

    debug!(
        samples = times.len(),
        steps = diagnostics.steps,
        "ode integration finished"
    );
    Ok(OdeSolution {
        times: times.to_vec(),
        components,
        diagnostics,
    })
}

fn stage(state: &[f64], slope: &[f64], h: f64, out: &mut [f64]) {
    for i in 0..state.len() {
        out[i] = state[i] + h * slope[i];
    }
}

fn record(components: &mut [Vec<f64>], state: &[f64]) {
    for (component, value) in components.iter_mut().zip(state) {
        component.push(*value);
    }
}
