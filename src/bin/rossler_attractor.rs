//! Rössler attractor integration and x-y phase portrait.

use phaseplot::PlotResult;
use phaseplot::render::NullSink;
use phaseplot::systems::{OdeOptions, Projection, RosslerParams, linspace, plot_solution, solve_ode};

fn main() -> PlotResult<()> {
    let _ = phaseplot::telemetry::init_default_tracing();

    let params = RosslerParams::default();
    let times = linspace(0.0, 500.0, 200_000);
    let solution = solve_ode(
        |t, state, deriv| params.vector_field(t, state, deriv),
        &[0.001, 0.001, 0.001],
        &times,
        OdeOptions::default(),
    )?;
    println!(
        "rossler integrated: {} samples, {} derivative evaluations",
        solution.times().len(),
        solution.diagnostics().derivative_evals
    );

    let mut sink = NullSink::default();
    plot_solution(&solution, "Rössler", Projection::Xy, &mut sink)?;
    println!("xy projection rendered: {} points", sink.last_point_total);
    Ok(())
}
