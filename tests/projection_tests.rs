use approx::assert_relative_eq;
use phaseplot::render::NullSink;
use phaseplot::systems::{
    LorenzParams, OdeOptions, Projection, RosslerParams, linspace, plot_solution, solve_ode,
};

fn lorenz_solution(samples: usize) -> phaseplot::systems::OdeSolution {
    let params = LorenzParams::default();
    solve_ode(
        |t, state, deriv| params.vector_field(t, state, deriv),
        &[0.001, 0.001, 0.001],
        &linspace(0.0, 2.0, samples),
        OdeOptions::default(),
    )
    .expect("integration succeeds")
}

#[test]
fn component_projection_renders_one_line() {
    let solution = lorenz_solution(500);
    let mut sink = NullSink::default();
    plot_solution(&solution, "Lorenz", Projection::Xz, &mut sink).expect("render succeeds");
    assert_eq!(sink.scenes_applied, 1);
    assert_eq!(sink.last_line_count, 1);
    assert_eq!(sink.last_point_total, 500);
}

#[test]
fn time_projection_plots_against_sample_times() {
    let solution = lorenz_solution(100);
    let mut sink = NullSink::default();
    plot_solution(&solution, "Lorenz", Projection::Tx, &mut sink).expect("render succeeds");
    assert_eq!(sink.last_point_total, 100);
}

#[test]
fn unknown_projection_name_aborts_the_render_path() {
    let error = Projection::parse("qq").expect_err("unknown name");
    assert!(matches!(error, phaseplot::PlotError::UnknownProjection(_)));
}

#[test]
fn low_dimensional_solution_is_rejected_for_component_pairs() {
    let solution = solve_ode(
        |_t, y, dy| dy[0] = -y[0],
        &[1.0],
        &linspace(0.0, 1.0, 10),
        OdeOptions::default(),
    )
    .expect("integration succeeds");

    let mut sink = NullSink::default();
    assert!(plot_solution(&solution, "decay", Projection::Xz, &mut sink).is_err());
    assert_eq!(sink.scenes_applied, 0);
}

#[test]
fn rossler_trajectory_stays_finite() {
    let params = RosslerParams::default();
    let solution = solve_ode(
        |t, state, deriv| params.vector_field(t, state, deriv),
        &[0.001, 0.001, 0.001],
        &linspace(0.0, 50.0, 5_000),
        OdeOptions::default(),
    )
    .expect("integration succeeds");

    for component in 0..3 {
        for value in solution.component(component) {
            assert!(value.is_finite());
        }
    }
    // The trajectory leaves the near-origin initial condition.
    let first = solution.component(0)[0];
    assert_relative_eq!(first, 0.001);
    assert!(solution.component(0).iter().any(|value| value.abs() > 1.0));
}
