use approx::assert_relative_eq;
use phaseplot::core::{Canvas, GridShape, Series, SeriesStyle, SubplotId};

fn canvas_1x1() -> Canvas {
    Canvas::new(GridShape::new(1, 1).expect("valid shape"))
}

fn curve(name: &str, x: &[f64], y: &[f64]) -> Series {
    Series::from_curve(name, x, y, SeriesStyle::default()).expect("valid series")
}

#[test]
fn first_series_sets_limits_unconditionally() {
    let mut canvas = canvas_1x1();
    assert!(canvas.add_series((0, 0), curve("A", &[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0])).is_applied());

    let axis = canvas.subplot(SubplotId::new(0, 0)).expect("cell").axis();
    assert_relative_eq!(axis.x_min, 0.0);
    assert_relative_eq!(axis.x_max, 2.3);
    assert_relative_eq!(axis.y_min, 0.0);
    assert_relative_eq!(axis.y_max, 4.6);
}

#[test]
fn second_series_widens_and_negative_floor_appears() {
    // End-to-end sequence: the second series carries a negative y value, so
    // the floor widens below zero while the ceiling is retained.
    let mut canvas = canvas_1x1();
    let _ = canvas.add_series((0, 0), curve("A", &[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]));
    let _ = canvas.add_series((0, 0), curve("B", &[-1.0, 5.0], &[-2.0, 2.0]));

    let axis = canvas.subplot(SubplotId::new(0, 0)).expect("cell").axis();
    assert_relative_eq!(axis.x_min, -1.0);
    assert_relative_eq!(axis.x_max, 5.0);
    assert_relative_eq!(axis.y_min, -2.3);
    assert_relative_eq!(axis.y_max, 4.6);
}

#[test]
fn limits_cover_every_added_series() {
    let mut canvas = canvas_1x1();
    let sequences: &[(&[f64], &[f64])] = &[
        (&[0.0, 1.0], &[1.0, 2.0]),
        (&[3.0, 4.0], &[0.5, 0.25]),
        (&[-2.0, 0.5], &[-1.0, 6.0]),
    ];
    for (index, &(x, y)) in sequences.iter().enumerate() {
        let _ = canvas.add_series((0, 0), curve(&format!("s{index}"), x, y));
    }

    let axis = canvas.subplot(SubplotId::new(0, 0)).expect("cell").axis();
    for &(x, y) in sequences {
        for value in x {
            assert!(axis.x_min <= *value && *value <= axis.x_max);
        }
        for value in y {
            assert!(axis.y_min <= *value && *value <= axis.y_max);
        }
    }
}

#[test]
fn limits_never_shrink_between_additions() {
    let mut canvas = canvas_1x1();
    let _ = canvas.add_series((0, 0), curve("big", &[-10.0, 10.0], &[-8.0, 8.0]));
    let before = canvas.subplot(SubplotId::new(0, 0)).expect("cell").axis();

    let _ = canvas.add_series((0, 0), curve("small", &[0.0, 0.1], &[0.0, 0.1]));
    let after = canvas.subplot(SubplotId::new(0, 0)).expect("cell").axis();

    assert!(after.x_min <= before.x_min);
    assert!(after.x_max >= before.x_max);
    assert!(after.y_min <= before.y_min);
    assert!(after.y_max >= before.y_max);
}

#[test]
fn out_of_grid_addition_changes_nothing() {
    let mut canvas = canvas_1x1();
    let _ = canvas.add_series((0, 0), curve("A", &[0.0, 1.0], &[0.0, 1.0]));
    let before = canvas.clone();

    let outcome = canvas.add_series((3, 3), curve("stray", &[100.0], &[100.0]));
    assert!(outcome.is_skipped());
    assert_eq!(canvas, before);
}

#[test]
fn margin_fraction_is_configurable() {
    let mut canvas = canvas_1x1().with_margin(0.5);
    let _ = canvas.add_series((0, 0), curve("A", &[1.0, 2.0], &[1.0, 2.0]));

    let axis = canvas.subplot(SubplotId::new(0, 0)).expect("cell").axis();
    assert_relative_eq!(axis.x_min, 0.5);
    assert_relative_eq!(axis.x_max, 3.0);
    assert_relative_eq!(axis.y_max, 3.0);
}
