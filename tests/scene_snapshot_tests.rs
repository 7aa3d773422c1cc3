use phaseplot::core::{Canvas, GridShape, LegendAnchor, Series, SeriesStyle, SubplotTarget};
use phaseplot::render::SceneFrame;
use phaseplot::{Plotter, TimeFraction};

fn composed_scene() -> SceneFrame {
    let mut canvas = Canvas::new(GridShape::new(1, 1).expect("valid shape"));
    let _ = canvas.add_series(
        (0, 0),
        Series::from_curve("A", &[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0], SeriesStyle::default())
            .expect("valid series"),
    );
    let _ = canvas.label_axes(SubplotTarget::All, "t", "v", Some("snapshot"));
    let _ = canvas.show_legend(SubplotTarget::All, LegendAnchor::UpperRight);
    Plotter::compose(&canvas, &TimeFraction::default())
}

#[test]
fn scene_serialization_round_trips() {
    let scene = composed_scene();
    let json = serde_json::to_string(&scene).expect("scene serializes");
    let recovered: SceneFrame = serde_json::from_str(&json).expect("scene deserializes");
    assert_eq!(scene, recovered);
}

#[test]
fn scene_json_exposes_stable_fields() {
    let scene = composed_scene();
    let value = serde_json::to_value(&scene).expect("scene serializes");

    assert_eq!(value["grid"]["rows"], 1);
    assert_eq!(value["grid"]["cols"], 1);
    let subplot = &value["subplots"][0];
    assert_eq!(subplot["title"], "snapshot");
    assert_eq!(subplot["legend"], "UpperRight");
    assert_eq!(subplot["lines"][0]["name"], "A");
    assert_eq!(subplot["lines"][0]["y"][2], 4.0);
    assert_eq!(subplot["axis"]["x_max"], 2.3);
}

#[test]
fn composition_is_deterministic() {
    assert_eq!(composed_scene(), composed_scene());
}
