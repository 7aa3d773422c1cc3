//! Cobweb analysis of the Poincaré map.

use phaseplot::core::{
    Canvas, GridShape, LegendAnchor, LineStyle, ReferenceLine, Series, SeriesStyle, SubplotTarget,
};
use phaseplot::render::{Color, NullSink};
use phaseplot::systems::{cobweb, linspace, poincare_map};
use phaseplot::{PlotResult, Plotter};

fn main() -> PlotResult<()> {
    let _ = phaseplot::telemetry::init_default_tracing();

    let r = linspace(0.0, 2.0, 100);
    let diagonal: Vec<f64> = r.clone();
    let map_values: Vec<f64> = r.iter().map(|v| poincare_map(*v)).collect();
    let web_low = cobweb(0.2, poincare_map, 100);
    let web_high = cobweb(1.8, poincare_map, 100);

    let mut canvas = Canvas::new(GridShape::new(1, 1)?);
    let wide = SeriesStyle::default().with_width(2.0);
    let _ = canvas.add_series((0, 0), Series::from_curve("y(r) = r", &r, &diagonal, wide.clone())?);
    let _ = canvas.add_series(
        (0, 0),
        Series::from_curve("Poincaré map P(r)", &r, &map_values, wide)?,
    );
    let _ = canvas.add_series(
        (0, 0),
        Series::from_curve(
            "Cobweb starting at r0 = 0.2",
            &web_low.x,
            &web_low.y,
            SeriesStyle::default(),
        )?,
    );
    let _ = canvas.add_series(
        (0, 0),
        Series::from_curve(
            "Cobweb starting at r0 = 1.8",
            &web_high.x,
            &web_high.y,
            SeriesStyle::default(),
        )?,
    );
    let _ = canvas.add_reference_line(
        SubplotTarget::All,
        ReferenceLine::vertical(1.0).with_style(
            SeriesStyle::default()
                .with_line_style(LineStyle::Dashed)
                .with_color(Color::BLACK),
        ),
    );
    let _ = canvas.show_legend(SubplotTarget::All, LegendAnchor::UpperLeft);
    let _ = canvas.label_axes(
        SubplotTarget::All,
        "r",
        "P(r)",
        Some("Cobweb analysis of the Poincaré map with 100 cobweb iterations"),
    );

    let mut sink = NullSink::default();
    Plotter::show(canvas, 0.0, &mut sink)?;
    println!(
        "cobweb scene rendered: {} lines, {} points",
        sink.last_line_count, sink.last_point_total
    );
    Ok(())
}
