use criterion::{Criterion, criterion_group, criterion_main};
use phaseplot::core::{Canvas, GridShape, Series, SeriesStyle};
use phaseplot::{Animator, AnimatorConfig, Plotter, TimeFraction};
use std::hint::black_box;

fn frame_canvas(points: usize, frames: usize) -> Canvas {
    let x: Vec<f64> = (0..points).map(|i| i as f64).collect();
    let columns: Vec<Vec<f64>> = (0..frames)
        .map(|frame| x.iter().map(|v| (v + frame as f64).sin()).collect())
        .collect();
    let mut canvas = Canvas::new(GridShape::new(2, 2).expect("valid shape"));
    for row in 0..2 {
        for col in 0..2 {
            let series = Series::from_frames("wave", &x, &columns, SeriesStyle::default())
                .expect("valid family");
            let _ = canvas.add_series((row, col), series);
        }
    }
    canvas
}

fn bench_static_compose_1k(c: &mut Criterion) {
    let canvas = frame_canvas(1_000, 16);
    c.bench_function("static_compose_1k_points", |b| {
        b.iter(|| {
            let scene = Plotter::compose(black_box(&canvas), &TimeFraction::Uniform(0.5));
            black_box(scene)
        })
    });
}

fn bench_frame_scene_1k(c: &mut Criterion) {
    let canvas = frame_canvas(1_000, 16);
    let animator = Animator::new(AnimatorConfig::default()).expect("valid config");
    c.bench_function("animation_frame_scene_1k_points", |b| {
        b.iter(|| {
            let scene = animator.frame_scene(black_box(&canvas), black_box(150));
            black_box(scene)
        })
    });
}

fn bench_axis_widening_64_series(c: &mut Criterion) {
    let x: Vec<f64> = (0..256).map(|i| i as f64 * 0.1).collect();
    c.bench_function("axis_widening_64_series", |b| {
        b.iter(|| {
            let mut canvas = Canvas::new(GridShape::new(1, 1).expect("valid shape"));
            for index in 0..64 {
                let y: Vec<f64> = x.iter().map(|v| (v * index as f64).cos()).collect();
                let series = Series::from_curve("s", &x, &y, SeriesStyle::default())
                    .expect("valid series");
                let _ = canvas.add_series((0, 0), black_box(series));
            }
            black_box(canvas)
        })
    });
}

criterion_group!(
    benches,
    bench_static_compose_1k,
    bench_frame_scene_1k,
    bench_axis_widening_64_series
);
criterion_main!(benches);
