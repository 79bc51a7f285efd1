use bubble_chart::api::{BubbleChart, ChartConfig};
use bubble_chart::core::{
    AxisDefinition, ChartLayout, DataSet, Dimension, LinearScale, Margins, Record,
    project_records,
};
use bubble_chart::render::NullRenderer;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn synthetic_data(count: usize) -> DataSet {
    (0..count)
        .map(|i| {
            let t = i as f64;
            Record::new()
                .with("abbr", format!("S{i}"))
                .with("state", format!("State {i}"))
                .with("poverty", 8.0 + (t * 0.37) % 12.0)
                .with("age", 30.0 + (t * 0.11) % 15.0)
                .with("healthcare", 4.0 + (t * 0.53) % 20.0)
                .with("smokes", 9.0 + (t * 0.29) % 17.0)
        })
        .collect()
}

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::new(0.0, 10_000.0)
        .and_then(|scale| scale.with_range(0.0, 1_920.0))
        .expect("valid scale");

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.domain_to_pixel(black_box(4_321.123)).expect("to pixel");
            let _ = scale.pixel_to_domain(px).expect("from pixel");
        })
    });
}

fn bench_linear_scale_ticks(c: &mut Criterion) {
    let scale = LinearScale::new(28_000.0, 83_000.0)
        .and_then(|scale| scale.with_range(0.0, 840.0))
        .expect("valid scale");

    c.bench_function("linear_scale_tick_positions", |b| {
        b.iter(|| {
            let _ = scale
                .tick_positions(black_box(10))
                .expect("tick positions");
        })
    });
}

fn bench_marker_projection_10k(c: &mut Criterion) {
    let data = synthetic_data(10_000);
    let layout = ChartLayout::from_width(1_920.0, 0.6, Margins::default()).expect("layout");
    let x_scale = LinearScale::new(8.0, 20.0)
        .and_then(|scale| scale.with_range(0.0, layout.plot_width))
        .expect("x scale");
    let y_scale = LinearScale::new(4.0, 24.0)
        .and_then(|scale| scale.with_range(layout.plot_height, 0.0))
        .expect("y scale");

    c.bench_function("marker_projection_10k", |b| {
        b.iter(|| {
            let _ = project_records(
                black_box(&data),
                "poverty",
                "healthcare",
                black_box(x_scale),
                black_box(y_scale),
                black_box(layout),
            )
            .expect("projection should succeed");
        })
    });
}

fn bench_frame_build_2k(c: &mut Criterion) {
    let mut chart = BubbleChart::new(
        NullRenderer::default(),
        ChartConfig::new(1_600.0),
        synthetic_data(2_000),
    )
    .expect("chart init");
    chart
        .add_axis_x(AxisDefinition::new("poverty", "In Poverty (%)"))
        .expect("x axis");
    chart
        .add_axis_x(AxisDefinition::new("age", "Age (Median)"))
        .expect("x axis");
    chart
        .add_axis_y(AxisDefinition::new("healthcare", "Lacks Healthcare (%)"))
        .expect("y axis");
    chart
        .add_axis_y(AxisDefinition::new("smokes", "Smokes (%)"))
        .expect("y axis");
    chart.render(false).expect("first render");
    chart.select_axis(Dimension::X, 1).expect("select age");
    chart.tick(250.0).expect("tick");

    c.bench_function("frame_build_mid_transition_2k", |b| {
        b.iter(|| {
            let _ = black_box(&chart).build_frame().expect("frame");
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_linear_scale_ticks,
    bench_marker_projection_10k,
    bench_frame_build_2k
);
criterion_main!(benches);
