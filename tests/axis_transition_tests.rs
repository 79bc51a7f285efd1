use approx::assert_abs_diff_eq;
use bubble_chart::api::{AxisTransition, BubbleChart, ChartConfig, Easing, MarkerTransition};
use bubble_chart::core::{AxisDefinition, DataSet, Dimension, LinearScale, Record, ScreenPoint};
use bubble_chart::render::NullRenderer;

fn data() -> DataSet {
    (0..5)
        .map(|i| {
            let i = f64::from(i);
            Record::new()
                .with("a", i)
                .with("b", 100.0 + i * i)
                .with("c", 50.0 - i * 3.0)
                .with("y", 10.0 + i)
                .with("z", 40.0 - i * 2.0)
        })
        .collect()
}

fn rendered_chart() -> BubbleChart<NullRenderer> {
    let config = ChartConfig::new(960.0)
        .with_transition_duration_ms(1000.0)
        .with_easing(Easing::Linear);
    let mut chart = BubbleChart::new(NullRenderer::default(), config, data()).expect("chart");
    for column in ["a", "b", "c"] {
        chart
            .add_axis_x(AxisDefinition::new(column, column.to_uppercase()))
            .expect("x axis");
    }
    for column in ["y", "z"] {
        chart
            .add_axis_y(AxisDefinition::new(column, column.to_uppercase()))
            .expect("y axis");
    }
    chart.render(false).expect("render");
    chart
}

fn axis_opacity(chart: &BubbleChart<NullRenderer>, dimension: Dimension) -> f64 {
    chart
        .last_frame()
        .and_then(|frame| frame.axis(dimension))
        .map(|axis| axis.opacity)
        .expect("axis drawn")
}

fn first_tick_value(chart: &BubbleChart<NullRenderer>, dimension: Dimension) -> f64 {
    chart
        .last_frame()
        .and_then(|frame| frame.axis(dimension))
        .and_then(|axis| axis.ticks.first())
        .map(|tick| tick.value)
        .expect("tick drawn")
}

#[test]
fn axis_fades_out_then_in_and_swaps_ticks_at_midpoint() {
    let mut chart = rendered_chart();
    assert_eq!(axis_opacity(&chart, Dimension::X), 1.0);
    let old_first_tick = first_tick_value(&chart, Dimension::X);

    chart.select_axis(Dimension::X, 1).expect("select b");
    assert!(chart.is_animating());
    assert_abs_diff_eq!(axis_opacity(&chart, Dimension::X), 1.0, epsilon = 1e-9);

    assert!(chart.tick(250.0).expect("tick"));
    assert_abs_diff_eq!(axis_opacity(&chart, Dimension::X), 0.5, epsilon = 1e-9);
    assert_eq!(first_tick_value(&chart, Dimension::X), old_first_tick);

    chart.tick(500.0).expect("tick");
    assert_abs_diff_eq!(axis_opacity(&chart, Dimension::X), 0.0, epsilon = 1e-9);
    assert!(first_tick_value(&chart, Dimension::X) >= 100.0);

    chart.tick(750.0).expect("tick");
    assert_abs_diff_eq!(axis_opacity(&chart, Dimension::X), 0.5, epsilon = 1e-9);

    assert!(chart.tick(1000.0).expect("tick"));
    assert_eq!(axis_opacity(&chart, Dimension::X), 1.0);
    assert!(!chart.is_animating());
    assert!(!chart.tick(1100.0).expect("idle tick"));
}

#[test]
fn other_axis_is_not_animated() {
    let mut chart = rendered_chart();
    chart.select_axis(Dimension::X, 2).expect("select c");
    chart.tick(250.0).expect("tick");

    assert_eq!(axis_opacity(&chart, Dimension::Y), 1.0);
    assert!(chart.transitions().axis(Dimension::Y).is_none());
}

#[test]
fn markers_move_along_the_eased_path() {
    let mut chart = rendered_chart();
    let start = chart.marker_positions();
    chart.select_axis(Dimension::X, 1).expect("select b");
    let layout = chart.layout();
    let x_scale = chart.scale(Dimension::X).expect("settled x scale");

    chart.tick(250.0).expect("tick");
    let frame = chart.last_frame().expect("frame");
    for (i, marker) in frame.markers.iter().enumerate() {
        let value = 100.0 + (i * i) as f64;
        let target_x = layout.plot_left() + x_scale.domain_to_pixel(value).expect("x");
        let expected = start[i].x + (target_x - start[i].x) * 0.25;
        assert_abs_diff_eq!(marker.center_x, expected, epsilon = 1e-9);
        assert_abs_diff_eq!(marker.center_y, start[i].y, epsilon = 1e-9);
    }

    chart.tick(1000.0).expect("tick");
    let settled = chart.marker_positions();
    for (i, point) in settled.iter().enumerate() {
        let value = 100.0 + (i * i) as f64;
        let target_x = layout.plot_left() + x_scale.domain_to_pixel(value).expect("x");
        assert_abs_diff_eq!(point.x, target_x, epsilon = 1e-9);
    }
}

#[test]
fn new_selection_supersedes_in_flight_transition() {
    let mut chart = rendered_chart();
    chart.select_axis(Dimension::Y, 1).expect("select z");
    chart.select_axis(Dimension::X, 1).expect("select b");
    chart.tick(250.0).expect("tick");
    let shown = chart.marker_positions();

    chart.select_axis(Dimension::X, 2).expect("select c");
    let frame = chart.last_frame().expect("frame");
    for (marker, point) in frame.markers.iter().zip(&shown) {
        assert_abs_diff_eq!(marker.center_x, point.x, epsilon = 1e-9);
        assert_abs_diff_eq!(marker.center_y, point.y, epsilon = 1e-9);
    }
    assert_abs_diff_eq!(axis_opacity(&chart, Dimension::X), 0.5, epsilon = 1e-9);
    assert!(chart.transitions().axis(Dimension::Y).is_some());

    chart.tick(500.0).expect("tick");
    assert_abs_diff_eq!(axis_opacity(&chart, Dimension::X), 0.25, epsilon = 1e-9);

    chart.tick(1250.0).expect("tick");
    assert!(!chart.is_animating());
    let layout = chart.layout();
    let x_scale = chart.scale(Dimension::X).expect("x scale");
    for (i, point) in chart.marker_positions().iter().enumerate() {
        let target_x =
            layout.plot_left() + x_scale.domain_to_pixel(50.0 - i as f64 * 3.0).expect("x");
        assert_abs_diff_eq!(point.x, target_x, epsilon = 1e-9);
    }
}

#[test]
fn reselecting_the_active_axis_starts_nothing() {
    let mut chart = rendered_chart();
    let frames = chart.renderer().frames_rendered;
    let change = chart.select_axis(Dimension::X, 0).expect("reselect");

    assert!(!change.is_changed());
    assert!(!chart.is_animating());
    assert_eq!(chart.renderer().frames_rendered, frames);
}

#[test]
fn non_animated_update_snaps_into_place() {
    let mut chart = rendered_chart();
    chart.select_axis(Dimension::X, 1).expect("select b");
    chart.update_axis(Dimension::X, false).expect("snap");

    assert!(!chart.is_animating());
    assert_eq!(axis_opacity(&chart, Dimension::X), 1.0);
    assert!(first_tick_value(&chart, Dimension::X) >= 100.0);
}

#[test]
fn easing_curves_hit_their_endpoints() {
    for easing in [Easing::Linear, Easing::CubicInOut] {
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(1.0), 1.0);
        assert_abs_diff_eq!(easing.apply(0.5), 0.5, epsilon = 1e-12);
        assert_eq!(easing.apply(2.0), 1.0);
    }
    assert!(Easing::CubicInOut.apply(0.25) < 0.25);
    assert!(Easing::CubicInOut.apply(0.75) > 0.75);
}

#[test]
fn axis_transition_fades_from_its_start_opacity() {
    let outgoing = LinearScale::new(0.0, 10.0).expect("outgoing");
    let incoming = LinearScale::new(5.0, 50.0).expect("incoming");
    let transition = AxisTransition::new(Dimension::X, outgoing, incoming, 0.8, 100.0, 400.0);

    assert_abs_diff_eq!(transition.opacity(100.0), 0.8);
    assert_abs_diff_eq!(transition.opacity(200.0), 0.4, epsilon = 1e-12);
    assert_eq!(transition.displayed_scale(299.0), outgoing);
    assert_eq!(transition.displayed_scale(300.0), incoming);
    assert_abs_diff_eq!(transition.opacity(400.0), 0.5, epsilon = 1e-12);
    assert!(transition.is_finished(500.0));
    assert!(!transition.is_finished(499.0));
}

#[test]
fn marker_transition_requires_matching_counts() {
    let from = vec![ScreenPoint::new(0.0, 0.0)];
    let to = vec![ScreenPoint::new(1.0, 1.0), ScreenPoint::new(2.0, 2.0)];
    assert!(MarkerTransition::new(from, to, Easing::Linear, 0.0, 100.0).is_err());

    let transition = MarkerTransition::new(
        vec![ScreenPoint::new(0.0, 10.0)],
        vec![ScreenPoint::new(100.0, 30.0)],
        Easing::Linear,
        0.0,
        100.0,
    )
    .expect("transition");
    assert_eq!(transition.positions(50.0), vec![ScreenPoint::new(50.0, 20.0)]);
    assert_eq!(transition.positions(100.0), vec![ScreenPoint::new(100.0, 30.0)]);
}
