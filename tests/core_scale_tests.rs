use approx::assert_abs_diff_eq;
use bubble_chart::ChartError;
use bubble_chart::core::{LinearScale, format_tick};

#[test]
fn linear_scale_maps_domain_onto_range_and_back() {
    let scale = LinearScale::new(0.0, 100.0)
        .and_then(|scale| scale.with_range(0.0, 500.0))
        .expect("valid scale");

    let px = scale.domain_to_pixel(25.0).expect("to pixel");
    assert_abs_diff_eq!(px, 125.0, epsilon = 1e-9);
    let back = scale.pixel_to_domain(px).expect("from pixel");
    assert_abs_diff_eq!(back, 25.0, epsilon = 1e-9);
}

#[test]
fn reversed_range_puts_larger_values_higher() {
    let scale = LinearScale::new(10.0, 20.0)
        .and_then(|scale| scale.with_range(400.0, 0.0))
        .expect("valid scale");

    assert_abs_diff_eq!(scale.domain_to_pixel(10.0).expect("low"), 400.0);
    assert_abs_diff_eq!(scale.domain_to_pixel(20.0).expect("high"), 0.0);
    assert!(scale.domain_to_pixel(18.0).expect("a") < scale.domain_to_pixel(12.0).expect("b"));
}

#[test]
fn linear_scale_rejects_zero_width_or_non_finite_domain() {
    assert!(matches!(
        LinearScale::new(5.0, 5.0),
        Err(ChartError::InvalidData(_))
    ));
    assert!(matches!(
        LinearScale::new(f64::NAN, 5.0),
        Err(ChartError::InvalidData(_))
    ));
    let scale = LinearScale::new(0.0, 1.0).expect("valid");
    assert!(scale.with_range(3.0, 3.0).is_err());
    assert!(scale.domain_to_pixel(f64::INFINITY).is_err());
}

#[test]
fn ticks_snap_to_round_steps() {
    let scale = LinearScale::new(0.0, 100.0).expect("valid scale");
    let ticks = scale.ticks(10);
    assert_eq!(ticks.len(), 11);
    assert_abs_diff_eq!(ticks[0], 0.0);
    assert_abs_diff_eq!(ticks[10], 100.0);
    assert_abs_diff_eq!(scale.tick_step(10), 10.0);

    let scale = LinearScale::new(8.37, 21.5).expect("valid scale");
    let ticks = scale.ticks(10);
    assert_abs_diff_eq!(scale.tick_step(10), 1.0);
    assert_abs_diff_eq!(ticks[0], 9.0);
    assert_abs_diff_eq!(*ticks.last().expect("last tick"), 21.0);
}

#[test]
fn decimal_ticks_have_no_binary_noise() {
    let scale = LinearScale::new(0.0, 1.0).expect("valid scale");
    let ticks = scale.ticks(10);
    assert_eq!(ticks[3], 0.3);
    assert_eq!(format_tick(ticks[3], scale.tick_step(10)), "0.3");
}

#[test]
fn tick_positions_follow_the_range() {
    let scale = LinearScale::new(0.0, 50.0)
        .and_then(|scale| scale.with_range(300.0, 0.0))
        .expect("valid scale");
    let positions = scale.tick_positions(5).expect("positions");

    assert_eq!(positions.first().map(|(value, _)| *value), Some(0.0));
    assert_abs_diff_eq!(positions[0].1, 300.0);
    assert!(positions.windows(2).all(|pair| pair[1].1 < pair[0].1));
}

#[test]
fn tick_labels_group_thousands() {
    assert_eq!(format_tick(45_000.0, 5_000.0), "45,000");
    assert_eq!(format_tick(1_250_000.0, 250_000.0), "1,250,000");
    assert_eq!(format_tick(12.5, 0.5), "12.5");
    assert_eq!(format_tick(-2_000.0, 1_000.0), "-2,000");
    assert_eq!(format_tick(0.05, 0.01), "0.05");
}
