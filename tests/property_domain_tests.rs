use bubble_chart::api::{ChartConfig, ChartState};
use bubble_chart::core::{AxisDefinition, DataSet, Dimension, Record};
use proptest::prelude::*;

fn column_data(values: &[f64]) -> DataSet {
    values
        .iter()
        .map(|value| Record::new().with("value", *value))
        .collect()
}

proptest! {
    #[test]
    fn unscaled_domain_matches_column_extremes(
        values in prop::collection::vec(-1_000_000.0f64..1_000_000.0, 1..64)
    ) {
        let data = column_data(&values);
        let domain = AxisDefinition::new("value", "Value")
            .compute_domain(&data)
            .expect("domain");

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert_eq!(domain.lower, min);
        prop_assert_eq!(domain.upper, max);
        prop_assert!(domain.lower <= domain.upper);
    }

    #[test]
    fn larger_max_scale_never_lowers_positive_upper_bound(
        values in prop::collection::vec(0.001f64..100_000.0, 1..32),
        scale in 0.1f64..3.0,
        growth in 0.0f64..2.0
    ) {
        let data = column_data(&values);
        let narrow = AxisDefinition::new("value", "Value")
            .with_max_scale(scale)
            .expect("valid scale");
        let wide = AxisDefinition::new("value", "Value")
            .with_max_scale(scale + growth)
            .expect("valid scale");

        let narrow_upper = narrow.compute_domain(&data).expect("domain").upper;
        let wide_upper = wide.compute_domain(&data).expect("domain").upper;
        prop_assert!(wide_upper >= narrow_upper);
    }

    #[test]
    fn smaller_min_scale_stays_at_scaled_positive_minimum(
        values in prop::collection::vec(0.001f64..100_000.0, 1..32),
        scale in 0.1f64..1.0,
        shrink in 0.0f64..0.9
    ) {
        let data = column_data(&values);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let loose = AxisDefinition::new("value", "Value")
            .with_min_scale(scale)
            .expect("valid scale");
        let looser = AxisDefinition::new("value", "Value")
            .with_min_scale(scale * (1.0 - shrink))
            .expect("valid scale");

        let loose_lower = loose.compute_domain(&data).expect("domain").lower;
        let looser_lower = looser.compute_domain(&data).expect("domain").lower;
        prop_assert_eq!(loose_lower, min * scale);
        prop_assert_eq!(looser_lower, min * (scale * (1.0 - shrink)));
        prop_assert!(looser_lower <= loose_lower);
        prop_assert!(loose_lower <= min);
    }

    #[test]
    fn each_axis_grows_its_margin_by_half_the_label_offset(
        width in 500.0f64..3_000.0,
        x_count in 0usize..5,
        y_count in 0usize..5,
        offset in 0.0f64..30.0
    ) {
        let config = ChartConfig::new(width).with_axis_label_offset_px(offset);
        let mut state = ChartState::new(&config).expect("state");
        let base = state.margins();
        for i in 0..x_count {
            state
                .add_axis_x(AxisDefinition::new(format!("x{i}"), format!("X {i}")))
                .expect("x axis");
        }
        for i in 0..y_count {
            state
                .add_axis_y(AxisDefinition::new(format!("y{i}"), format!("Y {i}")))
                .expect("y axis");
        }

        let margins = state.margins();
        let half = offset / 2.0;
        prop_assert!((margins.bottom - (base.bottom + x_count as f64 * half)).abs() <= 1e-9);
        prop_assert!((margins.left - (base.left + y_count as f64 * half)).abs() <= 1e-9);
        prop_assert_eq!(margins.top, base.top);
        prop_assert_eq!(margins.right, base.right);
    }

    #[test]
    fn reset_dimensions_is_idempotent(
        initial in 500.0f64..3_000.0,
        target in 500.0f64..3_000.0,
        axes in 1usize..4
    ) {
        let mut state = ChartState::new(&ChartConfig::new(initial)).expect("state");
        for i in 0..axes {
            state
                .add_axis(Dimension::X, AxisDefinition::new(format!("x{i}"), "X"))
                .expect("x axis");
            state
                .add_axis(Dimension::Y, AxisDefinition::new(format!("y{i}"), "Y"))
                .expect("y axis");
        }

        state.reset_dimensions(target).expect("first reset");
        let once = state.layout();
        state.reset_dimensions(target).expect("second reset");
        prop_assert_eq!(state.layout(), once);
        prop_assert!((once.height - target * 0.6).abs() <= 1e-9);
    }
}
