use bubble_chart::ChartError;
use bubble_chart::core::{Dimension, Viewport};
use bubble_chart::render::{
    AxisLabelPrimitive, AxisOrientation, AxisPrimitive, AxisTick, Color, MarkerPrimitive,
    NullRenderer, RenderFrame, Renderer, TooltipPrimitive,
};

fn axis(opacity: f64) -> AxisPrimitive {
    AxisPrimitive {
        dimension: Dimension::X,
        orientation: AxisOrientation::Bottom,
        origin_x: 60.0,
        origin_y: 300.0,
        length: 400.0,
        ticks: vec![AxisTick {
            value: 10.0,
            position_px: 100.0,
            label: "10".to_owned(),
        }],
        tick_size_px: 6.0,
        font_size_px: 10.0,
        color: Color::rgb(0.0, 0.0, 0.0),
        opacity,
    }
}

fn label(rotation_deg: f64) -> AxisLabelPrimitive {
    AxisLabelPrimitive {
        dimension: Dimension::Y,
        index: 1,
        text: "Smokes (%)".to_owned(),
        x: 36.0,
        y: 200.0,
        font_size_px: 16.0,
        rotation_deg,
        active: true,
        color: Color::rgb(0.0, 0.0, 0.0),
    }
}

fn marker(radius: f64) -> MarkerPrimitive {
    MarkerPrimitive {
        index: 0,
        center_x: 120.0,
        center_y: 140.0,
        radius,
        fill: Color::rgb(0.5, 0.7, 0.8),
        opacity: 0.5,
        text: Some("TX".to_owned()),
        text_color: Color::rgb(1.0, 1.0, 1.0),
        font_size_px: 12.0,
    }
}

fn tooltip(visible: bool) -> TooltipPrimitive {
    TooltipPrimitive {
        marker_index: 0,
        title: "Texas".to_owned(),
        lines: vec!["In Poverty (%): 17.2".to_owned()],
        anchor_x: 120.0,
        anchor_y: 128.0,
        visible,
    }
}

#[test]
fn null_renderer_counts_frame_primitives() {
    let frame = RenderFrame::new(Viewport::new(640, 384))
        .with_axis(axis(1.0))
        .with_label(label(-90.0))
        .with_marker(marker(12.0))
        .with_tooltip(tooltip(true));

    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("render");
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_viewport, Some(Viewport::new(640, 384)));
    assert_eq!(renderer.last_axis_count, 1);
    assert_eq!(renderer.last_label_count, 1);
    assert_eq!(renderer.last_marker_count, 1);
    assert_eq!(renderer.last_tooltip_count, 1);
    assert_eq!(
        frame.visible_tooltip().map(TooltipPrimitive::text).as_deref(),
        Some("Texas\nIn Poverty (%): 17.2")
    );
}

#[test]
fn invalid_primitives_fail_validation() {
    let frames = [
        RenderFrame::new(Viewport::new(0, 100)),
        RenderFrame::new(Viewport::new(100, 100)).with_axis(axis(1.5)),
        RenderFrame::new(Viewport::new(100, 100)).with_marker(marker(0.0)),
        RenderFrame::new(Viewport::new(100, 100)).with_tooltip(tooltip(false)),
        RenderFrame::new(Viewport::new(100, 100)).with_label(AxisLabelPrimitive {
            text: String::new(),
            ..label(0.0)
        }),
    ];
    for frame in frames {
        let mut renderer = NullRenderer::default();
        assert!(
            renderer.render(&frame).is_err(),
            "frame should be rejected: {frame:?}"
        );
        assert_eq!(renderer.frames_rendered, 0);
    }

    let err = RenderFrame::new(Viewport::new(0, 10))
        .validate()
        .expect_err("empty viewport");
    assert!(matches!(err, ChartError::InvalidViewport { width: 0, height: 10 }));
}

#[test]
fn rotated_label_hit_box_is_vertical() {
    let upright = label(0.0).hit_box();
    let rotated = label(-90.0).hit_box();

    assert!(upright.right - upright.left > upright.bottom - upright.top);
    assert!(rotated.bottom - rotated.top > rotated.right - rotated.left);
    assert!(rotated.contains(30.0, 200.0));
    assert!(!rotated.contains(30.0, 300.0));
}

#[test]
fn marker_contains_points_within_its_radius() {
    let marker = marker(10.0);
    assert!(marker.contains(120.0, 140.0));
    assert!(marker.contains(126.0, 148.0));
    assert!(!marker.contains(131.0, 140.0));
}

#[test]
fn axis_end_point_follows_orientation() {
    let bottom = axis(1.0);
    assert_eq!(bottom.end_point(), (460.0, 300.0));
    let left = AxisPrimitive {
        orientation: AxisOrientation::Left,
        ..axis(1.0)
    };
    assert_eq!(left.end_point(), (60.0, 700.0));
}
