use bubble_chart::api::{BubbleChart, ChartConfig};
use bubble_chart::core::{AxisDefinition, DataSet, Dimension, Record, Viewport};
use bubble_chart::render::{
    AxisLabelPrimitive, Color, MarkerPrimitive, RenderFrame, Renderer, SvgRenderer,
    TooltipPrimitive,
};

fn data() -> DataSet {
    vec![
        Record::new()
            .with("state", "Texas")
            .with("abbr", "TX")
            .with("poverty", 17.2)
            .with("smokes", 15.0),
        Record::new()
            .with("state", "Rhode <Island>")
            .with("abbr", "RI")
            .with("poverty", 13.4)
            .with("smokes", 16.9),
    ]
    .into_iter()
    .collect()
}

#[test]
fn chart_renders_markers_labels_and_titles() {
    let mut chart =
        BubbleChart::new(SvgRenderer::new(), ChartConfig::new(800.0), data()).expect("chart");
    chart
        .add_axis_x(AxisDefinition::new("poverty", "In Poverty (%)"))
        .expect("x");
    chart
        .add_axis_y(AxisDefinition::new("smokes", "Smokes (%)"))
        .expect("y");
    chart.render(false).expect("render");

    let svg = chart.renderer().svg();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"class="chart" width="800" height="480""#));
    assert_eq!(svg.matches(r#"class="stateCircle""#).count(), 2);
    assert_eq!(svg.matches(r#"class="stateText""#).count(), 2);
    assert!(svg.contains(">TX</text>"));
    assert!(svg.contains("<title>Texas\nIn Poverty (%): 17.2\nSmokes (%): 15</title>"));
    assert!(svg.contains("Rhode &lt;Island&gt;"));
    assert!(svg.contains(r#"class="axis-label active" data-dimension="x" data-axis-index="0""#));
    assert!(svg.contains(r#"transform="rotate(-90"#));
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn svg_updates_after_selection() {
    let mut chart =
        BubbleChart::new(SvgRenderer::new(), ChartConfig::new(800.0), data()).expect("chart");
    chart
        .add_axis_x(AxisDefinition::new("poverty", "In Poverty (%)"))
        .expect("x");
    chart
        .add_axis_x(AxisDefinition::new("smokes", "Smokes (%)"))
        .expect("x");
    chart
        .add_axis_y(AxisDefinition::new("smokes", "Smokes (%)"))
        .expect("y");
    chart.render(false).expect("render");
    chart.select_axis(Dimension::X, 1).expect("select");
    chart.tick(2_000.0).expect("finish transition");

    let svg = chart.into_renderer().into_svg();
    assert!(svg.contains(r#"class="axis-label inactive" data-dimension="x" data-axis-index="0""#));
    assert!(svg.contains(r#"class="axis-label active" data-dimension="x" data-axis-index="1""#));
}

#[test]
fn tooltip_for_unknown_marker_is_rejected() {
    let frame = RenderFrame::new(Viewport::new(100, 100)).with_tooltip(TooltipPrimitive {
        marker_index: 3,
        title: "ghost".to_owned(),
        lines: Vec::new(),
        anchor_x: 10.0,
        anchor_y: 10.0,
        visible: false,
    });
    let mut renderer = SvgRenderer::new();
    assert!(renderer.render(&frame).is_err());
    assert!(renderer.svg().is_empty());
}

#[test]
fn hand_built_frame_renders_without_a_chart() {
    let frame = RenderFrame::new(Viewport::new(300, 200))
        .with_label(AxisLabelPrimitive {
            dimension: Dimension::Y,
            index: 0,
            text: "Obese (%)".to_owned(),
            x: 16.0,
            y: 100.0,
            font_size_px: 16.0,
            rotation_deg: -90.0,
            active: false,
            color: Color::rgb(0.67, 0.67, 0.67),
        })
        .with_marker(MarkerPrimitive {
            index: 0,
            center_x: 150.0,
            center_y: 100.0,
            radius: 6.0,
            fill: Color::rgb(0.5, 0.7, 0.8),
            opacity: 0.5,
            text: None,
            text_color: Color::rgb(1.0, 1.0, 1.0),
            font_size_px: 6.0,
        });

    let mut renderer = SvgRenderer::new();
    renderer.render(&frame).expect("render");
    let svg = renderer.svg();
    assert!(svg.contains(r#"class="axis-label inactive" data-dimension="y""#));
    assert!(svg.contains(r#"translate(150.0,100.0)"#));
    assert!(svg.contains(r#"fill="rgb(171,171,171)""#));
    assert!(!svg.contains("stateText"));
}
