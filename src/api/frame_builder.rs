use crate::core::{DataSet, Dimension, LinearScale, ScreenPoint, format_tick};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    AxisLabelPrimitive, AxisOrientation, AxisPrimitive, AxisTick, Color, MarkerPrimitive,
    RenderFrame, TooltipPrimitive,
};

use super::{ActiveTransitions, ChartConfig, ChartState};

const AXIS_COLOR: Color = Color::rgb(0.0, 0.0, 0.0);
const ACTIVE_LABEL_COLOR: Color = Color::rgb(0.0, 0.0, 0.0);
const INACTIVE_LABEL_COLOR: Color = Color::rgb(0.67, 0.67, 0.67);
const MARKER_FILL: Color = Color::rgb(0.537, 0.741, 0.827);
const MARKER_TEXT_COLOR: Color = Color::rgb(1.0, 1.0, 1.0);
const TICK_SIZE_PX: f64 = 6.0;

/// Everything one frame depends on.
pub(super) struct FrameInputs<'a> {
    pub state: &'a ChartState,
    pub data: &'a DataSet,
    pub config: &'a ChartConfig,
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
    pub transitions: &'a ActiveTransitions,
    pub marker_positions: &'a [ScreenPoint],
    pub hovered_marker: Option<usize>,
    pub now_ms: f64,
}

pub(super) fn build_frame(inputs: &FrameInputs<'_>) -> ChartResult<RenderFrame> {
    if inputs.marker_positions.len() != inputs.data.len() {
        return Err(ChartError::InvalidData(format!(
            "expected {} marker positions, got {}",
            inputs.data.len(),
            inputs.marker_positions.len()
        )));
    }

    let mut frame = RenderFrame::new(inputs.state.layout().viewport());
    for dimension in Dimension::ALL {
        frame.axes.push(build_axis(inputs, dimension)?);
        build_labels(inputs, dimension, &mut frame.labels);
    }
    build_markers(inputs, &mut frame)?;
    Ok(frame)
}

fn build_axis(inputs: &FrameInputs<'_>, dimension: Dimension) -> ChartResult<AxisPrimitive> {
    let layout = inputs.state.layout();
    let settled = match dimension {
        Dimension::X => inputs.x_scale,
        Dimension::Y => inputs.y_scale,
    };
    let (scale, opacity) = match inputs.transitions.axis(dimension) {
        Some(transition) => (
            transition.displayed_scale(inputs.now_ms),
            transition.opacity(inputs.now_ms),
        ),
        None => (settled, 1.0),
    };

    let (orientation, origin_x, origin_y, length, offset) = match dimension {
        Dimension::X => (
            AxisOrientation::Bottom,
            layout.plot_left(),
            layout.plot_bottom(),
            layout.plot_width,
            layout.plot_left(),
        ),
        Dimension::Y => (
            AxisOrientation::Left,
            layout.plot_left(),
            layout.plot_top(),
            layout.plot_height,
            layout.plot_top(),
        ),
    };

    let step = scale.tick_step(inputs.config.tick_count);
    let ticks = scale
        .tick_positions(inputs.config.tick_count)?
        .into_iter()
        .map(|(value, pixel)| AxisTick {
            value,
            position_px: pixel + offset,
            label: format_tick(value, step),
        })
        .collect();

    Ok(AxisPrimitive {
        dimension,
        orientation,
        origin_x,
        origin_y,
        length,
        ticks,
        tick_size_px: TICK_SIZE_PX,
        font_size_px: inputs.config.tick_font_size_px,
        color: AXIS_COLOR,
        opacity,
    })
}

fn build_labels(
    inputs: &FrameInputs<'_>,
    dimension: Dimension,
    labels: &mut Vec<AxisLabelPrimitive>,
) {
    let layout = inputs.state.layout();
    let offset = inputs.state.axis_label_offset_px();
    let font_size_px = inputs.config.label_font_size_px;
    let selected = inputs.state.selected_index(dimension);

    for (index, axis) in inputs.state.axes(dimension).iter().enumerate() {
        let (x, y, rotation_deg) = match dimension {
            Dimension::X => (
                layout.plot_left() + layout.plot_width / 2.0,
                layout.plot_bottom() + offset + offset * (index as f64 + 1.0),
                0.0,
            ),
            Dimension::Y => (
                offset * index as f64 + font_size_px,
                layout.plot_top() + layout.plot_height / 2.0,
                -90.0,
            ),
        };
        let active = index == selected;
        labels.push(AxisLabelPrimitive {
            dimension,
            index,
            text: axis.label().to_owned(),
            x,
            y,
            font_size_px,
            rotation_deg,
            active,
            color: if active {
                ACTIVE_LABEL_COLOR
            } else {
                INACTIVE_LABEL_COLOR
            },
        });
    }
}

fn build_markers(inputs: &FrameInputs<'_>, frame: &mut RenderFrame) -> ChartResult<()> {
    let layout = inputs.state.layout();
    let radius = layout.height * inputs.config.marker_radius_ratio;
    let x_axis = inputs.state.selected_axis(Dimension::X)?;
    let y_axis = inputs.state.selected_axis(Dimension::Y)?;

    frame.markers.reserve(inputs.data.len());
    frame.tooltips.reserve(inputs.data.len());
    for (index, (record, position)) in inputs
        .data
        .iter()
        .zip(inputs.marker_positions)
        .enumerate()
    {
        let text = record
            .get(&inputs.config.marker_text_column)
            .map(ToString::to_string)
            .filter(|text| !text.is_empty());
        frame.markers.push(MarkerPrimitive {
            index,
            center_x: position.x,
            center_y: position.y,
            radius,
            fill: MARKER_FILL,
            opacity: inputs.config.marker_opacity,
            text,
            text_color: MARKER_TEXT_COLOR,
            font_size_px: radius,
        });

        let title = record
            .get(&inputs.config.record_label_column)
            .map_or_else(|| format!("#{index}"), ToString::to_string);
        let lines = [x_axis, y_axis]
            .into_iter()
            .map(|axis| {
                let value = record
                    .get(axis.column_key())
                    .map_or_else(String::new, ToString::to_string);
                format!("{}: {value}", axis.label())
            })
            .collect();
        frame.tooltips.push(TooltipPrimitive {
            marker_index: index,
            title,
            lines,
            anchor_x: position.x,
            anchor_y: position.y - radius,
            visible: inputs.hovered_marker == Some(index),
        });
    }
    Ok(())
}
