use std::fs;
use std::path::PathBuf;

use bubble_chart::api::{BubbleChart, ChartConfig};
use bubble_chart::core::{Dimension, TableLoader, census};
use bubble_chart::render::SvgRenderer;
use bubble_chart::telemetry;

const USAGE: &str = "usage: render_bubble_svg --data <csv> [--out <svg>] [--width <px>] [--x <index>] [--y <index>] [--config <json>]";

#[derive(Debug)]
struct CliArgs {
    data: PathBuf,
    out: Option<PathBuf>,
    width: Option<f64>,
    x_index: usize,
    y_index: usize,
    config: Option<PathBuf>,
}

fn main() {
    let _ = telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let mut config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            ChartConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ChartConfig::default(),
    };
    if let Some(width) = args.width {
        config.container_width = width;
    }

    let data = TableLoader::census()
        .load_path(&args.data)
        .map_err(|err| format!("failed to load `{}`: {err}", args.data.display()))?;

    let mut chart =
        BubbleChart::new(SvgRenderer::new(), config, data).map_err(|err| err.to_string())?;
    for axis in census::default_x_axes().map_err(|err| err.to_string())? {
        chart.add_axis_x(axis).map_err(|err| err.to_string())?;
    }
    for axis in census::default_y_axes().map_err(|err| err.to_string())? {
        chart.add_axis_y(axis).map_err(|err| err.to_string())?;
    }
    chart
        .select_axis(Dimension::X, args.x_index)
        .map_err(|err| err.to_string())?;
    chart
        .select_axis(Dimension::Y, args.y_index)
        .map_err(|err| err.to_string())?;
    chart.render(false).map_err(|err| err.to_string())?;

    let svg = chart.into_renderer().into_svg();
    match &args.out {
        Some(path) => fs::write(path, svg)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{svg}");
            Ok(())
        }
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut data = None::<PathBuf>;
    let mut out = None::<PathBuf>;
    let mut width = None::<f64>;
    let mut x_index = 0;
    let mut y_index = 0;
    let mut config = None::<PathBuf>;

    while let Some(flag) = args.next() {
        let mut value = || {
            args.next()
                .ok_or_else(|| format!("missing value for {flag}"))
        };
        match flag.as_str() {
            "--data" => data = Some(PathBuf::from(value()?)),
            "--out" => out = Some(PathBuf::from(value()?)),
            "--config" => config = Some(PathBuf::from(value()?)),
            "--width" => {
                let raw = value()?;
                width = Some(
                    raw.parse::<f64>()
                        .map_err(|err| format!("invalid --width `{raw}`: {err}"))?,
                );
            }
            "--x" => x_index = parse_index("--x", &value()?)?,
            "--y" => y_index = parse_index("--y", &value()?)?,
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    let data = data.ok_or_else(|| format!("missing --data\n{USAGE}"))?;
    Ok(CliArgs {
        data,
        out,
        width,
        x_index,
        y_index,
        config,
    })
}

fn parse_index(flag: &str, raw: &str) -> Result<usize, String> {
    raw.parse::<usize>()
        .map_err(|err| format!("invalid {flag} `{raw}`: {err}"))
}
