#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::dataset::{DataSet, Record, numeric_field};
use crate::core::scale::LinearScale;
use crate::core::types::{ChartLayout, ScreenPoint};
use crate::error::ChartResult;

/// Projects every record to surface coordinates.
///
/// `x_scale`/`y_scale` map into plot-local pixels; the layout margins are
/// added so the result can be drawn directly.
pub fn project_records(
    data: &DataSet,
    x_column: &str,
    y_column: &str,
    x_scale: LinearScale,
    y_scale: LinearScale,
    layout: ChartLayout,
) -> ChartResult<Vec<ScreenPoint>> {
    #[cfg(feature = "parallel-projection")]
    {
        let projected: Vec<ChartResult<ScreenPoint>> = data
            .records()
            .par_iter()
            .enumerate()
            .map(|(row, record)| {
                project_single_record(row, record, x_column, y_column, x_scale, y_scale, layout)
            })
            .collect();
        projected.into_iter().collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        let mut out = Vec::with_capacity(data.len());
        for (row, record) in data.iter().enumerate() {
            out.push(project_single_record(
                row, record, x_column, y_column, x_scale, y_scale, layout,
            )?);
        }
        Ok(out)
    }
}

fn project_single_record(
    row: usize,
    record: &Record,
    x_column: &str,
    y_column: &str,
    x_scale: LinearScale,
    y_scale: LinearScale,
    layout: ChartLayout,
) -> ChartResult<ScreenPoint> {
    let x = x_scale.domain_to_pixel(numeric_field(record, row, x_column)?)?;
    let y = y_scale.domain_to_pixel(numeric_field(record, row, y_column)?)?;
    Ok(layout.to_surface(ScreenPoint::new(x, y)))
}
