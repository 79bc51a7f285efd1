//! Column names and presets for the U.S. state health/economics table.

use crate::core::axis::AxisDefinition;
use crate::core::loader::TableSchema;
use crate::error::ChartResult;

pub const ABBR: &str = "abbr";
pub const AGE: &str = "age";
pub const AGE_MOE: &str = "ageMoe";
pub const HEALTHCARE: &str = "healthcare";
pub const HEALTHCARE_HIGH: &str = "healthcareHigh";
pub const HEALTHCARE_LOW: &str = "healthcareLow";
pub const ID: &str = "id";
pub const INCOME: &str = "income";
pub const INCOME_MOE: &str = "incomeMoe";
pub const OBESITY: &str = "obesity";
pub const OBESITY_HIGH: &str = "obesityHigh";
pub const OBESITY_LOW: &str = "obesityLow";
pub const POVERTY: &str = "poverty";
pub const POVERTY_MOE: &str = "povertyMoe";
pub const SMOKES: &str = "smokes";
pub const SMOKES_HIGH: &str = "smokesHigh";
pub const SMOKES_LOW: &str = "smokesLow";
pub const STATE: &str = "state";

pub const TEXT_COLUMNS: [&str; 3] = [ABBR, ID, STATE];

pub const NUMERIC_COLUMNS: [&str; 15] = [
    AGE,
    AGE_MOE,
    HEALTHCARE,
    HEALTHCARE_HIGH,
    HEALTHCARE_LOW,
    INCOME,
    INCOME_MOE,
    OBESITY,
    OBESITY_HIGH,
    OBESITY_LOW,
    POVERTY,
    POVERTY_MOE,
    SMOKES,
    SMOKES_HIGH,
    SMOKES_LOW,
];

/// Schema requiring every census column.
#[must_use]
pub fn schema() -> TableSchema {
    let schema = TEXT_COLUMNS
        .iter()
        .fold(TableSchema::new(), |schema, column| schema.with_text_column(*column));
    NUMERIC_COLUMNS
        .iter()
        .fold(schema, |schema, column| schema.with_numeric_column(*column))
}

const AXIS_PADDING_MIN: f64 = 0.9;
const AXIS_PADDING_MAX: f64 = 1.1;

/// Selectable horizontal axes: poverty, age and household income.
pub fn default_x_axes() -> ChartResult<Vec<AxisDefinition>> {
    [
        (POVERTY, "In Poverty (%)"),
        (AGE, "Age (Median)"),
        (INCOME, "Household Income (Median)"),
    ]
    .into_iter()
    .map(|(column, label)| padded_axis(column, label))
    .collect()
}

/// Selectable vertical axes: healthcare coverage, smoking and obesity.
pub fn default_y_axes() -> ChartResult<Vec<AxisDefinition>> {
    [
        (HEALTHCARE, "Lacks Healthcare (%)"),
        (SMOKES, "Smokes (%)"),
        (OBESITY, "Obese (%)"),
    ]
    .into_iter()
    .map(|(column, label)| padded_axis(column, label))
    .collect()
}

fn padded_axis(column: &str, label: &str) -> ChartResult<AxisDefinition> {
    AxisDefinition::new(column, label)
        .with_min_scale(AXIS_PADDING_MIN)?
        .with_max_scale(AXIS_PADDING_MAX)
}
