use std::fmt;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::dataset::DataSet;
use crate::error::{ChartError, ChartResult};

/// Chart dimension an axis can be registered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    X,
    Y,
}

impl Dimension {
    pub const ALL: [Self; 2] = [Self::X, Self::Y];
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Closed value interval plotted along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisDomain {
    pub lower: f64,
    pub upper: f64,
}

impl AxisDomain {
    #[must_use]
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.upper - self.lower
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.lower == self.upper
    }

    /// Domain suitable for a linear scale.
    ///
    /// A zero-width domain (one distinct value) is widened by 5% of its
    /// magnitude on each side, or by 0.5 around zero.
    #[must_use]
    pub fn scale_domain(self) -> (f64, f64) {
        if !self.is_degenerate() {
            return (self.lower, self.upper);
        }
        let pad = if self.lower == 0.0 {
            0.5
        } else {
            self.lower.abs() * 0.05
        };
        (self.lower - pad, self.upper + pad)
    }
}

/// One selectable data column with its display label and domain padding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisDefinition {
    column_key: String,
    label: String,
    #[serde(default = "unit_scale")]
    min_scale: f64,
    #[serde(default = "unit_scale")]
    max_scale: f64,
}

fn unit_scale() -> f64 {
    1.0
}

impl AxisDefinition {
    #[must_use]
    pub fn new(column_key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            column_key: column_key.into(),
            label: label.into(),
            min_scale: 1.0,
            max_scale: 1.0,
        }
    }

    #[must_use]
    pub fn column_key(&self) -> &str {
        &self.column_key
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Multiplier applied to the observed column minimum.
    pub fn set_min_scale(&mut self, scale: f64) -> ChartResult<()> {
        validate_scale_factor(scale, "min")?;
        self.min_scale = scale;
        Ok(())
    }

    /// Multiplier applied to the observed column maximum.
    pub fn set_max_scale(&mut self, scale: f64) -> ChartResult<()> {
        validate_scale_factor(scale, "max")?;
        self.max_scale = scale;
        Ok(())
    }

    pub fn with_min_scale(mut self, scale: f64) -> ChartResult<Self> {
        self.set_min_scale(scale)?;
        Ok(self)
    }

    pub fn with_max_scale(mut self, scale: f64) -> ChartResult<Self> {
        self.set_max_scale(scale)?;
        Ok(self)
    }

    /// Checks that definitions deserialized from config carry usable values.
    pub fn validate(&self) -> ChartResult<()> {
        if self.column_key.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "axis column key must not be empty".to_owned(),
            ));
        }
        validate_scale_factor(self.min_scale, "min")?;
        validate_scale_factor(self.max_scale, "max")
    }

    /// Computes `[min * min_scale, max * max_scale]` over the column.
    ///
    /// Non-finite values are ignored; an empty data set, or one without any
    /// finite value in the column, is rejected.
    pub fn compute_domain(&self, data: &DataSet) -> ChartResult<AxisDomain> {
        if data.is_empty() {
            return Err(ChartError::InvalidData(format!(
                "cannot compute domain of `{}` over an empty data set",
                self.column_key
            )));
        }

        let mut bounds: Option<(OrderedFloat<f64>, OrderedFloat<f64>)> = None;
        for value in data
            .numeric_column(&self.column_key)?
            .into_iter()
            .filter(|value| value.is_finite())
            .map(OrderedFloat)
        {
            bounds = Some(match bounds {
                Some((min, max)) => (min.min(value), max.max(value)),
                None => (value, value),
            });
        }
        let (min, max) = bounds.ok_or_else(|| {
            ChartError::InvalidData(format!(
                "column `{}` has no finite values",
                self.column_key
            ))
        })?;

        Ok(AxisDomain::new(
            min.into_inner() * self.min_scale,
            max.into_inner() * self.max_scale,
        ))
    }
}

fn validate_scale_factor(scale: f64, bound: &str) -> ChartResult<()> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "axis {bound} scale must be finite and > 0"
        )));
    }
    Ok(())
}
