use thiserror::Error;

use crate::core::Dimension;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("record {row} has no column `{column}`")]
    MissingColumn { row: usize, column: String },

    #[error("data table has no `{column}` header")]
    MissingHeader { column: String },

    #[error("record {row} column `{column}` is not numeric: `{value}`")]
    NonNumeric {
        row: usize,
        column: String,
        value: String,
    },

    #[error("chart configuration error: {0}")]
    Configuration(String),

    #[error("{dimension} axis index {index} is out of range ({len} registered)")]
    Selection {
        dimension: Dimension,
        index: usize,
        len: usize,
    },

    #[error("failed to read data table: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ChartError {
    /// Returns `true` for failures caused by the loaded records themselves.
    #[must_use]
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidData(_)
                | Self::MissingColumn { .. }
                | Self::MissingHeader { .. }
                | Self::NonNumeric { .. }
        )
    }
}
