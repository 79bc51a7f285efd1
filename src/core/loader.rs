use std::fs::File;
use std::io::Read;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::census;
use crate::core::dataset::{DataSet, Record, Value};
use crate::error::{ChartError, ChartResult};

/// How a schema column is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnKind {
    Numeric,
    Text,
}

/// Handling of cells that fail to parse in a numeric column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NumericParsePolicy {
    /// Abort the load with `ChartError::NonNumeric`.
    #[default]
    Strict,
    /// Drop the offending record and keep loading.
    SkipRecord,
}

/// Required columns of a table and how each one is parsed.
///
/// Columns present in the file but absent from the schema are kept as text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableSchema {
    columns: IndexMap<String, ColumnKind>,
}

impl TableSchema {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_numeric_column(mut self, column: impl Into<String>) -> Self {
        self.columns.insert(column.into(), ColumnKind::Numeric);
        self
    }

    #[must_use]
    pub fn with_text_column(mut self, column: impl Into<String>) -> Self {
        self.columns.insert(column.into(), ColumnKind::Text);
        self
    }

    #[must_use]
    pub fn kind(&self, column: &str) -> Option<ColumnKind> {
        self.columns.get(column).copied()
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, ColumnKind)> {
        self.columns
            .iter()
            .map(|(column, kind)| (column.as_str(), *kind))
    }
}

/// CSV table loader bound to a schema and a parse policy.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableLoader {
    schema: TableSchema,
    policy: NumericParsePolicy,
}

impl TableLoader {
    #[must_use]
    pub fn new(schema: TableSchema) -> Self {
        Self {
            schema,
            policy: NumericParsePolicy::default(),
        }
    }

    /// Loader for the census table with strict numeric parsing.
    #[must_use]
    pub fn census() -> Self {
        Self::new(census::schema())
    }

    #[must_use]
    pub fn with_policy(mut self, policy: NumericParsePolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    #[must_use]
    pub fn policy(&self) -> NumericParsePolicy {
        self.policy
    }

    pub fn load_path(&self, path: impl AsRef<Path>) -> ChartResult<DataSet> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let data = self.load_reader(file)?;
        debug!(path = %path.display(), records = data.len(), "loaded data table");
        Ok(data)
    }

    pub fn load_reader<R: Read>(&self, reader: R) -> ChartResult<DataSet> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(ToOwned::to_owned)
            .collect();
        for (column, _) in self.schema.columns() {
            if !headers.iter().any(|header| header == column) {
                return Err(ChartError::MissingHeader {
                    column: column.to_owned(),
                });
            }
        }

        let mut records = Vec::new();
        let mut skipped = 0usize;
        for (row, result) in csv_reader.records().enumerate() {
            let raw = result?;
            match self.parse_record(row, &headers, &raw) {
                Ok(record) => records.push(record),
                Err(err @ ChartError::NonNumeric { .. })
                    if self.policy == NumericParsePolicy::SkipRecord =>
                {
                    warn!(row, error = %err, "skipping record with non-numeric value");
                    skipped += 1;
                }
                Err(err) => return Err(err),
            }
        }

        debug!(records = records.len(), skipped, "parsed data table");
        Ok(DataSet::new(records))
    }

    fn parse_record(
        &self,
        row: usize,
        headers: &[String],
        raw: &csv::StringRecord,
    ) -> ChartResult<Record> {
        let mut record = Record::new();
        for (index, header) in headers.iter().enumerate() {
            let Some(cell) = raw.get(index) else {
                if self.schema.kind(header).is_some() {
                    return Err(ChartError::MissingColumn {
                        row,
                        column: header.clone(),
                    });
                }
                continue;
            };

            let value = match self.schema.kind(header) {
                Some(ColumnKind::Numeric) => Value::Number(parse_number(row, header, cell)?),
                Some(ColumnKind::Text) | None => Value::Text(cell.to_owned()),
            };
            record.insert(header.clone(), value);
        }
        Ok(record)
    }
}

fn parse_number(row: usize, column: &str, cell: &str) -> ChartResult<f64> {
    match cell.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ChartError::NonNumeric {
            row,
            column: column.to_owned(),
            value: cell.to_owned(),
        }),
    }
}

/// Loads the census table at `path` with strict numeric parsing.
pub fn load_table(path: impl AsRef<Path>) -> ChartResult<DataSet> {
    TableLoader::census().load_path(path)
}
