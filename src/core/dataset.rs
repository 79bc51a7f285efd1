use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One cell of a loaded table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One table row: column key to value, in header order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(column, value);
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(column.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields.get(column)
    }

    #[must_use]
    pub fn contains(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Immutable ordered collection of records loaded once at startup.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataSet {
    records: Vec<Record>,
}

impl DataSet {
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Fails with `MissingColumn` for the first record lacking `column`.
    pub fn require_column(&self, column: &str) -> ChartResult<()> {
        match self.records.iter().position(|record| !record.contains(column)) {
            Some(row) => Err(ChartError::MissingColumn {
                row,
                column: column.to_owned(),
            }),
            None => Ok(()),
        }
    }

    /// Numeric value of `column` in record `row`.
    pub fn number_at(&self, row: usize, column: &str) -> ChartResult<f64> {
        let record = self.records.get(row).ok_or_else(|| {
            ChartError::InvalidData(format!("record index {row} is out of range"))
        })?;
        numeric_field(record, row, column)
    }

    /// All values of a numeric column, in record order.
    pub fn numeric_column(&self, column: &str) -> ChartResult<Vec<f64>> {
        self.records
            .iter()
            .enumerate()
            .map(|(row, record)| numeric_field(record, row, column))
            .collect()
    }
}

impl<'a> IntoIterator for &'a DataSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<Record> for DataSet {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

pub(crate) fn numeric_field(record: &Record, row: usize, column: &str) -> ChartResult<f64> {
    let value = record.get(column).ok_or_else(|| ChartError::MissingColumn {
        row,
        column: column.to_owned(),
    })?;
    value.as_number().ok_or_else(|| ChartError::NonNumeric {
        row,
        column: column.to_owned(),
        value: value.to_string(),
    })
}
