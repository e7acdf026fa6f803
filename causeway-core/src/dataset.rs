//! Column-major container for continuous observational data.

use std::collections::HashMap;

use crate::errors::DatasetError;

/// A continuous-valued dataset: named columns of equal length, rows are
/// independent observations.
///
/// Construction validates the shape once so downstream code can index
/// columns without re-checking.
#[derive(Debug, Clone)]
pub struct Dataset {
    names: Vec<String>,
    index: HashMap<String, usize>,
    columns: Vec<Vec<f64>>,
    rows: usize,
}

impl Dataset {
    /// Build a dataset from (name, values) pairs.
    ///
    /// Fails on: no columns, unequal column lengths, duplicate names, or any
    /// non-finite value.
    pub fn from_columns<N, I>(columns: I) -> Result<Self, DatasetError>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Vec<f64>)>,
    {
        let mut names = Vec::new();
        let mut index = HashMap::new();
        let mut data = Vec::new();
        let mut rows = None;

        for (name, values) in columns {
            let name = name.into();
            let expected = *rows.get_or_insert(values.len());
            if values.len() != expected {
                return Err(DatasetError::ColumnLengthMismatch {
                    column: name,
                    expected,
                    actual: values.len(),
                });
            }
            if let Some(row) = values.iter().position(|v| !v.is_finite()) {
                return Err(DatasetError::NonFiniteValue { column: name, row });
            }
            if index.insert(name.clone(), data.len()).is_some() {
                return Err(DatasetError::DuplicateColumn { column: name });
            }
            names.push(name);
            data.push(values);
        }

        match rows {
            None => Err(DatasetError::Empty),
            Some(rows) => Ok(Self {
                names,
                index,
                columns: data,
                rows,
            }),
        }
    }

    /// Number of observations.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column names in insertion order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Whether a column exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Values of a column.
    pub fn column(&self, name: &str) -> Result<&[f64], DatasetError> {
        self.index
            .get(name)
            .map(|&i| self.columns[i].as_slice())
            .ok_or_else(|| DatasetError::UnknownColumn {
                column: name.to_string(),
            })
    }
}
