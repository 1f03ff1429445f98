use std::fmt;

use itertools::Itertools;
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::Error;

/// Timing samples laid out in rows of equal length, one row per trial.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleMatrix {
    rows: usize,
    columns: usize,
    values: Vec<f64>,
}

impl SampleMatrix {
    /// Reshapes a flat sequence into `rows` rows in row-major order.
    ///
    /// The column count is `values.len() / rows`. Fails if `rows` is zero or
    /// does not divide the number of values.
    pub fn reshape(values: Vec<f64>, rows: usize) -> Result<Self, Error> {
        if rows == 0 || values.len() % rows != 0 {
            return Err(Error::Reshape {
                samples: values.len(),
                rows,
            });
        }

        Ok(Self {
            rows,
            columns: values.len() / rows,
            values,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> &[f64] {
        assert!(row < self.rows, "row {row} out of bounds");
        &self.values[row * self.columns..(row + 1) * self.columns]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.rows).map(move |row| self.row(row))
    }

    /// The samples in row-major order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl fmt::Display for SampleMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            writeln!(f, "[{}]", row.iter().join(" "))?;
        }
        Ok(())
    }
}

impl Serialize for SampleMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let rows = self.iter_rows().collect::<Vec<_>>();

        let mut state = serializer.serialize_struct("SampleMatrix", 2)?;
        state.serialize_field("shape", &[self.rows, self.columns])?;
        state.serialize_field("rows", &rows)?;
        state.end()
    }
}
