//! Decision Matrix - Alternatives x criteria table of raw values.

use serde::Serialize;

use super::TopsisError;

/// The decision matrix mapping alternatives x criteria to raw values.
///
/// Values are stored row-major: one row per alternative, one column per
/// criterion. A matrix always has at least one row and one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionMatrix {
    /// Ordered list of alternative IDs (the identifier column).
    alternative_ids: Vec<String>,
    /// Ordered list of criterion IDs (the column headers).
    criterion_ids: Vec<String>,
    /// Row-major values, `alternative_ids.len() * criterion_ids.len()` long.
    values: Vec<f64>,
}

impl DecisionMatrix {
    /// Creates a builder for constructing a decision matrix.
    pub fn builder() -> DecisionMatrixBuilder {
        DecisionMatrixBuilder::new()
    }

    /// Creates a matrix from raw rows with generated identifiers.
    ///
    /// Alternatives are labelled `A1..AM` and criteria `C1..CN`.
    ///
    /// # Errors
    /// - `EmptyMatrix` if there are no rows or the first row is empty
    /// - `ShapeMismatch` if any row length differs from the first
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, TopsisError> {
        let mut builder = Self::builder();
        for (index, row) in rows.into_iter().enumerate() {
            builder = builder.alternative(format!("A{}", index + 1), row);
        }
        builder.build()
    }

    /// Returns the number of alternatives (M).
    pub fn rows(&self) -> usize {
        self.alternative_ids.len()
    }

    /// Returns the number of criteria (N).
    pub fn columns(&self) -> usize {
        self.criterion_ids.len()
    }

    /// Returns the alternative IDs in row order.
    pub fn alternative_ids(&self) -> &[String] {
        &self.alternative_ids
    }

    /// Returns the criterion IDs in column order.
    pub fn criterion_ids(&self) -> &[String] {
        &self.criterion_ids
    }

    /// Gets a value by row and column index.
    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        if row >= self.rows() || column >= self.columns() {
            return None;
        }
        self.values.get(row * self.columns() + column).copied()
    }

    /// Returns one alternative's values.
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row >= self.rows() {
            return None;
        }
        let start = row * self.columns();
        self.values.get(start..start + self.columns())
    }

    /// Iterates over the rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.values.chunks(self.columns())
    }

    /// Iterates over one criterion's values, top to bottom.
    pub fn column(&self, column: usize) -> impl Iterator<Item = f64> + '_ {
        self.values
            .iter()
            .skip(column)
            .step_by(self.columns())
            .take(if column < self.columns() { self.rows() } else { 0 })
            .copied()
    }

    /// Returns the row-major values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns a matrix of the same shape and labels with every value
    /// replaced by `f(row, column, value)`.
    pub fn map_values(&self, mut f: impl FnMut(usize, usize, f64) -> f64) -> Self {
        let columns = self.columns();
        let values = self
            .values
            .iter()
            .enumerate()
            .map(|(index, &value)| f(index / columns, index % columns, value))
            .collect();

        Self {
            alternative_ids: self.alternative_ids.clone(),
            criterion_ids: self.criterion_ids.clone(),
            values,
        }
    }
}

/// Builder for constructing DecisionMatrix instances.
#[derive(Debug, Default)]
pub struct DecisionMatrixBuilder {
    criterion_ids: Option<Vec<String>>,
    alternative_ids: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl DecisionMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the criterion labels. Generated as `C1..CN` when omitted.
    pub fn criteria(mut self, ids: Vec<impl Into<String>>) -> Self {
        self.criterion_ids = Some(ids.into_iter().map(|s| s.into()).collect());
        self
    }

    /// Adds an alternative with its raw values.
    pub fn alternative(mut self, id: impl Into<String>, values: Vec<f64>) -> Self {
        self.alternative_ids.push(id.into());
        self.rows.push(values);
        self
    }

    /// Builds the decision matrix, checking that it is non-empty and rectangular.
    pub fn build(self) -> Result<DecisionMatrix, TopsisError> {
        let columns = match (&self.criterion_ids, self.rows.first()) {
            (_, None) => return Err(TopsisError::EmptyMatrix),
            (Some(ids), Some(_)) => ids.len(),
            (None, Some(first)) => first.len(),
        };

        if columns == 0 {
            return Err(TopsisError::EmptyMatrix);
        }

        let mut values = Vec::with_capacity(self.rows.len() * columns);
        for (index, row) in self.rows.into_iter().enumerate() {
            if row.len() != columns {
                return Err(TopsisError::shape_mismatch(
                    format!("row {}", index),
                    columns,
                    row.len(),
                ));
            }
            values.extend(row);
        }

        let criterion_ids = self
            .criterion_ids
            .unwrap_or_else(|| (1..=columns).map(|i| format!("C{}", i)).collect());

        Ok(DecisionMatrix {
            alternative_ids: self.alternative_ids,
            criterion_ids,
            values,
        })
    }
}
