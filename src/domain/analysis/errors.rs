//! Errors raised while building a decision matrix or scoring it.

use thiserror::Error;

/// Errors produced by the TOPSIS scorer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopsisError {
    #[error("Decision matrix must have at least one alternative and one criterion")]
    EmptyMatrix,

    #[error("Shape mismatch in {context}: expected {expected}, got {actual}")]
    ShapeMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    #[error("Weight for criterion {column} must be finite and non-negative, got {value}")]
    InvalidWeight { column: usize, value: f64 },

    #[error("Value at row {row}, column {column} is not finite")]
    NonFiniteValue { row: usize, column: usize },

    #[error("Criterion {column} has zero norm")]
    ZeroNormColumn { column: usize },

    #[error("Alternative {row} coincides with both ideal points")]
    ZeroDistanceRow { row: usize },
}

impl TopsisError {
    /// Creates a shape mismatch error.
    pub fn shape_mismatch(context: impl Into<String>, expected: usize, actual: usize) -> Self {
        TopsisError::ShapeMismatch {
            context: context.into(),
            expected,
            actual,
        }
    }

    /// Returns true for errors caused by malformed input shape.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            TopsisError::EmptyMatrix | TopsisError::ShapeMismatch { .. }
        )
    }

    /// Returns true for numerical degeneracies rejected by the strict policy.
    pub fn is_degeneracy(&self) -> bool {
        matches!(
            self,
            TopsisError::NonFiniteValue { .. }
                | TopsisError::ZeroNormColumn { .. }
                | TopsisError::ZeroDistanceRow { .. }
        )
    }
}
