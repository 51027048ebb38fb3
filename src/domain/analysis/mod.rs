//! Analysis Module - Pure domain services for decision analysis.
//!
//! This module contains stateless functions that operate on domain objects
//! to perform decision-related calculations and analysis.
//!
//! # Components
//!
//! - `DecisionMatrix` - Alternatives x criteria table of raw values
//! - `TopsisScorer` - Normalization, weighting, ideal points, separation, closeness
//! - `TopsisResult` - Scores and ranks in input row order
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects besides tracing) and stateless.
//! They take domain objects as input and return computed results.

mod decision_matrix;
mod errors;
mod topsis_result;
mod topsis_scorer;

// Re-export all public types
pub use decision_matrix::{DecisionMatrix, DecisionMatrixBuilder};
pub use errors::TopsisError;
pub use topsis_result::{RankedAlternative, TopsisResult};
pub use topsis_scorer::{DegeneracyPolicy, IdealPoints, Separation, TopsisScorer};
