//! TOPSIS Scorer - Closeness-to-ideal scoring and ranking of alternatives.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{DecisionMatrix, TopsisError, TopsisResult};
use crate::domain::foundation::Impact;

/// How the scorer treats numerically degenerate input.
///
/// A criterion whose values are all zero has zero norm, and an alternative
/// that sits on both ideal points has zero total distance. Both divide by zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegeneracyPolicy {
    /// Let NaN/Inf flow into the scores (IEEE-754 arithmetic).
    #[default]
    Propagate,
    /// Fail with a `TopsisError` instead of producing NaN/Inf.
    Reject,
}

/// Per-criterion ideal best and ideal worst values, after weighting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdealPoints {
    pub best: Vec<f64>,
    pub worst: Vec<f64>,
}

/// Euclidean distance of every alternative to both ideal points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Separation {
    pub to_best: Vec<f64>,
    pub to_worst: Vec<f64>,
}

/// TOPSIS scoring over a decision matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TopsisScorer {
    policy: DegeneracyPolicy,
}

impl TopsisScorer {
    /// Creates a scorer with the given degeneracy policy.
    pub fn new(policy: DegeneracyPolicy) -> Self {
        Self { policy }
    }

    /// Returns the degeneracy policy in effect.
    pub fn policy(&self) -> DegeneracyPolicy {
        self.policy
    }

    /// Scores and ranks every alternative.
    ///
    /// # Algorithm
    /// 1. Divide each column by its Euclidean norm
    /// 2. Multiply each column by its weight
    /// 3. Take the ideal best/worst per column according to its impact
    /// 4. Measure each row's distance to both ideal points
    /// 5. score = d_worst / (d_best + d_worst), rank by descending score
    ///
    /// # Edge Cases
    /// - Weights or impacts of the wrong length: `ShapeMismatch`
    /// - Negative or non-finite weight: `InvalidWeight`
    /// - All-zero column or zero-distance row: NaN scores under
    ///   `Propagate`, an error under `Reject`
    /// - Equal scores: earlier rows get the better rank
    pub fn score(
        &self,
        matrix: &DecisionMatrix,
        weights: &[f64],
        impacts: &[Impact],
    ) -> Result<TopsisResult, TopsisError> {
        Self::check_inputs(matrix, weights, impacts)?;

        if self.policy == DegeneracyPolicy::Reject {
            Self::check_finite(matrix)?;
        }

        debug!(
            alternatives = matrix.rows(),
            criteria = matrix.columns(),
            policy = ?self.policy,
            "Scoring decision matrix"
        );

        let norms = Self::column_norms(matrix);
        for (column, norm) in norms.iter().enumerate() {
            if *norm == 0.0 {
                match self.policy {
                    DegeneracyPolicy::Reject => {
                        return Err(TopsisError::ZeroNormColumn { column })
                    }
                    DegeneracyPolicy::Propagate => {
                        warn!(column, "Criterion has zero norm, its values become NaN")
                    }
                }
            }
        }

        let normalized = Self::divide_columns(matrix, &norms);
        let weighted = Self::apply_weights(&normalized, weights);
        let ideal = Self::ideal_points(&weighted, impacts);

        debug!(best = ?ideal.best, worst = ?ideal.worst, "Computed ideal points");

        let separation = Self::separation_distances(&weighted, &ideal);
        for (row, (best, worst)) in separation
            .to_best
            .iter()
            .zip(&separation.to_worst)
            .enumerate()
        {
            if best + worst == 0.0 {
                match self.policy {
                    DegeneracyPolicy::Reject => return Err(TopsisError::ZeroDistanceRow { row }),
                    DegeneracyPolicy::Propagate => {
                        warn!(row, "Alternative coincides with both ideal points, score is NaN")
                    }
                }
            }
        }

        let scores = Self::closeness_scores(&separation);
        let ranks = Self::rank_scores(&scores);

        Ok(TopsisResult {
            alternative_ids: matrix.alternative_ids().to_vec(),
            scores,
            ranks,
            ideal_best: ideal.best,
            ideal_worst: ideal.worst,
            distance_to_best: separation.to_best,
            distance_to_worst: separation.to_worst,
        })
    }

    /// Checks that weights and impacts match the column count and that every
    /// weight is finite and non-negative.
    fn check_inputs(
        matrix: &DecisionMatrix,
        weights: &[f64],
        impacts: &[Impact],
    ) -> Result<(), TopsisError> {
        let columns = matrix.columns();

        if weights.len() != columns {
            return Err(TopsisError::shape_mismatch("weights", columns, weights.len()));
        }
        if impacts.len() != columns {
            return Err(TopsisError::shape_mismatch("impacts", columns, impacts.len()));
        }

        for (column, &value) in weights.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(TopsisError::InvalidWeight { column, value });
            }
        }

        Ok(())
    }

    /// Finds the first non-finite entry, scanning row by row.
    fn check_finite(matrix: &DecisionMatrix) -> Result<(), TopsisError> {
        let columns = matrix.columns();
        match matrix.values().iter().position(|v| !v.is_finite()) {
            Some(index) => Err(TopsisError::NonFiniteValue {
                row: index / columns,
                column: index % columns,
            }),
            None => Ok(()),
        }
    }

    /// Euclidean norm of each column: sqrt(Σ x²).
    pub fn column_norms(matrix: &DecisionMatrix) -> Vec<f64> {
        (0..matrix.columns())
            .map(|column| matrix.column(column).map(|v| v * v).sum::<f64>().sqrt())
            .collect()
    }

    /// Step 1: divides every value by its column's Euclidean norm.
    pub fn normalize_columns(matrix: &DecisionMatrix) -> DecisionMatrix {
        let norms = Self::column_norms(matrix);
        Self::divide_columns(matrix, &norms)
    }

    fn divide_columns(matrix: &DecisionMatrix, norms: &[f64]) -> DecisionMatrix {
        matrix.map_values(|_, column, value| value / norms[column])
    }

    /// Step 2: multiplies each column by its weight.
    ///
    /// Weights are applied as given; they are not rescaled to sum to one.
    pub fn apply_weights(normalized: &DecisionMatrix, weights: &[f64]) -> DecisionMatrix {
        normalized.map_values(|_, column, value| value * weights[column])
    }

    /// Step 3: ideal best and worst per column.
    ///
    /// Benefit columns take the maximum as best; cost columns the minimum.
    pub fn ideal_points(weighted: &DecisionMatrix, impacts: &[Impact]) -> IdealPoints {
        let mut best = Vec::with_capacity(impacts.len());
        let mut worst = Vec::with_capacity(impacts.len());

        for (column, impact) in impacts.iter().enumerate() {
            let max = weighted.column(column).reduce(f64::max).unwrap_or(f64::NAN);
            let min = weighted.column(column).reduce(f64::min).unwrap_or(f64::NAN);

            match impact {
                Impact::Benefit => {
                    best.push(max);
                    worst.push(min);
                }
                Impact::Cost => {
                    best.push(min);
                    worst.push(max);
                }
            }
        }

        IdealPoints { best, worst }
    }

    /// Step 4: Euclidean distance of each row to the ideal best and worst.
    pub fn separation_distances(weighted: &DecisionMatrix, ideal: &IdealPoints) -> Separation {
        let distance = |row: &[f64], point: &[f64]| -> f64 {
            row.iter()
                .zip(point)
                .map(|(v, p)| (v - p) * (v - p))
                .sum::<f64>()
                .sqrt()
        };

        let (to_best, to_worst) = weighted
            .iter_rows()
            .map(|row| {
                (
                    distance(row, ideal.best.as_slice()),
                    distance(row, ideal.worst.as_slice()),
                )
            })
            .unzip();

        Separation { to_best, to_worst }
    }

    /// Step 5a: relative closeness d_worst / (d_best + d_worst).
    pub fn closeness_scores(separation: &Separation) -> Vec<f64> {
        separation
            .to_best
            .iter()
            .zip(&separation.to_worst)
            .map(|(best, worst)| worst / (best + worst))
            .collect()
    }

    /// Step 5b: ranks scores in descending order, starting at 1.
    ///
    /// The sort is stable, so equal scores keep input row order. NaN scores
    /// rank after every number.
    pub fn rank_scores(scores: &[f64]) -> Vec<usize> {
        let key = |score: f64| if score.is_nan() { f64::NEG_INFINITY } else { score };

        let mut order: Vec<usize> = (0..scores.len()).collect();
        order.sort_by(|&a, &b| key(scores[b]).total_cmp(&key(scores[a])));

        let mut ranks = vec![0; scores.len()];
        for (position, row) in order.into_iter().enumerate() {
            ranks[row] = position + 1;
        }
        ranks
    }
}
