//! Scores, ranks, and intermediate artefacts of one TOPSIS run.

use serde::Serialize;

/// One alternative's outcome, labelled with its identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedAlternative {
    pub alternative_id: String,
    /// Row index in the input matrix.
    pub row: usize,
    pub score: f64,
    pub rank: usize,
}

/// Output of [`TopsisScorer::score`](super::TopsisScorer::score).
///
/// Every vector is indexed by input row, except `ideal_best`/`ideal_worst`
/// which are indexed by criterion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopsisResult {
    pub alternative_ids: Vec<String>,
    /// Relative closeness to the ideal solution, in [0, 1] unless degenerate.
    pub scores: Vec<f64>,
    /// 1 for the highest score, through M.
    pub ranks: Vec<usize>,
    pub ideal_best: Vec<f64>,
    pub ideal_worst: Vec<f64>,
    pub distance_to_best: Vec<f64>,
    pub distance_to_worst: Vec<f64>,
}

impl TopsisResult {
    /// Returns the number of scored alternatives.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Returns true if no alternatives were scored.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Returns every alternative with its score and rank, in input row order.
    pub fn ranked(&self) -> Vec<RankedAlternative> {
        self.alternative_ids
            .iter()
            .zip(self.scores.iter().zip(&self.ranks))
            .enumerate()
            .map(|(row, (id, (&score, &rank)))| RankedAlternative {
                alternative_id: id.clone(),
                row,
                score,
                rank,
            })
            .collect()
    }

    /// Returns row indices ordered from rank 1 to rank M.
    pub fn ordering(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.ranks.len()).collect();
        order.sort_by_key(|&row| self.ranks[row]);
        order
    }

    /// Returns the alternative ranked first.
    pub fn best(&self) -> Option<RankedAlternative> {
        self.ranked().into_iter().find(|r| r.rank == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_way() -> TopsisResult {
        TopsisResult {
            alternative_ids: vec!["A".into(), "B".into(), "C".into()],
            scores: vec![0.4, 0.9, 0.1],
            ranks: vec![2, 1, 3],
            ideal_best: vec![1.0],
            ideal_worst: vec![0.0],
            distance_to_best: vec![0.6, 0.1, 0.9],
            distance_to_worst: vec![0.4, 0.9, 0.1],
        }
    }

    #[test]
    fn ranked_keeps_input_order() {
        let ranked = three_way().ranked();

        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].alternative_id, "A");
        assert_eq!(ranked[0].row, 0);
        assert_eq!(ranked[0].rank, 2);
        assert_eq!(ranked[2].alternative_id, "C");
        assert_eq!(ranked[2].rank, 3);
    }

    #[test]
    fn ordering_lists_rows_best_first() {
        assert_eq!(three_way().ordering(), vec![1, 0, 2]);
    }

    #[test]
    fn best_returns_rank_one() {
        let best = three_way().best().unwrap();
        assert_eq!(best.alternative_id, "B");
        assert!((best.score - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_result_has_no_best() {
        let result = TopsisResult {
            alternative_ids: Vec::new(),
            scores: Vec::new(),
            ranks: Vec::new(),
            ideal_best: Vec::new(),
            ideal_worst: Vec::new(),
            distance_to_best: Vec::new(),
            distance_to_worst: Vec::new(),
        };
        assert!(result.is_empty());
        assert!(result.best().is_none());
        assert!(result.ordering().is_empty());
    }

    #[test]
    fn result_serializes_to_json() {
        let json = serde_json::to_value(three_way()).unwrap();
        assert_eq!(json["ranks"], serde_json::json!([2, 1, 3]));
        assert_eq!(json["alternative_ids"][1], "B");
    }
}
