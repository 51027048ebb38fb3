//! Scoring configuration

use serde::Deserialize;

use crate::domain::analysis::{DegeneracyPolicy, TopsisScorer};

/// Scoring configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringConfig {
    /// What to do with zero-norm criteria and zero-distance alternatives
    #[serde(default)]
    pub degeneracy_policy: DegeneracyPolicy,
}

impl ScoringConfig {
    /// Build a scorer using this configuration
    pub fn scorer(&self) -> TopsisScorer {
        TopsisScorer::new(self.degeneracy_policy)
    }
}
