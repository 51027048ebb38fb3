//! Impact direction of a criterion (benefit or cost).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Whether higher or lower raw values are preferable for a criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    /// Higher raw value is better.
    #[default]
    Benefit,
    /// Lower raw value is better.
    Cost,
}

impl Impact {
    /// Returns the conventional symbol: `+` for benefit, `-` for cost.
    pub fn symbol(&self) -> char {
        match self {
            Impact::Benefit => '+',
            Impact::Cost => '-',
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Impact::Benefit => "Benefit",
            Impact::Cost => "Cost",
        }
    }

    /// Returns true if higher values are preferred.
    pub fn is_benefit(&self) -> bool {
        matches!(self, Impact::Benefit)
    }

    /// Returns true if lower values are preferred.
    pub fn is_cost(&self) -> bool {
        matches!(self, Impact::Cost)
    }

    /// Returns the opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Impact::Benefit => Impact::Cost,
            Impact::Cost => Impact::Benefit,
        }
    }
}

impl FromStr for Impact {
    type Err = ValidationError;

    /// Accepts `+`/`-` and the names `benefit`/`cost` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("impact"));
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "+" | "benefit" => Ok(Impact::Benefit),
            "-" | "cost" => Ok(Impact::Cost),
            other => Err(ValidationError::invalid_format(
                "impact",
                format!("expected '+' or '-', got '{}'", other),
            )),
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
