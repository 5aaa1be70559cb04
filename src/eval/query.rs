//! Eval query type: one ranking to score against gold judgments.

use crate::error::{MrrError, Result};
use crate::eval::metrics::{reciprocal_rank, reciprocal_rank_scored};
use crate::eval::ranking::Gold;
use serde::Deserialize;

/// Single evaluation query: a ranking plus (optionally) its own judgments.
#[derive(Debug, Clone, Deserialize)]
pub struct EvalQuery {
    /// Query identifier used in reports.
    pub id: String,
    /// Ranked identifiers, most relevant first.
    #[serde(default)]
    pub ranking: Option<Vec<String>>,
    /// Alternatively: `[identifier, score]` pairs, ranked by descending score.
    #[serde(default)]
    pub scores: Option<Vec<(String, f64)>>,
    /// Judgments for this query only; falls back to the dataset's shared gold.
    #[serde(default)]
    pub gold: Option<Gold>,
}

impl EvalQuery {
    /// Reciprocal rank of this query's ranking.
    /// Uses the query's own gold if present, otherwise `shared`.
    pub fn reciprocal_rank(&self, shared: Option<&Gold>, cutoff: Option<usize>) -> Result<f64> {
        let gold = self.gold.as_ref().or(shared).ok_or_else(|| {
            MrrError::PreconditionViolation(format!("query '{}' has no gold judgments", self.id))
        })?;
        match (&self.ranking, &self.scores) {
            (Some(ranking), None) => reciprocal_rank(ranking, gold, cutoff),
            (None, Some(scores)) => {
                let pairs = scores.iter().map(|(id, score)| (id.as_str(), *score));
                reciprocal_rank_scored(pairs, gold, cutoff)
            }
            (Some(_), Some(_)) => Err(MrrError::PreconditionViolation(format!(
                "query '{}' must supply either a ranking or scores, not both",
                self.id
            ))),
            (None, None) => Err(MrrError::PreconditionViolation(format!(
                "query '{}' supplies neither a ranking nor scores",
                self.id
            ))),
        }
    }
}
