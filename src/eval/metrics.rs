//! Reciprocal rank and Mean Reciprocal Rank (MRR).
//!
//! Every function here is pure: inputs are validated up front and the
//! computed value is returned, never printed. Aggregates are traced at
//! `debug` level through the `log` facade.
//!
//! # Example
//!
//! ```
//! use mrr_eval::eval::{mean_reciprocal_rank, reciprocal_rank, Gold, Judgments};
//!
//! let gold: Gold = [("d1", false), ("d2", true), ("d3", false)]
//!     .into_iter()
//!     .map(|(id, rel)| (id.to_string(), rel))
//!     .collect();
//!
//! assert_eq!(reciprocal_rank(&["d1", "d2", "d3"], &gold, Some(10)).unwrap(), 0.5);
//!
//! let rankings = vec![vec!["d2", "d1"], vec!["d1", "d3"]];
//! let mrr = mean_reciprocal_rank(&rankings, Judgments::Shared(&gold), None).unwrap();
//! assert_eq!(mrr, 0.5);
//! ```

use crate::error::{MrrError, Result};
use crate::eval::ranking::{ensure_complete_judgments, sort_by_score_desc, window, Gold, Judgments};

/// Reciprocal rank of a single ranking: 1 / (1-indexed rank of the first
/// relevant identifier), or 0.0 if none is relevant within the cutoff.
///
/// The ranking is truncated to `cutoff` entries before anything else;
/// `None` keeps the whole ranking. Every identifier inside that window must
/// have a gold label, identifiers past the cutoff need none.
pub fn reciprocal_rank<S: AsRef<str>>(
    ranking: &[S],
    gold: &Gold,
    cutoff: Option<usize>,
) -> Result<f64> {
    let considered = window(ranking, cutoff);
    ensure_complete_judgments(considered, gold)?;
    let first_relevant = considered
        .iter()
        .position(|id| gold.get(S::as_ref(id)).copied().unwrap_or(false));
    Ok(match first_relevant {
        Some(rank) => 1.0 / (rank + 1) as f64,
        None => 0.0,
    })
}

/// Reciprocal rank of a ranking given as (identifier, score) pairs, either an
/// ordered list or a score map. Identifiers are ordered by descending score
/// (see [`sort_by_score_desc`]) before scoring.
pub fn reciprocal_rank_scored<I, S>(scored: I, gold: &Gold, cutoff: Option<usize>) -> Result<f64>
where
    I: IntoIterator<Item = (S, f64)>,
    S: AsRef<str>,
{
    let ranking = sort_by_score_desc(scored)?;
    reciprocal_rank(&ranking, gold, cutoff)
}

/// Reciprocal rank of every ranking in a batch, in input order.
/// Typically fed to downstream significance tests.
pub fn reciprocal_ranks<S: AsRef<str>>(
    rankings: &[Vec<S>],
    judgments: Judgments<'_>,
    cutoff: Option<usize>,
) -> Result<Vec<f64>> {
    let golds = judgments.per_ranking(rankings.len())?;
    rankings
        .iter()
        .zip(golds)
        .map(|(ranking, gold)| reciprocal_rank(ranking, gold, cutoff))
        .collect()
}

/// Same as [`reciprocal_ranks`] for rankings given as score pairs.
pub fn reciprocal_ranks_scored<S: AsRef<str>>(
    rankings: &[Vec<(S, f64)>],
    judgments: Judgments<'_>,
    cutoff: Option<usize>,
) -> Result<Vec<f64>> {
    let golds = judgments.per_ranking(rankings.len())?;
    rankings
        .iter()
        .zip(golds)
        .map(|(scored, gold)| {
            let pairs = scored.iter().map(|(id, score)| (S::as_ref(id), *score));
            reciprocal_rank_scored(pairs, gold, cutoff)
        })
        .collect()
}

/// Mean Reciprocal Rank: (1/|Q|) * sum of reciprocal ranks.
/// Fails with [`MrrError::UndefinedAggregate`] on an empty batch.
pub fn mean_reciprocal_rank<S: AsRef<str>>(
    rankings: &[Vec<S>],
    judgments: Judgments<'_>,
    cutoff: Option<usize>,
) -> Result<f64> {
    let mrr = mean(&reciprocal_ranks(rankings, judgments, cutoff)?)?;
    log::debug!("MRR = {} over {} rankings", mrr, rankings.len());
    Ok(mrr)
}

/// Mean Reciprocal Rank over rankings given as score pairs.
pub fn mean_reciprocal_rank_scored<S: AsRef<str>>(
    rankings: &[Vec<(S, f64)>],
    judgments: Judgments<'_>,
    cutoff: Option<usize>,
) -> Result<f64> {
    let mrr = mean(&reciprocal_ranks_scored(rankings, judgments, cutoff)?)?;
    log::debug!("MRR = {} over {} scored rankings", mrr, rankings.len());
    Ok(mrr)
}

/// Arithmetic mean of per-ranking reciprocal ranks.
pub fn mean(reciprocal_ranks: &[f64]) -> Result<f64> {
    if reciprocal_ranks.is_empty() {
        return Err(MrrError::UndefinedAggregate);
    }
    Ok(reciprocal_ranks.iter().sum::<f64>() / reciprocal_ranks.len() as f64)
}
