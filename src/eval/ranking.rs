//! Ranking inputs: gold judgments, score sorting, cutoff windows and
//! judgment completeness checks.

use crate::error::{MrrError, Result};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Gold judgments: identifier -> relevant or not.
pub type Gold = HashMap<String, bool>;

/// Number of top positions considered when no cutoff is given explicitly.
pub const DEFAULT_CUTOFF: usize = 10;

/// Gold judgments for a batch of rankings.
#[derive(Debug, Clone, Copy)]
pub enum Judgments<'a> {
    /// One gold mapping per ranking, matched by position.
    PerRanking(&'a [Gold]),
    /// A single gold mapping applied to every ranking.
    Shared(&'a Gold),
}

impl<'a> Judgments<'a> {
    /// Returns the gold mapping for each of `rankings` rankings, in order.
    /// Fails when per-ranking judgments don't line up with the batch.
    pub fn per_ranking(&self, rankings: usize) -> Result<Vec<&'a Gold>> {
        match *self {
            Judgments::PerRanking(golds) => {
                if golds.len() != rankings {
                    return Err(MrrError::PreconditionViolation(format!(
                        "the number of rankings ({}) and gold judgments ({}) should be identical",
                        rankings,
                        golds.len()
                    )));
                }
                Ok(golds.iter().collect())
            }
            Judgments::Shared(gold) => Ok(vec![gold; rankings]),
        }
    }
}

/// Orders identifiers by descending score.
///
/// Accepts any source of `(identifier, score)` pairs: an ordered list of pairs
/// or a map such as `HashMap<String, f64>`. The sort is stable, so identifiers
/// with equal scores keep the order in which they were supplied (for a
/// `HashMap` that is its iteration order). NaN scores have no position in the
/// order and are rejected.
pub fn sort_by_score_desc<I, S>(scored: I) -> Result<Vec<S>>
where
    I: IntoIterator<Item = (S, f64)>,
    S: AsRef<str>,
{
    let mut ordered: Vec<(S, f64)> = scored.into_iter().collect();
    if let Some((id, _)) = ordered.iter().find(|(_, score)| score.is_nan()) {
        return Err(MrrError::PreconditionViolation(format!(
            "score for '{}' is NaN",
            S::as_ref(id)
        )));
    }
    ordered.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    Ok(ordered.into_iter().map(|(id, _)| id).collect())
}

/// Fails unless every identifier in `ranking` has a gold label.
pub fn ensure_complete_judgments<S: AsRef<str>>(ranking: &[S], gold: &Gold) -> Result<()> {
    let missing = ranking
        .iter()
        .map(S::as_ref)
        .find(|id| !gold.contains_key(*id));
    match missing {
        Some(id) => Err(MrrError::PreconditionViolation(format!(
            "cannot compute reciprocal rank without complete judgments: '{}' has no gold label",
            id
        ))),
        None => Ok(()),
    }
}

/// The leading positions of `ranking` considered under `cutoff` (None = all).
pub fn window<S>(ranking: &[S], cutoff: Option<usize>) -> &[S] {
    match cutoff {
        Some(k) => &ranking[..k.min(ranking.len())],
        None => ranking,
    }
}
