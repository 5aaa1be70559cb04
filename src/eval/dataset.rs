//! Evaluation dataset and report.

use crate::error::Result;
use crate::eval::metrics::mean;
use crate::eval::query::EvalQuery;
use crate::eval::ranking::Gold;
use serde::{Deserialize, Serialize};

/// A batch of eval queries with optional judgments shared by all of them.
#[derive(Debug, Clone, Deserialize)]
pub struct EvalDataset {
    /// Shared gold, used by queries that carry no judgments of their own.
    #[serde(default)]
    pub gold: Option<Gold>,
    pub queries: Vec<EvalQuery>,
}

/// Reciprocal rank of one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryScore {
    pub id: String,
    pub reciprocal_rank: f64,
}

/// Outcome of evaluating a dataset.
#[derive(Debug, Clone, Serialize)]
pub struct MrrReport {
    /// Cutoff used (None = unbounded).
    pub cutoff: Option<usize>,
    /// Number of queries evaluated.
    pub queries: usize,
    /// Per-query reciprocal ranks, in dataset order.
    pub per_query: Vec<QueryScore>,
    pub mrr: f64,
}

impl MrrReport {
    pub fn passes(&self, min_mrr: f64) -> bool {
        self.mrr >= min_mrr
    }

    /// Per-query reciprocal ranks as a plain vector.
    pub fn reciprocal_ranks(&self) -> Vec<f64> {
        self.per_query.iter().map(|q| q.reciprocal_rank).collect()
    }
}

impl EvalDataset {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Score every query and aggregate. Fails on the first invalid query;
    /// an empty dataset is an undefined aggregate.
    pub fn evaluate(&self, cutoff: Option<usize>) -> Result<MrrReport> {
        let per_query = self
            .queries
            .iter()
            .map(|query| {
                let reciprocal_rank = query.reciprocal_rank(self.gold.as_ref(), cutoff)?;
                if reciprocal_rank == 0.0 {
                    log::warn!("query '{}': no relevant item within cutoff {:?}", query.id, cutoff);
                }
                Ok(QueryScore {
                    id: query.id.clone(),
                    reciprocal_rank,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let reciprocal_ranks: Vec<f64> = per_query.iter().map(|q| q.reciprocal_rank).collect();
        let mrr = mean(&reciprocal_ranks)?;
        log::debug!("MRR = {} over {} queries", mrr, per_query.len());
        Ok(MrrReport {
            cutoff,
            queries: per_query.len(),
            per_query,
            mrr,
        })
    }
}
