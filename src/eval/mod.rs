//! Evaluation: reciprocal rank, MRR, eval datasets and reports.

pub mod dataset;
pub mod metrics;
pub mod query;
pub mod ranking;

pub use dataset::{EvalDataset, MrrReport, QueryScore};
pub use metrics::{
    mean, mean_reciprocal_rank, mean_reciprocal_rank_scored, reciprocal_rank,
    reciprocal_rank_scored, reciprocal_ranks, reciprocal_ranks_scored,
};
pub use query::EvalQuery;
pub use ranking::{ensure_complete_judgments, sort_by_score_desc, Gold, Judgments, DEFAULT_CUTOFF};
