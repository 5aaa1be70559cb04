use thiserror::Error;

/// Main error type for mrr-eval
#[derive(Error, Debug)]
pub enum MrrError {
    /// Inputs break a precondition of the computation (incomplete judgments,
    /// mismatched batch sizes, unusable scores)
    #[error("Precondition violation: {0}")]
    PreconditionViolation(String),

    /// Mean requested over an empty batch
    #[error("Undefined aggregate: cannot average reciprocal ranks over an empty batch")]
    UndefinedAggregate,

    /// Dataset parse errors
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenient Result type using MrrError
pub type Result<T> = std::result::Result<T, MrrError>;
