use thiserror::Error;

/// Errors raised by the optimizers and the convergence recorder
#[derive(Debug, Error)]
pub enum OptimError {
    /// The run parameters cannot describe a valid optimization; raised
    /// before any objective evaluation
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("failed to write convergence record: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize convergence record: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, OptimError>;
