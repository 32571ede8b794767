use evobench_de::OptimError;
use evobench_env::EnvError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExperimentError {
    #[error(transparent)]
    Optim(#[from] OptimError),

    #[error("unknown benchmark function: {0}")]
    UnknownFunction(String),

    #[error("invalid experiment: {0}")]
    InvalidExperiment(String),

    #[error(transparent)]
    Env(#[from] EnvError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("config file error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExperimentError>;
