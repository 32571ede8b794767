//! Experiment driver comparing Differential Evolution and the GA-style search
//!
//! For every benchmark function and dimension the driver runs both
//! optimizers `runs` times with a budget of `nfc_per_dim * D` evaluations,
//! averages the convergence traces and reports mean / best / std errors,
//! as CSV tables and HTML convergence plots.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod plot;
pub mod stats;
pub mod sweep;

pub use config::ExperimentConfig;
pub use error::{ExperimentError, Result};
pub use stats::Summary;
pub use sweep::{Algorithm, CellResult, ExperimentResults, run_experiment};
