//! Command-line interface of the `run_experiment` binary

use std::path::PathBuf;

use clap::Parser;

use crate::{ExperimentConfig, Result};

/// Compare Differential Evolution and a GA-style search on the benchmark battery.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "run_experiment", author, about, long_about = None)]
pub struct Args {
    /// JSON file with an experiment configuration; flags below override it.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Population size.
    #[arg(long)]
    pub np: Option<usize>,

    /// Crossover probability in [0, 1].
    #[arg(long)]
    pub cr: Option<f64>,

    /// DE differential weight.
    #[arg(long)]
    pub f: Option<f64>,

    /// GA mutation scale.
    #[arg(long)]
    pub pm: Option<f64>,

    /// Comma-separated search dimensions, e.g. 2,10,20.
    #[arg(short, long, value_delimiter = ',')]
    pub dimensions: Vec<usize>,

    /// Repetitions per function and dimension.
    #[arg(short, long)]
    pub runs: Option<usize>,

    /// Evaluation budget per dimension (budget = nfc_per_dim * D).
    #[arg(long)]
    pub nfc_per_dim: Option<usize>,

    /// Comma-separated benchmark names; all eight when omitted.
    #[arg(long, value_delimiter = ',')]
    pub functions: Vec<String>,

    /// Base random seed for reproducible sweeps.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output directory; defaults to $EVOBENCH_DIR/data_generated/results.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Skip the HTML convergence plots.
    #[arg(long)]
    pub no_plots: bool,

    /// Run repetitions one after another instead of in parallel.
    #[arg(long)]
    pub sequential: bool,
}

impl Args {
    /// Merge the optional config file, the defaults and the explicit flags
    pub fn experiment_config(&self) -> Result<ExperimentConfig> {
        let mut cfg = match &self.config {
            Some(path) => ExperimentConfig::from_json_file(path)?,
            None => ExperimentConfig::default(),
        };
        if let Some(v) = self.np {
            cfg.np = v;
        }
        if let Some(v) = self.cr {
            cfg.cr = v;
        }
        if let Some(v) = self.f {
            cfg.f = v;
        }
        if let Some(v) = self.pm {
            cfg.pm = v;
        }
        if !self.dimensions.is_empty() {
            cfg.dimensions = self.dimensions.clone();
        }
        if let Some(v) = self.runs {
            cfg.runs = v;
        }
        if let Some(v) = self.nfc_per_dim {
            cfg.nfc_per_dim = v;
        }
        if !self.functions.is_empty() {
            cfg.functions = self.functions.clone();
        }
        if self.seed.is_some() {
            cfg.seed = self.seed;
        }
        if self.sequential {
            cfg.parallel = false;
        }
        Ok(cfg)
    }
}
