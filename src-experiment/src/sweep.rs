use std::fmt;

use evobench_de::{ConvergenceTrace, DifferentialEvolution, GeneticAlgorithm};
use evobench_testfunctions::TestFunction;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;

use crate::stats::{Summary, mean_curve, summarize};
use crate::{ExperimentConfig, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Algorithm {
    #[serde(rename = "DE")]
    De = 0,
    #[serde(rename = "GA")]
    Ga = 1,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::De => write!(f, "DE"),
            Algorithm::Ga => write!(f, "GA"),
        }
    }
}

/// Seed of one repetition, distinct per function, dimension, run and algorithm
pub fn derive_seed(
    base: u64,
    function_idx: usize,
    dim: usize,
    run: usize,
    algorithm: Algorithm,
) -> u64 {
    base.wrapping_add((function_idx as u64) << 48)
        .wrapping_add((dim as u64) << 32)
        .wrapping_add((run as u64) << 1)
        .wrapping_add(algorithm as u64)
}

/// Traces of every repetition for one (function, dimension)
#[derive(Debug, Clone)]
pub struct CellResult {
    pub function: String,
    pub dim: usize,
    pub np: usize,
    pub de_traces: Vec<ConvergenceTrace>,
    pub ga_traces: Vec<ConvergenceTrace>,
}

impl CellResult {
    pub fn traces(&self, algorithm: Algorithm) -> &[ConvergenceTrace] {
        match algorithm {
            Algorithm::De => &self.de_traces,
            Algorithm::Ga => &self.ga_traces,
        }
    }

    /// Element-wise mean of the runs, itself a non-increasing trace
    pub fn mean_curve(&self, algorithm: Algorithm) -> ConvergenceTrace {
        ConvergenceTrace::from(mean_curve(self.traces(algorithm)))
    }

    pub fn summaries(&self) -> [Summary; 2] {
        [
            summarize(&self.function, self.dim, Algorithm::De, &self.de_traces),
            summarize(&self.function, self.dim, Algorithm::Ga, &self.ga_traces),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct ExperimentResults {
    pub config: ExperimentConfig,
    pub base_seed: u64,
    pub cells: Vec<CellResult>,
}

impl ExperimentResults {
    pub fn summaries(&self) -> Vec<Summary> {
        self.cells.iter().flat_map(|c| c.summaries()).collect()
    }

    pub fn summaries_for_dimension(&self, dim: usize) -> Vec<Summary> {
        self.cells.iter().filter(|c| c.dim == dim).flat_map(|c| c.summaries()).collect()
    }
}

/// One DE run and one GA run, each with its own RNG
fn run_repetition(
    func: TestFunction,
    function_idx: usize,
    dim: usize,
    run: usize,
    config: &ExperimentConfig,
    base_seed: u64,
) -> Result<(ConvergenceTrace, ConvergenceTrace)> {
    let seed = |algorithm| derive_seed(base_seed, function_idx, dim, run, algorithm);

    let mut rng = StdRng::seed_from_u64(seed(Algorithm::De));
    let de = DifferentialEvolution::new(&func, dim, config.de_config(dim))
        .solve_with_rng(&mut rng)?;

    let mut rng = StdRng::seed_from_u64(seed(Algorithm::Ga));
    let ga = GeneticAlgorithm::new(&func, dim, config.ga_config(dim)).solve_with_rng(&mut rng)?;

    Ok((de.trace, ga.trace))
}

/// All repetitions for one (function, dimension)
pub fn run_cell(
    name: &str,
    func: TestFunction,
    function_idx: usize,
    dim: usize,
    config: &ExperimentConfig,
    base_seed: u64,
) -> Result<CellResult> {
    let pairs: Vec<(ConvergenceTrace, ConvergenceTrace)> = if config.parallel {
        (0..config.runs)
            .into_par_iter()
            .map(|run| run_repetition(func, function_idx, dim, run, config, base_seed))
            .collect::<Result<_>>()?
    } else {
        (0..config.runs)
            .map(|run| run_repetition(func, function_idx, dim, run, config, base_seed))
            .collect::<Result<_>>()?
    };
    let (de_traces, ga_traces) = pairs.into_iter().unzip();
    Ok(CellResult { function: name.to_string(), dim, np: config.np, de_traces, ga_traces })
}

/// Sweep functions x dimensions x runs
pub fn run_experiment(config: &ExperimentConfig) -> Result<ExperimentResults> {
    config.validate()?;
    let base_seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let functions = config.resolved_functions()?;

    log::info!(
        "experiment: {} functions x {:?} dims x {} runs (np={}, base seed {})",
        functions.len(),
        config.dimensions,
        config.runs,
        config.np,
        base_seed
    );

    let mut cells = Vec::with_capacity(functions.len() * config.dimensions.len());
    for (function_idx, (name, func)) in functions.into_iter().enumerate() {
        for &dim in &config.dimensions {
            let cell = run_cell(name, func, function_idx, dim, config, base_seed)?;
            let [de, ga] = cell.summaries();
            log::info!(
                "{:>26} D={:<3} DE best={:.4e} mean={:.4e} | GA best={:.4e} mean={:.4e}",
                name,
                dim,
                de.best_err,
                de.mean_err,
                ga.best_err,
                ga.mean_err
            );
            cells.push(cell);
        }
    }

    Ok(ExperimentResults { config: config.clone(), base_seed, cells })
}
