//! Population-based optimizers with convergence tracking
//!
//! Two optimizers share the same population representation and operators:
//!
//! - [`DifferentialEvolution`]: rand/1 mutation with binomial crossover,
//!   each trial is evaluated and greedily replaces its target immediately
//!   (later individuals of the same generation see the update).
//! - [`GeneticAlgorithm`]: the whole offspring generation is built from the
//!   current population with a small scaling factor `pm`, evaluated as a
//!   batch, then each slot is greedily replaced.
//!
//! Both runs start from a population drawn uniformly in `[-10, 10)^D` whose
//! evaluations do not count against the budget `max_nfc`, and return a
//! [`ConvergenceTrace`] with the population's best fitness after every
//! generation.

use std::fmt;

use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub mod crossover_binomial;
pub mod distinct_indices;
pub mod mutant_rand1;

pub mod differential_evolution;
pub mod error;
pub mod genetic_algorithm;
pub mod population;
pub mod recorded_de;
pub mod recorder;
pub mod trace;

pub use differential_evolution::{differential_evolution, run_de};
pub use error::{OptimError, Result};
pub use genetic_algorithm::{GeneticAlgorithm, genetic_algorithm, run_ga};
pub use population::Population;
pub use recorded_de::{run_recorded_differential_evolution, run_recorded_genetic_algorithm};
pub use recorder::{ConvergenceRecorder, GenerationRecord};
pub use trace::ConvergenceTrace;

/// Initialization hyper-cube used by the benchmark experiment
pub const INIT_BOUNDS: (f64, f64) = (-10.0, 10.0);

/// Evaluation budget granted per search dimension by the benchmark experiment
pub const MAX_NFC_PER_DIM: usize = 3000;

/// Smallest population able to provide three donors distinct from the target
pub const MIN_POPULATION: usize = 4;

/// Budget used by the benchmark experiment for a `dim`-dimensional problem
pub fn max_nfc_for_dimension(dim: usize) -> usize {
	MAX_NFC_PER_DIM * dim
}

/// First minimum of `v`; a NaN anywhere wins, so it is never hidden
/// behind a finite value.
pub(crate) fn argmin(v: &Array1<f64>) -> (usize, f64) {
	let mut best_i = 0usize;
	let mut best_v = v[0];
	for (i, &val) in v.iter().enumerate() {
		if val.is_nan() {
			return (i, val);
		}
		if val < best_v {
			best_v = val;
			best_i = i;
		}
	}
	(best_i, best_v)
}

fn check_common(
	dim: usize,
	np: usize,
	cr: f64,
	scale_name: &str,
	scale: f64,
	init_bounds: (f64, f64),
) -> Result<()> {
	if dim == 0 {
		return Err(OptimError::InvalidConfiguration("dimension must be at least 1".into()));
	}
	if np < MIN_POPULATION {
		return Err(OptimError::InvalidConfiguration(format!(
			"population size {} is too small: 3 distinct donors need at least {} members",
			np, MIN_POPULATION
		)));
	}
	if !cr.is_finite() || !(0.0..=1.0).contains(&cr) {
		return Err(OptimError::InvalidConfiguration(format!(
			"crossover probability must be in [0, 1], got {}",
			cr
		)));
	}
	if !scale.is_finite() {
		return Err(OptimError::InvalidConfiguration(format!(
			"{} must be finite, got {}",
			scale_name, scale
		)));
	}
	let (lo, hi) = init_bounds;
	if !lo.is_finite() || !hi.is_finite() || lo >= hi {
		return Err(OptimError::InvalidConfiguration(format!(
			"initialization bounds must satisfy lower < upper, got ({}, {})",
			lo, hi
		)));
	}
	Ok(())
}

pub(crate) fn make_rng(seed: Option<u64>) -> StdRng {
	match seed {
		Some(s) => StdRng::seed_from_u64(s),
		None => {
			let mut thread_rng = rand::rng();
			StdRng::from_rng(&mut thread_rng)
		}
	}
}

/// Configuration for the Differential Evolution optimizer
#[derive(Debug, Clone, PartialEq)]
pub struct DEConfig {
	/// Population size, at least 4
	pub np: usize,
	/// Per-coordinate crossover probability in [0, 1]
	pub cr: f64,
	/// Differential weight
	pub f: f64,
	/// Evaluation budget, initialization excluded
	pub max_nfc: usize,
	/// Hyper-cube the initial population is drawn from
	pub init_bounds: (f64, f64),
	pub seed: Option<u64>,
}

impl Default for DEConfig {
	fn default() -> Self {
		Self { np: 100, cr: 0.9, f: 0.8, max_nfc: 3000, init_bounds: INIT_BOUNDS, seed: None }
	}
}

impl DEConfig {
	pub fn validate(&self, dim: usize) -> Result<()> {
		check_common(dim, self.np, self.cr, "differential weight F", self.f, self.init_bounds)
	}
}

/// Fluent builder for `DEConfig`.
#[derive(Default)]
pub struct DEConfigBuilder {
	cfg: DEConfig,
}
impl DEConfigBuilder {
	pub fn new() -> Self {
		Self { cfg: DEConfig::default() }
	}
	pub fn np(mut self, v: usize) -> Self {
		self.cfg.np = v;
		self
	}
	pub fn cr(mut self, v: f64) -> Self {
		self.cfg.cr = v;
		self
	}
	pub fn f(mut self, v: f64) -> Self {
		self.cfg.f = v;
		self
	}
	pub fn max_nfc(mut self, v: usize) -> Self {
		self.cfg.max_nfc = v;
		self
	}
	pub fn init_bounds(mut self, lower: f64, upper: f64) -> Self {
		self.cfg.init_bounds = (lower, upper);
		self
	}
	pub fn seed(mut self, v: u64) -> Self {
		self.cfg.seed = Some(v);
		self
	}
	pub fn build(self) -> DEConfig {
		self.cfg
	}
}

/// Configuration for the GA-style optimizer
#[derive(Debug, Clone, PartialEq)]
pub struct GAConfig {
	/// Population size, at least 4
	pub np: usize,
	/// Per-coordinate crossover probability in [0, 1]
	pub cr: f64,
	/// Scaling of the differential term, usually much smaller than 1
	pub pm: f64,
	/// Evaluation budget, initialization excluded
	pub max_nfc: usize,
	/// Hyper-cube the initial population is drawn from
	pub init_bounds: (f64, f64),
	pub seed: Option<u64>,
}

impl Default for GAConfig {
	fn default() -> Self {
		Self { np: 100, cr: 0.9, pm: 0.01, max_nfc: 3000, init_bounds: INIT_BOUNDS, seed: None }
	}
}

impl GAConfig {
	pub fn validate(&self, dim: usize) -> Result<()> {
		check_common(dim, self.np, self.cr, "mutation scale pm", self.pm, self.init_bounds)
	}
}

/// Fluent builder for `GAConfig`.
#[derive(Default)]
pub struct GAConfigBuilder {
	cfg: GAConfig,
}
impl GAConfigBuilder {
	pub fn new() -> Self {
		Self { cfg: GAConfig::default() }
	}
	pub fn np(mut self, v: usize) -> Self {
		self.cfg.np = v;
		self
	}
	pub fn cr(mut self, v: f64) -> Self {
		self.cfg.cr = v;
		self
	}
	pub fn pm(mut self, v: f64) -> Self {
		self.cfg.pm = v;
		self
	}
	pub fn max_nfc(mut self, v: usize) -> Self {
		self.cfg.max_nfc = v;
		self
	}
	pub fn init_bounds(mut self, lower: f64, upper: f64) -> Self {
		self.cfg.init_bounds = (lower, upper);
		self
	}
	pub fn seed(mut self, v: u64) -> Self {
		self.cfg.seed = Some(v);
		self
	}
	pub fn build(self) -> GAConfig {
		self.cfg
	}
}

/// Information passed to the callback after each generation
#[derive(Debug, Clone, Copy)]
pub struct GenerationInfo {
	/// 1-based generation number
	pub generation: usize,
	/// Budget consumed so far
	pub nfc: usize,
	/// Best fitness in the population, the value appended to the trace
	pub best_f: f64,
	/// Replacements performed during the generation
	pub accepted: usize,
}

/// Per-generation observer
pub type GenerationCallback = Box<dyn FnMut(&GenerationInfo) + Send>;

/// Result of an optimizer run
#[derive(Clone)]
pub struct EvoReport {
	pub trace: ConvergenceTrace,
	pub best_x: Array1<f64>,
	pub best_f: f64,
	/// Budget counter at exit, initialization excluded
	pub nfc: usize,
	/// Objective calls including initialization
	pub nfev: usize,
	pub generations: usize,
	pub population: Array2<f64>,
	pub fitness: Array1<f64>,
}

impl EvoReport {
	pub(crate) fn from_population(
		pop: Population,
		trace: ConvergenceTrace,
		nfc: usize,
		generations: usize,
	) -> Self {
		let np = pop.len();
		let (best_idx, best_f) = pop.best();
		let best_x = pop.member(best_idx).to_owned();
		let (population, fitness) = pop.into_parts();
		Self { trace, best_x, best_f, nfc, nfev: nfc + np, generations, population, fitness }
	}
}

impl fmt::Debug for EvoReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("EvoReport")
			.field("trace", &format!("len={}", self.trace.len()))
			.field("best_x", &format!("len={}", self.best_x.len()))
			.field("best_f", &self.best_f)
			.field("nfc", &self.nfc)
			.field("nfev", &self.nfev)
			.field("generations", &self.generations)
			.field(
				"population",
				&format!("{}x{}", self.population.nrows(), self.population.ncols()),
			)
			.finish()
	}
}

/// Differential Evolution optimizer (rand/1/bin, immediate replacement)
pub struct DifferentialEvolution<'a, F>
where
	F: Fn(&Array1<f64>) -> f64,
{
	func: &'a F,
	dim: usize,
	config: DEConfig,
	callback: Option<GenerationCallback>,
}

impl<'a, F> DifferentialEvolution<'a, F>
where
	F: Fn(&Array1<f64>) -> f64,
{
	/// Create a new DE optimizer minimizing `func` over `dim` coordinates
	pub fn new(func: &'a F, dim: usize, config: DEConfig) -> Self {
		Self { func, dim, config, callback: None }
	}

	/// Mutable access to configuration
	pub fn config_mut(&mut self) -> &mut DEConfig {
		&mut self.config
	}

	/// Observe every completed generation
	pub fn with_callback(mut self, cb: GenerationCallback) -> Self {
		self.callback = Some(cb);
		self
	}

	/// Run with an RNG seeded from `config.seed` (or the thread RNG)
	pub fn solve(&mut self) -> Result<EvoReport> {
		let mut rng = make_rng(self.config.seed);
		self.solve_with_rng(&mut rng)
	}

	/// Run the optimization drawing every random number from `rng`
	pub fn solve_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<EvoReport> {
		use crossover_binomial::binomial_crossover;
		use mutant_rand1::mutant_rand1;

		self.config.validate(self.dim)?;
		let DEConfig { np, cr, f, max_nfc, init_bounds, .. } = self.config;

		log::info!(
			"DE start: dim={}, np={}, cr={:.3}, f={:.3}, max_nfc={}",
			self.dim,
			np,
			cr,
			f,
			max_nfc
		);

		// initialization is not charged to the budget
		let mut pop = Population::init_random(np, self.dim, init_bounds, self.func, rng);
		let mut nfc: usize = 0;
		let mut trace = ConvergenceTrace::with_capacity(max_nfc.div_ceil(np));
		let mut generation = 0;

		while nfc < max_nfc {
			generation += 1;
			let mut accepted = 0;

			for i in 0..np {
				// donors are read before slot i is written
				let mutant = mutant_rand1(i, pop.members(), f, rng);
				let target = pop.member(i).to_owned();
				let trial = binomial_crossover(&target, &mutant, cr, rng);

				let trial_f = (self.func)(&trial);
				nfc += 1;
				if trial_f < pop.fitness()[i] {
					pop.replace(i, trial.view(), trial_f);
					accepted += 1;
				}

				if nfc >= max_nfc {
					break;
				}
			}

			let best_f = pop.best_fitness();
			trace.push(best_f);
			log::debug!(
				"DE gen {:4}  nfc={}  best_f={:.6e}  accepted={}/{}",
				generation,
				nfc,
				best_f,
				accepted,
				np
			);
			if let Some(ref mut cb) = self.callback {
				cb(&GenerationInfo { generation, nfc, best_f, accepted });
			}
		}

		let report = EvoReport::from_population(pop, trace, nfc, generation);
		log::info!(
			"DE finished: generations={}, nfc={}, best_f={:.6e}",
			report.generations,
			report.nfc,
			report.best_f
		);
		Ok(report)
	}
}
