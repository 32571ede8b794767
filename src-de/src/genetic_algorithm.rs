use ndarray::{Array1, Array2};
use rand::Rng;

use crate::crossover_binomial::binomial_crossover;
use crate::mutant_rand1::mutant_rand1;
use crate::{
	ConvergenceTrace, EvoReport, GAConfig, GenerationCallback, GenerationInfo, Population, Result,
	make_rng,
};

/// GA-style optimizer: generational offspring, per-slot greedy replacement.
///
/// Every generation builds all `np` offspring from the current population,
/// evaluates them as one batch (the budget grows by `np` at once) and only
/// then replaces each slot whose offspring is strictly better. The budget
/// may therefore overshoot `max_nfc` by up to `np - 1`.
pub struct GeneticAlgorithm<'a, F>
where
	F: Fn(&Array1<f64>) -> f64,
{
	func: &'a F,
	dim: usize,
	config: GAConfig,
	callback: Option<GenerationCallback>,
}

impl<'a, F> GeneticAlgorithm<'a, F>
where
	F: Fn(&Array1<f64>) -> f64,
{
	pub fn new(func: &'a F, dim: usize, config: GAConfig) -> Self {
		Self { func, dim, config, callback: None }
	}

	pub fn config_mut(&mut self) -> &mut GAConfig {
		&mut self.config
	}

	pub fn with_callback(mut self, cb: GenerationCallback) -> Self {
		self.callback = Some(cb);
		self
	}

	pub fn solve(&mut self) -> Result<EvoReport> {
		let mut rng = make_rng(self.config.seed);
		self.solve_with_rng(&mut rng)
	}

	pub fn solve_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<EvoReport> {
		self.config.validate(self.dim)?;
		let GAConfig { np, cr, pm, max_nfc, init_bounds, .. } = self.config;

		log::info!(
			"GA start: dim={}, np={}, cr={:.3}, pm={:.3}, max_nfc={}",
			self.dim,
			np,
			cr,
			pm,
			max_nfc
		);

		let mut pop = Population::init_random(np, self.dim, init_bounds, self.func, rng);
		let mut nfc: usize = 0;
		let mut trace = ConvergenceTrace::with_capacity(max_nfc.div_ceil(np));
		let mut generation = 0;

		while nfc < max_nfc {
			generation += 1;

			let mut offspring = Array2::<f64>::zeros((np, self.dim));
			for i in 0..np {
				let donor = mutant_rand1(i, pop.members(), pm, rng);
				let child = binomial_crossover(&pop.member(i).to_owned(), &donor, cr, rng);
				offspring.row_mut(i).assign(&child);
			}

			let offspring_f: Array1<f64> =
				offspring.rows().into_iter().map(|row| (self.func)(&row.to_owned())).collect();
			nfc += np;

			let mut accepted = 0;
			for i in 0..np {
				if offspring_f[i] < pop.fitness()[i] {
					pop.replace(i, offspring.row(i), offspring_f[i]);
					accepted += 1;
				}
				// the batch is already evaluated; this only cuts replacement short
				if nfc >= max_nfc {
					break;
				}
			}

			let best_f = pop.best_fitness();
			trace.push(best_f);
			log::debug!(
				"GA gen {:4}  nfc={}  best_f={:.6e}  accepted={}/{}",
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
			"GA finished: generations={}, nfc={}, best_f={:.6e}",
			report.generations,
			report.nfc,
			report.best_f
		);
		Ok(report)
	}
}

/// Convenience function with the experiment driver's argument order,
/// `pm` taking the place of DE's `F`.
pub fn genetic_algorithm<F>(
	func: &F,
	dim: usize,
	np: usize,
	cr: f64,
	pm: f64,
	max_nfc: usize,
) -> Result<ConvergenceTrace>
where
	F: Fn(&Array1<f64>) -> f64,
{
	let config = GAConfig { np, cr, pm, max_nfc, ..GAConfig::default() };
	run_ga(func, dim, config).map(|report| report.trace)
}

/// Run the GA with a full configuration and return the complete report
pub fn run_ga<F>(func: &F, dim: usize, config: GAConfig) -> Result<EvoReport>
where
	F: Fn(&Array1<f64>) -> f64,
{
	let mut ga = GeneticAlgorithm::new(func, dim, config);
	ga.solve()
}
