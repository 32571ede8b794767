use crate::{ConvergenceTrace, DEConfig, DifferentialEvolution, EvoReport, Result};
use ndarray::Array1;

/// Convenience function with the experiment driver's argument order:
/// - `func`: objective function mapping x -> f(x), minimized
/// - `dim`: search dimension
/// - `np`, `cr`, `f`: population size, crossover probability, differential weight
/// - `max_nfc`: evaluation budget (initialization excluded)
///
/// Uses a fresh RNG seeded from the thread RNG.
pub fn differential_evolution<F>(
	func: &F,
	dim: usize,
	np: usize,
	cr: f64,
	f: f64,
	max_nfc: usize,
) -> Result<ConvergenceTrace>
where
	F: Fn(&Array1<f64>) -> f64,
{
	let config = DEConfig { np, cr, f, max_nfc, ..DEConfig::default() };
	run_de(func, dim, config).map(|report| report.trace)
}

/// Run DE with a full configuration and return the complete report
pub fn run_de<F>(func: &F, dim: usize, config: DEConfig) -> Result<EvoReport>
where
	F: Fn(&Array1<f64>) -> f64,
{
	let mut de = DifferentialEvolution::new(func, dim, config);
	de.solve()
}
