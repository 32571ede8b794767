use std::path::{Path, PathBuf};

use ndarray::Array1;

use crate::{
    ConvergenceRecorder, DEConfig, DifferentialEvolution, EvoReport, GAConfig, GeneticAlgorithm,
    Result,
};

/// Run differential evolution and save its per-generation record as CSV
pub fn run_recorded_differential_evolution<F>(
    run_name: &str,
    func: F,
    dim: usize,
    config: DEConfig,
    output_dir: impl AsRef<Path>,
) -> Result<(EvoReport, PathBuf)>
where
    F: Fn(&Array1<f64>) -> f64,
{
    let recorder = ConvergenceRecorder::new(run_name);
    let mut de =
        DifferentialEvolution::new(&func, dim, config).with_callback(recorder.create_callback());
    let report = de.solve()?;
    let csv_path = recorder.save_to_csv(output_dir)?;
    Ok((report, csv_path))
}

/// Run the GA-style optimizer and save its per-generation record as CSV
pub fn run_recorded_genetic_algorithm<F>(
    run_name: &str,
    func: F,
    dim: usize,
    config: GAConfig,
    output_dir: impl AsRef<Path>,
) -> Result<(EvoReport, PathBuf)>
where
    F: Fn(&Array1<f64>) -> f64,
{
    let recorder = ConvergenceRecorder::new(run_name);
    let mut ga =
        GeneticAlgorithm::new(&func, dim, config).with_callback(recorder.create_callback());
    let report = ga.solve()?;
    let csv_path = recorder.save_to_csv(output_dir)?;
    Ok((report, csv_path))
}
