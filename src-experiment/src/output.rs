use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use crate::stats::Summary;
use crate::sweep::{Algorithm, CellResult, ExperimentResults};
use crate::Result;

/// `dimension_{D}_errors.csv` for every dimension of the sweep
pub fn write_dimension_tables(
    results: &ExperimentResults,
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    create_dir_all(output_dir)?;
    let mut paths = Vec::with_capacity(results.config.dimensions.len());
    for &dim in &results.config.dimensions {
        let path = output_dir.join(format!("dimension_{}_errors.csv", dim));
        let mut writer = csv::Writer::from_path(&path)?;
        for row in results.summaries_for_dimension(dim) {
            writer.serialize(row)?;
        }
        writer.flush()?;
        log::info!("Saved errors for dimension {} to {}", dim, path.display());
        paths.push(path);
    }
    Ok(paths)
}

/// `convergence_{function}_{D}.csv` with the run-averaged curves of both algorithms
pub fn write_convergence_csv(cell: &CellResult, output_dir: &Path) -> Result<PathBuf> {
    create_dir_all(output_dir)?;
    let path = output_dir.join(format!("convergence_{}_{}.csv", cell.function, cell.dim));
    let de = cell.mean_curve(Algorithm::De);
    let ga = cell.mean_curve(Algorithm::Ga);
    let axis = if de.len() >= ga.len() { de.nfc_axis(cell.np) } else { ga.nfc_axis(cell.np) };

    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record(["nfc", "de_mean", "ga_mean"])?;
    for (k, nfc) in axis.into_iter().enumerate() {
        let cell_value = |curve: &[f64]| curve.get(k).map(|v| v.to_string()).unwrap_or_default();
        let row = [nfc.to_string(), cell_value(de.as_slice()), cell_value(ga.as_slice())];
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(path)
}

/// Plain-text table of the summaries for one dimension
pub fn format_summary_table(dim: usize, rows: &[Summary]) -> String {
    let mut out = format!("Errors Data, for Dimension {} =>\n", dim);
    out.push_str(&format!(
        "{:<26} {:>3} {:>9} {:>14} {:>14} {:>14}\n",
        "Benchmark", "D", "Algorithm", "Mean Err", "Best Err", "Std Err"
    ));
    for r in rows {
        out.push_str(&format!(
            "{:<26} {:>3} {:>9} {:>14.6e} {:>14.6e} {:>14.6e}\n",
            r.benchmark,
            r.dim,
            r.algorithm.to_string(),
            r.mean_err,
            r.best_err,
            r.std_err
        ));
    }
    out
}

/// Write every table, convergence CSV and (optionally) HTML plot of `results`
pub fn persist_results(
    results: &ExperimentResults,
    output_dir: &Path,
    plots: bool,
) -> Result<Vec<PathBuf>> {
    let mut paths = write_dimension_tables(results, output_dir)?;
    for cell in &results.cells {
        paths.push(write_convergence_csv(cell, output_dir)?);
        if plots {
            paths.push(crate::plot::write_convergence_plot(cell, output_dir)?);
        }
    }
    Ok(paths)
}
