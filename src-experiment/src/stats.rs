use evobench_de::ConvergenceTrace;
use serde::Serialize;

use crate::sweep::Algorithm;

/// Row of the per-dimension error table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    #[serde(rename = "Benchmark")]
    pub benchmark: String,
    #[serde(rename = "D")]
    pub dim: usize,
    #[serde(rename = "Algorithm")]
    pub algorithm: Algorithm,
    /// Mean of the run-averaged convergence curve
    #[serde(rename = "Mean Err")]
    pub mean_err: f64,
    /// Lowest value reached by any run
    #[serde(rename = "Best Err")]
    pub best_err: f64,
    /// Population standard deviation of the run-averaged curve
    #[serde(rename = "Std Err")]
    pub std_err: f64,
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Standard deviation with divisor `n`
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let m = mean(values);
    (values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64).sqrt()
}

/// Generation-wise mean over runs, cut to the shortest trace
pub fn mean_curve(traces: &[ConvergenceTrace]) -> Vec<f64> {
    let len = traces.iter().map(ConvergenceTrace::len).min().unwrap_or(0);
    (0..len)
        .map(|k| traces.iter().map(|t| t.as_slice()[k]).sum::<f64>() / traces.len() as f64)
        .collect()
}

/// Lowest value over every run
pub fn best_over_runs(traces: &[ConvergenceTrace]) -> f64 {
    traces.iter().flat_map(|t| t.values()).fold(f64::INFINITY, f64::min)
}

pub fn summarize(
    benchmark: &str,
    dim: usize,
    algorithm: Algorithm,
    traces: &[ConvergenceTrace],
) -> Summary {
    let curve = mean_curve(traces);
    Summary {
        benchmark: benchmark.to_string(),
        dim,
        algorithm,
        mean_err: mean(&curve),
        best_err: best_over_runs(traces),
        std_err: std_dev(&curve),
    }
}
