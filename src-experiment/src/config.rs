use std::path::Path;

use evobench_de::{DEConfig, GAConfig, INIT_BOUNDS, MAX_NFC_PER_DIM};
use evobench_testfunctions::{TestFunction, benchmark_suite, canonical_name, get_function};
use serde::{Deserialize, Serialize};

use crate::{ExperimentError, Result};

/// Parameters of a full DE vs GA sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Population size shared by both optimizers
    pub np: usize,
    /// Crossover probability shared by both optimizers
    pub cr: f64,
    /// DE differential weight
    pub f: f64,
    /// GA mutation scale
    pub pm: f64,
    pub dimensions: Vec<usize>,
    /// Independent repetitions per (function, dimension)
    pub runs: usize,
    /// Evaluation budget per search dimension
    pub nfc_per_dim: usize,
    /// Benchmark names; empty means the whole suite
    pub functions: Vec<String>,
    /// Base seed; each repetition derives its own
    pub seed: Option<u64>,
    /// Run repetitions concurrently
    pub parallel: bool,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            np: 100,
            cr: 0.9,
            f: 0.8,
            pm: 0.01,
            dimensions: vec![2, 10, 20],
            runs: 32,
            nfc_per_dim: MAX_NFC_PER_DIM,
            functions: Vec::new(),
            seed: None,
            parallel: true,
        }
    }
}

impl ExperimentConfig {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn max_nfc(&self, dim: usize) -> usize {
        self.nfc_per_dim * dim
    }

    pub fn de_config(&self, dim: usize) -> DEConfig {
        DEConfig {
            np: self.np,
            cr: self.cr,
            f: self.f,
            max_nfc: self.max_nfc(dim),
            init_bounds: INIT_BOUNDS,
            seed: None,
        }
    }

    pub fn ga_config(&self, dim: usize) -> GAConfig {
        GAConfig {
            np: self.np,
            cr: self.cr,
            pm: self.pm,
            max_nfc: self.max_nfc(dim),
            init_bounds: INIT_BOUNDS,
            seed: None,
        }
    }

    /// Selected benchmarks in suite order, with their canonical names
    pub fn resolved_functions(&self) -> Result<Vec<(&'static str, TestFunction)>> {
        if self.functions.is_empty() {
            return Ok(benchmark_suite());
        }
        self.functions
            .iter()
            .map(|name| {
                let unknown = || ExperimentError::UnknownFunction(name.clone());
                let canonical = canonical_name(name).ok_or_else(unknown)?;
                let func = get_function(canonical).ok_or_else(unknown)?;
                Ok((canonical, func))
            })
            .collect()
    }

    /// Check the whole sweep before running anything
    pub fn validate(&self) -> Result<()> {
        if self.runs == 0 {
            return Err(ExperimentError::InvalidExperiment("runs must be at least 1".into()));
        }
        if self.dimensions.is_empty() {
            return Err(ExperimentError::InvalidExperiment("no dimension selected".into()));
        }
        if self.nfc_per_dim == 0 {
            return Err(ExperimentError::InvalidExperiment(
                "nfc_per_dim must be at least 1".into(),
            ));
        }
        self.resolved_functions()?;
        for &dim in &self.dimensions {
            self.de_config(dim).validate(dim)?;
            self.ga_config(dim).validate(dim)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_sweep() {
        let cfg = ExperimentConfig::default();
        assert_eq!(cfg.max_nfc(2), 6000);
        assert_eq!(cfg.max_nfc(20), 60_000);
        assert_eq!(cfg.resolved_functions().unwrap().len(), 8);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_unknown_function_rejected() {
        let cfg = ExperimentConfig { functions: vec!["sphere".into()], ..Default::default() };
        assert!(matches!(cfg.validate(), Err(ExperimentError::UnknownFunction(_))));
    }

    #[test]
    fn test_invalid_population_rejected() {
        let cfg = ExperimentConfig { np: 3, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(ExperimentError::Optim(_))));
        let cfg = ExperimentConfig { dimensions: vec![0], ..Default::default() };
        assert!(cfg.validate().is_err());
        let cfg = ExperimentConfig { runs: 0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_partial_json() {
        let cfg: ExperimentConfig =
            serde_json::from_str(r#"{"np": 20, "dimensions": [2], "functions": ["ackleys"]}"#)
                .unwrap();
        assert_eq!(cfg.np, 20);
        assert_eq!(cfg.runs, 32);
        assert_eq!(cfg.resolved_functions().unwrap()[0].0, "ackley");
    }
}
