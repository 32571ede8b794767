use serde::{Deserialize, Serialize};

/// Best fitness in the population after each completed generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConvergenceTrace(Vec<f64>);

impl ConvergenceTrace {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(generations: usize) -> Self {
        Self(Vec::with_capacity(generations))
    }

    pub(crate) fn push(&mut self, best_f: f64) {
        self.0.push(best_f);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<f64> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.0.last().copied()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }

    /// `trace[k + 1] <= trace[k]` for every k
    pub fn is_non_increasing(&self) -> bool {
        self.0.windows(2).all(|w| w[1] <= w[0])
    }

    /// Evaluation count at the start of each generation (`k * np`),
    /// the x axis used for convergence plots.
    pub fn nfc_axis(&self, np: usize) -> Vec<usize> {
        (0..self.0.len()).map(|k| k * np).collect()
    }
}

impl From<Vec<f64>> for ConvergenceTrace {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl AsRef<[f64]> for ConvergenceTrace {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}
