use std::fs::create_dir_all;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use crate::{GenerationCallback, GenerationInfo, Result};

/// Records optimization progress via per-generation callbacks
#[derive(Debug, Clone)]
pub struct ConvergenceRecorder {
    /// Run name (used for CSV filename)
    name: String,
    /// Shared records storage
    records: Arc<Mutex<Vec<GenerationRecord>>>,
}

/// A single generation record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRecord {
    pub generation: usize,
    /// Budget consumed at the end of the generation
    pub nfc: usize,
    /// Best fitness in the population
    pub best_f: f64,
    /// Whether this generation improved on the previous best
    pub is_improvement: bool,
}

fn lock(records: &Mutex<Vec<GenerationRecord>>) -> MutexGuard<'_, Vec<GenerationRecord>> {
    records.lock().unwrap_or_else(PoisonError::into_inner)
}

impl ConvergenceRecorder {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), records: Arc::new(Mutex::new(Vec::new())) }
    }

    /// Create a callback that appends one record per generation
    pub fn create_callback(&self) -> GenerationCallback {
        let records = self.records.clone();
        Box::new(move |info: &GenerationInfo| {
            let mut guard = lock(&records);
            let is_improvement = match guard.last() {
                Some(prev) => info.best_f < prev.best_f,
                None => true,
            };
            guard.push(GenerationRecord {
                generation: info.generation,
                nfc: info.nfc,
                best_f: info.best_f,
                is_improvement,
            });
        })
    }

    /// Save all records to `<output_dir>/<name>.csv` and return the path
    pub fn save_to_csv(&self, output_dir: impl AsRef<Path>) -> Result<PathBuf> {
        let output_dir = output_dir.as_ref();
        create_dir_all(output_dir)?;
        let path = output_dir.join(format!("{}.csv", self.name));

        let mut writer = csv::Writer::from_path(&path)?;
        let guard = lock(&self.records);
        if guard.is_empty() {
            writer.write_record(["generation", "nfc", "best_f", "is_improvement"])?;
        }
        for record in guard.iter() {
            writer.serialize(record)?;
        }
        writer.flush()?;
        log::debug!("saved {} generation records to {}", guard.len(), path.display());
        Ok(path)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get_records(&self) -> Vec<GenerationRecord> {
        lock(&self.records).clone()
    }

    pub fn num_generations(&self) -> usize {
        lock(&self.records).len()
    }

    pub fn clear(&self) {
        lock(&self.records).clear();
    }
}
