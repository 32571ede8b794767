//! Environment variable utilities for evobench
//!
//! This module resolves the EVOBENCH_DIR variable that points to the project
//! root, and the generated-data directories below it.

use crate::constants::{DATA_GENERATED, EVOBENCH_DIR, RESULTS};
use std::env;
use std::path::{Path, PathBuf};

/// Error type for environment variable issues
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error(
        "EVOBENCH_DIR environment variable is not set. Please set it to the project root directory (e.g., export EVOBENCH_DIR=/path/to/evobench)"
    )]
    EvobenchDirNotSet,

    #[error("EVOBENCH_DIR points to a non-existent directory: {0}")]
    EvobenchDirNotFound(PathBuf),

    #[error("Failed to create {0}: {1}")]
    DirectoryCreationFailed(PathBuf, std::io::Error),
}

/// Validate a candidate project root taken from EVOBENCH_DIR
pub fn evobench_dir_from(value: Option<&str>) -> Result<PathBuf, EnvError> {
    let value = value.filter(|v| !v.is_empty()).ok_or(EnvError::EvobenchDirNotSet)?;
    let path = PathBuf::from(value);
    if !path.is_dir() {
        return Err(EnvError::EvobenchDirNotFound(path));
    }
    Ok(path)
}

/// Get the EVOBENCH_DIR environment variable and validate it exists
///
/// # Errors
///
/// Returns an error if:
/// - EVOBENCH_DIR is not set
/// - EVOBENCH_DIR points to a non-existent directory
///
/// # Example
///
/// ```no_run
/// use evobench_env::env_utils::get_evobench_dir;
///
/// let root = get_evobench_dir()?;
/// println!("evobench directory: {}", root.display());
/// # Ok::<(), evobench_env::env_utils::EnvError>(())
/// ```
pub fn get_evobench_dir() -> Result<PathBuf, EnvError> {
    let value = env::var(EVOBENCH_DIR).ok();
    evobench_dir_from(value.as_deref())
}

fn ensure_dir(path: PathBuf) -> Result<PathBuf, EnvError> {
    if !path.exists() {
        std::fs::create_dir_all(&path)
            .map_err(|e| EnvError::DirectoryCreationFailed(path.clone(), e))?;
    }
    Ok(path)
}

/// `<root>/data_generated`, created if necessary
pub fn data_generated_dir_in(root: &Path) -> Result<PathBuf, EnvError> {
    ensure_dir(root.join(DATA_GENERATED))
}

/// `<root>/data_generated/results`, created if necessary
pub fn results_dir_in(root: &Path) -> Result<PathBuf, EnvError> {
    ensure_dir(data_generated_dir_in(root)?.join(RESULTS))
}

/// Get the path to the data_generated directory, creating it if necessary
pub fn get_data_generated_dir() -> Result<PathBuf, EnvError> {
    data_generated_dir_in(&get_evobench_dir()?)
}

/// Get the path to the results subdirectory within data_generated
///
/// This is the default destination of the experiment tables and plots.
pub fn get_results_dir() -> Result<PathBuf, EnvError> {
    results_dir_in(&get_evobench_dir()?)
}

/// Check if EVOBENCH_DIR is properly configured and print helpful information
///
/// # Example
///
/// ```no_run
/// use evobench_env::env_utils::check_evobench_env;
///
/// if let Err(e) = check_evobench_env() {
///     eprintln!("Environment setup error: {}", e);
///     std::process::exit(1);
/// }
/// ```
pub fn check_evobench_env() -> Result<(), EnvError> {
    let root = get_evobench_dir()?;
    let data_generated = get_data_generated_dir()?;

    println!("✓ EVOBENCH_DIR: {}", root.display());
    println!("✓ Data directory: {}", data_generated.display());

    Ok(())
}
