//! Benchmark objectives for the DE / GA comparison
//!
//! Eight continuous functions of a vector of any dimension D >= 1:
//!
//! - **Unimodal**: high-conditioned elliptic, bent cigar, discus, rosenbrock
//! - **Multimodal**: ackley, weierstrass, griewank, rastrigin
//!
//! # Example
//!
//! ```rust
//! use ndarray::Array1;
//! use evobench_testfunctions::*;
//!
//! let x = Array1::from_vec(vec![0.0, 0.0]);
//! assert_eq!(bent_cigar(&x), 0.0);
//!
//! let f = get_function("rastrigin").unwrap();
//! assert!(f(&x).abs() < 1e-12);
//! ```

use ndarray::Array1;
use serde::Serialize;
use std::collections::HashMap;

pub mod functions;
pub use functions::*;

/// Objective signature shared by every benchmark
pub type TestFunction = fn(&Array1<f64>) -> f64;

/// Metadata for a test function
#[derive(Debug, Clone, Serialize)]
pub struct FunctionMetadata {
    /// Function name
    pub name: String,
    /// Usual search domain for each coordinate (min, max)
    pub bounds: (f64, f64),
    /// Known global minimum value and location pattern (per coordinate)
    pub global_minimum: Option<(f64, f64)>,
    /// Description of the function
    pub description: String,
    /// Whether the function is multimodal
    pub multimodal: bool,
}

/// The benchmark battery, in the order the experiment reports it
pub fn benchmark_suite() -> Vec<(&'static str, TestFunction)> {
    vec![
        ("high_conditioned_elliptic", high_conditioned_elliptic as TestFunction),
        ("bent_cigar", bent_cigar),
        ("discus", discus),
        ("rosenbrock", rosenbrock),
        ("ackley", ackley),
        ("weierstrass", weierstrass),
        ("griewank", griewank),
        ("rastrigin", rastrigin),
    ]
}

/// Look a benchmark up by name; accepts `-`/`_` and a trailing plural `s`
/// (`rosenbrocks`, `ackleys`, ...).
pub fn get_function(name: &str) -> Option<TestFunction> {
    let key = canonical_name(name)?;
    benchmark_suite().into_iter().find(|(n, _)| *n == key).map(|(_, f)| f)
}

/// Canonical registry name for `name`, if it denotes a benchmark
pub fn canonical_name(name: &str) -> Option<&'static str> {
    let t = name.trim().to_lowercase().replace('-', "_");
    benchmark_suite().into_iter().map(|(n, _)| n).find(|n| {
        *n == t
            || t.strip_suffix('s') == Some(*n)
            || (*n == "high_conditioned_elliptic" && t == "elliptic")
    })
}

const ZERO_AT_ORIGIN: Option<(f64, f64)> = Some((0.0, 0.0));

/// Metadata for every benchmark, keyed by name
pub fn get_function_metadata() -> HashMap<String, FunctionMetadata> {
    let entries = [
        ("high_conditioned_elliptic", (-100.0, 100.0), ZERO_AT_ORIGIN, "Scaled sphere", false),
        ("bent_cigar", (-100.0, 100.0), ZERO_AT_ORIGIN, "x_0^2 + 1e6 * rest", false),
        ("discus", (-100.0, 100.0), ZERO_AT_ORIGIN, "1e6 * x_0^2 + rest", false),
        ("rosenbrock", (-5.0, 10.0), Some((0.0, 1.0)), "Curved valley, minimum at 1", false),
        ("ackley", (-32.768, 32.768), ZERO_AT_ORIGIN, "Multimodal, exponential wells", true),
        ("weierstrass", (-0.5, 0.5), None, "Linear weights a*k, f(0) = 0", true),
        ("griewank", (-600.0, 600.0), ZERO_AT_ORIGIN, "Cosine product over a quadratic", true),
        ("rastrigin", (-5.12, 5.12), ZERO_AT_ORIGIN, "Cosine grid over a sphere", true),
    ];

    entries
        .into_iter()
        .map(|(name, bounds, global_minimum, description, multimodal)| {
            (
                name.to_string(),
                FunctionMetadata {
                    name: name.to_string(),
                    bounds,
                    global_minimum,
                    description: description.to_string(),
                    multimodal,
                },
            )
        })
        .collect()
}

/// Per-dimension bounds for `name` in `dim` dimensions, or `fallback` if unknown
pub fn get_function_bounds_vec(name: &str, dim: usize, fallback: (f64, f64)) -> Vec<(f64, f64)> {
    let bounds = canonical_name(name)
        .and_then(|n| get_function_metadata().remove(n))
        .map(|m| m.bounds)
        .unwrap_or(fallback);
    vec![bounds; dim]
}
