use std::cell::Cell;

use evobench_de::{
    DEConfigBuilder, DifferentialEvolution, EvoReport, GAConfigBuilder, GeneticAlgorithm,
};
use ndarray::Array1;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn sphere(x: &Array1<f64>) -> f64 {
    x.iter().map(|&v| v * v).sum()
}

/// DE run where the `nan_call`-th objective call (0-based) returns NaN
fn de_with_nan_at(nan_call: usize, seed: u64) -> EvoReport {
    let calls = Cell::new(0usize);
    let objective = |x: &Array1<f64>| {
        let k = calls.get();
        calls.set(k + 1);
        if k == nan_call { f64::NAN } else { sphere(x) }
    };
    let config = DEConfigBuilder::new().np(10).max_nfc(50).build();
    let mut rng = StdRng::seed_from_u64(seed);
    DifferentialEvolution::new(&objective, 2, config).solve_with_rng(&mut rng).unwrap()
}

#[test]
fn test_nan_member_reported_from_any_slot() {
    // initialization evaluates members in slot order
    let first = de_with_nan_at(0, 11);
    let later = de_with_nan_at(3, 11);

    assert_eq!(first.trace.len(), 5);
    assert_eq!(first.trace.len(), later.trace.len());
    assert!(first.trace.values().all(f64::is_nan), "trace={:?}", first.trace);
    assert!(later.trace.values().all(f64::is_nan), "trace={:?}", later.trace);
    assert!(first.best_f.is_nan());
    assert!(later.best_f.is_nan());
    // a NaN slot is never replaced: nothing compares below it
    assert!(first.fitness[0].is_nan());
    assert!(later.fitness[3].is_nan());
}

#[test]
fn test_nan_trials_never_accepted_de() {
    let np = 8;
    let calls = Cell::new(0usize);
    let objective = |x: &Array1<f64>| {
        let k = calls.get();
        calls.set(k + 1);
        if k < np { sphere(x) } else { f64::NAN }
    };

    let initial = {
        let config = DEConfigBuilder::new().np(np).max_nfc(0).build();
        let mut rng = StdRng::seed_from_u64(5);
        DifferentialEvolution::new(&sphere, 3, config).solve_with_rng(&mut rng).unwrap()
    };

    let config = DEConfigBuilder::new().np(np).max_nfc(80).build();
    let mut rng = StdRng::seed_from_u64(5);
    let report =
        DifferentialEvolution::new(&objective, 3, config).solve_with_rng(&mut rng).unwrap();

    assert_eq!(report.population, initial.population);
    assert_eq!(report.fitness, initial.fitness);
    assert_eq!(report.trace.len(), 10);
    assert!(report.trace.values().all(|v| v == initial.best_f));
}

#[test]
fn test_nan_trials_never_accepted_ga() {
    let np = 8;
    let calls = Cell::new(0usize);
    let objective = |x: &Array1<f64>| {
        let k = calls.get();
        calls.set(k + 1);
        if k < np { sphere(x) } else { f64::NAN }
    };

    let initial = {
        let config = GAConfigBuilder::new().np(np).max_nfc(0).build();
        let mut rng = StdRng::seed_from_u64(6);
        GeneticAlgorithm::new(&sphere, 3, config).solve_with_rng(&mut rng).unwrap()
    };

    let config = GAConfigBuilder::new().np(np).max_nfc(40).build();
    let mut rng = StdRng::seed_from_u64(6);
    let report = GeneticAlgorithm::new(&objective, 3, config).solve_with_rng(&mut rng).unwrap();

    assert_eq!(report.population, initial.population);
    assert_eq!(report.fitness, initial.fitness);
    assert!(report.trace.values().all(|v| v == initial.best_f));
}
