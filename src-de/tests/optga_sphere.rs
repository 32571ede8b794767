use evobench_de::{GAConfigBuilder, GeneticAlgorithm, genetic_algorithm, run_ga};
use ndarray::Array1;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn sphere(x: &Array1<f64>) -> f64 {
    x.iter().map(|&v| v * v).sum()
}

#[test]
fn test_ga_sphere_2d_improves() {
    let config = GAConfigBuilder::new().np(20).cr(0.9).pm(0.5).max_nfc(2000).seed(31).build();
    let report = run_ga(&sphere, 2, config).unwrap();
    assert_eq!(report.trace.len(), 100);
    assert!(report.trace.is_non_increasing());
    assert!(report.trace.last().unwrap() < report.trace.first().unwrap());
}

#[test]
fn test_ga_default_scale_is_non_increasing() {
    let trace = genetic_algorithm(&sphere, 10, 100, 0.9, 0.01, 30_000).unwrap();
    assert_eq!(trace.len(), 300);
    assert!(trace.is_non_increasing());
}

#[test]
fn test_ga_fitness_cache_matches_population() {
    let config = GAConfigBuilder::new().np(10).pm(0.3).max_nfc(500).seed(11).build();
    let report = run_ga(&sphere, 3, config).unwrap();
    for (i, row) in report.population.rows().into_iter().enumerate() {
        assert_eq!(report.fitness[i], sphere(&row.to_owned()));
    }
    assert_eq!(report.nfev, report.nfc + 10);
}

#[test]
fn test_ga_deterministic_with_same_rng() {
    let config = GAConfigBuilder::new().np(12).pm(0.2).max_nfc(360).build();
    let run = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        GeneticAlgorithm::new(&sphere, 4, config.clone()).solve_with_rng(&mut rng).unwrap()
    };
    let a = run(17);
    let b = run(17);
    assert_eq!(
        a.trace.values().map(f64::to_bits).collect::<Vec<_>>(),
        b.trace.values().map(f64::to_bits).collect::<Vec<_>>()
    );
    assert_eq!(a.population, b.population);
}
