use evobench_experiment::output::persist_results;
use evobench_experiment::{Algorithm, ExperimentConfig, run_experiment};

fn small_config(parallel: bool) -> ExperimentConfig {
    ExperimentConfig {
        np: 10,
        dimensions: vec![2, 3],
        runs: 3,
        nfc_per_dim: 50,
        functions: vec!["ackleys".into(), "bent_cigar".into()],
        seed: Some(1234),
        parallel,
        ..Default::default()
    }
}

#[test]
fn test_small_sweep_shapes() {
    let results = run_experiment(&small_config(true)).expect("valid experiment");
    assert_eq!(results.cells.len(), 4);
    assert_eq!(results.base_seed, 1234);

    for cell in &results.cells {
        assert_eq!(cell.de_traces.len(), 3);
        assert_eq!(cell.ga_traces.len(), 3);
        let budget = 50 * cell.dim;
        for trace in cell.de_traces.iter().chain(cell.ga_traces.iter()) {
            assert_eq!(trace.len(), budget.div_ceil(10));
            assert!(trace.is_non_increasing());
        }
        // repetitions are seeded independently
        assert_ne!(cell.de_traces[0], cell.de_traces[1]);
    }
    assert_eq!(results.cells[0].function, "ackley");
    assert_eq!(results.summaries().len(), 8);
    assert!(results.summaries_for_dimension(3).iter().all(|s| s.dim == 3));
}

#[test]
fn test_parallel_matches_sequential() {
    let par = run_experiment(&small_config(true)).unwrap();
    let seq = run_experiment(&small_config(false)).unwrap();
    for (a, b) in par.cells.iter().zip(seq.cells.iter()) {
        assert_eq!(a.de_traces, b.de_traces);
        assert_eq!(a.ga_traces, b.ga_traces);
    }
}

#[test]
fn test_best_is_not_above_mean() {
    let results = run_experiment(&small_config(false)).unwrap();
    for cell in &results.cells {
        for s in cell.summaries() {
            assert!(s.best_err <= s.mean_err, "{:?}", s);
            assert!(s.std_err >= 0.0);
        }
        let curve = cell.mean_curve(Algorithm::Ga);
        assert!(curve.as_slice().windows(2).all(|w| w[1] <= w[0] + 1e-12));
    }
}

#[test]
fn test_persist_writes_tables_and_plots() {
    let dir = tempfile::tempdir().unwrap();
    let results = run_experiment(&small_config(false)).unwrap();
    let paths = persist_results(&results, dir.path(), true).unwrap();

    // two tables, then one csv + one html per cell
    assert_eq!(paths.len(), 2 + 2 * 4);
    let table = std::fs::read_to_string(dir.path().join("dimension_2_errors.csv")).unwrap();
    let mut lines = table.lines();
    assert_eq!(lines.next(), Some("Benchmark,D,Algorithm,Mean Err,Best Err,Std Err"));
    assert_eq!(lines.count(), 4);
    assert!(dir.path().join("convergence_bent_cigar_3.csv").exists());
    assert!(dir.path().join("convergence_ackley_2.html").exists());
}

#[test]
fn test_unknown_function_fails_fast() {
    let cfg = ExperimentConfig { functions: vec!["sphere".into()], ..small_config(false) };
    assert!(run_experiment(&cfg).is_err());
}
