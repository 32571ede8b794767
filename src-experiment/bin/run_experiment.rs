use std::path::PathBuf;
use std::process;

use clap::Parser;
use evobench_env::{DATA_GENERATED, RESULTS, get_results_dir};
use evobench_experiment::cli::Args;
use evobench_experiment::output::{format_summary_table, persist_results};
use evobench_experiment::run_experiment;

fn output_dir(args: &Args) -> PathBuf {
    if let Some(dir) = &args.output_dir {
        return dir.clone();
    }
    match get_results_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!("{}; writing results below the current directory", e);
            PathBuf::from(DATA_GENERATED).join(RESULTS)
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match args.experiment_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    };

    let results = match run_experiment(&config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    for &dim in &config.dimensions {
        println!("{}", format_summary_table(dim, &results.summaries_for_dimension(dim)));
    }

    let dir = output_dir(&args);
    match persist_results(&results, &dir, !args.no_plots) {
        Ok(paths) => println!("Saved {} files to {}", paths.len(), dir.display()),
        Err(e) => {
            eprintln!("Error: failed to save results to {}: {}", dir.display(), e);
            process::exit(1);
        }
    }
}
