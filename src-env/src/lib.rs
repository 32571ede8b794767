//! Environment utilities and constants for evobench

pub mod constants;
pub mod env_utils;

pub use constants::*;
pub use env_utils::{
    EnvError, check_evobench_env, get_data_generated_dir, get_evobench_dir, get_results_dir,
};
