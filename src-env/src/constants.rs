/// Environment variable pointing at the project root
pub const EVOBENCH_DIR: &str = "EVOBENCH_DIR";

/// Directory, relative to the project root, receiving generated data
pub const DATA_GENERATED: &str = "data_generated";

/// Subdirectory of `DATA_GENERATED` receiving experiment results
pub const RESULTS: &str = "results";
