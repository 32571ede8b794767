//! Benchmark objectives organized by landscape:
//! - `unimodal`: single optimum, mostly ill-conditioned bowls and valleys
//! - `multimodal`: many local minima

pub mod multimodal;
pub mod unimodal;

pub use multimodal::*;
pub use unimodal::*;
