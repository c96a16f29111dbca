pub mod constants;
pub mod distance_matrix;
pub mod error;
pub mod graph_source;
pub mod harness;
pub mod kernel;
pub mod params;
pub mod schedule;
pub mod shared_matrix;
pub mod solver;
pub mod stopwatch;
pub mod strategy;

#[cfg(test)]
pub(crate) mod test_utils;
