use rayon::ThreadPool;
use serde::Serialize;

use crate::distance_matrix::DistanceMatrix;

/// Whether a strategy finishes every pivot round before the next one starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundOrdering {
    /// Rounds run one after another; the result equals the sequential one.
    Ordered,
    /// Rounds overlap with no ordering between them. Reads can be stale and
    /// writes can be lost, so the result may differ from the sequential one.
    Unordered,
}

pub trait ApspStrategy {
    /// Short identifier, used in machine readable output.
    fn id(&self) -> &'static str;

    /// Human readable name.
    fn name(&self) -> &'static str;

    fn round_ordering(&self) -> RoundOrdering;

    /// Runs one relaxation round per pivot over `matrix`, dispatching work on
    /// `thread_pool`, and returns the relaxed matrix once every round is done.
    ///
    /// A panic in any worker is re-raised on the calling thread after all
    /// outstanding work has finished.
    fn relax_all(&self, thread_pool: &ThreadPool, matrix: DistanceMatrix) -> DistanceMatrix;
}
