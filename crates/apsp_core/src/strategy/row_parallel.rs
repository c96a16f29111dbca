use rayon::ThreadPool;

use crate::{distance_matrix::DistanceMatrix, kernel};

use super::apsp_strategy::{ApspStrategy, RoundOrdering};

/// Rounds in pivot order, the rows of each round spread over the pool.
///
/// Workers own disjoint rows within a round and the round only returns once
/// every row is written, so round `k + 1` always sees all of round `k`.
pub struct RowParallelStrategy;

impl ApspStrategy for RowParallelStrategy {
    fn id(&self) -> &'static str {
        "row_parallel"
    }

    fn name(&self) -> &'static str {
        "Data Parallelism (rows within each pivot round)"
    }

    fn round_ordering(&self) -> RoundOrdering {
        RoundOrdering::Ordered
    }

    fn relax_all(&self, thread_pool: &ThreadPool, mut matrix: DistanceMatrix) -> DistanceMatrix {
        thread_pool.install(|| {
            for pivot in 0..matrix.num_vertices() {
                kernel::relax_pivot_rows(&mut matrix, pivot);
            }
        });
        matrix
    }
}
