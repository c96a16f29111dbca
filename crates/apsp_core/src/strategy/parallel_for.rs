use rayon::{
    ThreadPool,
    iter::{IntoParallelIterator, ParallelIterator},
};

use crate::{distance_matrix::DistanceMatrix, kernel, shared_matrix::SharedDistanceMatrix};

use super::apsp_strategy::{ApspStrategy, RoundOrdering};

/// Hands every pivot to a parallel iterator and lets the pool schedule them.
///
/// Rounds overlap with no barrier between them, so this does not compute
/// shortest paths in general. Kept to measure and demonstrate that hazard; use
/// [`super::row_parallel::RowParallelStrategy`] for a correct parallel run.
pub struct ParallelForStrategy;

impl ApspStrategy for ParallelForStrategy {
    fn id(&self) -> &'static str {
        "parallel_for"
    }

    fn name(&self) -> &'static str {
        "Data Parallelism (parallel for over pivots)"
    }

    fn round_ordering(&self) -> RoundOrdering {
        RoundOrdering::Unordered
    }

    fn relax_all(&self, thread_pool: &ThreadPool, matrix: DistanceMatrix) -> DistanceMatrix {
        let n = matrix.num_vertices();
        let shared = SharedDistanceMatrix::from(matrix);

        thread_pool.install(|| {
            (0..n)
                .into_par_iter()
                .for_each(|pivot| kernel::relax_pivot_shared(&shared, pivot));
        });

        shared.into_matrix()
    }
}
