use rayon::ThreadPool;

use crate::{distance_matrix::DistanceMatrix, kernel, shared_matrix::SharedDistanceMatrix};

use super::apsp_strategy::{ApspStrategy, RoundOrdering};

/// Spawns one task per pivot up front and waits for all of them.
///
/// Every round may run at the same time as every other, so like
/// [`super::parallel_for::ParallelForStrategy`] the result can differ from the
/// sequential one.
pub struct ExplicitTaskStrategy;

impl ApspStrategy for ExplicitTaskStrategy {
    fn id(&self) -> &'static str {
        "explicit_task"
    }

    fn name(&self) -> &'static str {
        "Task Parallelism (explicit task per pivot)"
    }

    fn round_ordering(&self) -> RoundOrdering {
        RoundOrdering::Unordered
    }

    fn relax_all(&self, thread_pool: &ThreadPool, matrix: DistanceMatrix) -> DistanceMatrix {
        let n = matrix.num_vertices();
        let shared = SharedDistanceMatrix::from(matrix);

        thread_pool.scope(|s| {
            for pivot in 0..n {
                let shared = &shared;
                s.spawn(move |_| kernel::relax_pivot_shared(shared, pivot));
            }
        });

        shared.into_matrix()
    }
}
