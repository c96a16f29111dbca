use rayon::ThreadPool;

use crate::{distance_matrix::DistanceMatrix, kernel};

use super::apsp_strategy::{ApspStrategy, RoundOrdering};

/// Spawns one task per pivot on the pool and waits for it before spawning the
/// next one. Only one task is ever in flight, so this is the sequential
/// algorithm plus scheduling overhead.
pub struct ImplicitTaskStrategy;

impl ApspStrategy for ImplicitTaskStrategy {
    fn id(&self) -> &'static str {
        "implicit_task"
    }

    fn name(&self) -> &'static str {
        "Task Parallelism (implicit task per pivot)"
    }

    fn round_ordering(&self) -> RoundOrdering {
        RoundOrdering::Ordered
    }

    fn relax_all(&self, thread_pool: &ThreadPool, mut matrix: DistanceMatrix) -> DistanceMatrix {
        for pivot in 0..matrix.num_vertices() {
            let working = &mut matrix;
            thread_pool.scope(move |s| {
                s.spawn(move |_| kernel::relax_pivot(working, pivot));
            });
        }
        matrix
    }
}
