use std::ops::Range;

use rayon::{
    ThreadPool,
    iter::{IntoParallelIterator, ParallelIterator},
};
use tracing::debug;

use crate::{
    constants::RANGES_PER_THREAD, distance_matrix::DistanceMatrix, kernel,
    shared_matrix::SharedDistanceMatrix,
};

use super::apsp_strategy::{ApspStrategy, RoundOrdering};

/// Splits the pivots into contiguous ranges and runs the ranges concurrently.
/// Pivots inside a range run in order, ranges overlap freely.
///
/// Same missing barrier as [`super::parallel_for::ParallelForStrategy`].
pub struct ParallelForEachStrategy {
    chunk_size: Option<usize>,
}

impl ParallelForEachStrategy {
    pub fn new(chunk_size: Option<usize>) -> Self {
        Self { chunk_size }
    }
}

fn default_chunk_size(num_pivots: usize, num_threads: usize) -> usize {
    (num_pivots / (num_threads * RANGES_PER_THREAD)).max(1)
}

pub(crate) fn pivot_ranges(num_pivots: usize, chunk_size: usize) -> Vec<Range<usize>> {
    (0..num_pivots)
        .step_by(chunk_size)
        .map(|start| start..(start + chunk_size).min(num_pivots))
        .collect()
}

impl ApspStrategy for ParallelForEachStrategy {
    fn id(&self) -> &'static str {
        "parallel_for_each"
    }

    fn name(&self) -> &'static str {
        "Data Parallelism (chunked for each over pivot ranges)"
    }

    fn round_ordering(&self) -> RoundOrdering {
        RoundOrdering::Unordered
    }

    fn relax_all(&self, thread_pool: &ThreadPool, matrix: DistanceMatrix) -> DistanceMatrix {
        let n = matrix.num_vertices();
        let chunk_size = self
            .chunk_size
            .unwrap_or_else(|| default_chunk_size(n, thread_pool.current_num_threads()));
        let ranges = pivot_ranges(n, chunk_size);

        debug!("{} pivots split into {} ranges", n, ranges.len());

        let shared = SharedDistanceMatrix::from(matrix);

        thread_pool.install(|| {
            ranges.into_par_iter().for_each(|range| {
                for pivot in range {
                    kernel::relax_pivot_shared(&shared, pivot);
                }
            });
        });

        shared.into_matrix()
    }
}
