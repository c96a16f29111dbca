use rayon::ThreadPool;

use crate::{distance_matrix::DistanceMatrix, kernel};

use super::apsp_strategy::{ApspStrategy, RoundOrdering};

/// Every round on the calling thread, in pivot order. This is the oracle the
/// other strategies are compared against.
pub struct SequentialStrategy;

impl ApspStrategy for SequentialStrategy {
    fn id(&self) -> &'static str {
        "sequential"
    }

    fn name(&self) -> &'static str {
        "Serial"
    }

    fn round_ordering(&self) -> RoundOrdering {
        RoundOrdering::Ordered
    }

    fn relax_all(&self, _thread_pool: &ThreadPool, mut matrix: DistanceMatrix) -> DistanceMatrix {
        for pivot in 0..matrix.num_vertices() {
            kernel::relax_pivot(&mut matrix, pivot);
        }
        matrix
    }
}
