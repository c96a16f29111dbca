pub mod apsp_strategy;
pub mod explicit_task;
pub mod implicit_task;
pub mod parallel_for;
pub mod parallel_for_each;
pub mod row_parallel;
pub mod sequential;

use rayon::ThreadPool;

use crate::{distance_matrix::DistanceMatrix, params::ApspParams};

use self::{
    apsp_strategy::{ApspStrategy, RoundOrdering},
    explicit_task::ExplicitTaskStrategy,
    implicit_task::ImplicitTaskStrategy,
    parallel_for::ParallelForStrategy,
    parallel_for_each::ParallelForEachStrategy,
    row_parallel::RowParallelStrategy,
    sequential::SequentialStrategy,
};

pub enum Strategy {
    Sequential(SequentialStrategy),
    ParallelFor(ParallelForStrategy),
    ParallelForEach(ParallelForEachStrategy),
    ImplicitTask(ImplicitTaskStrategy),
    ExplicitTask(ExplicitTaskStrategy),
    RowParallel(RowParallelStrategy),
}

impl Strategy {
    /// Every strategy, in reporting order.
    pub fn all(params: &ApspParams) -> Vec<Strategy> {
        vec![
            Strategy::Sequential(SequentialStrategy),
            Strategy::ParallelFor(ParallelForStrategy),
            Strategy::ParallelForEach(ParallelForEachStrategy::new(params.chunk_size)),
            Strategy::ImplicitTask(ImplicitTaskStrategy),
            Strategy::ExplicitTask(ExplicitTaskStrategy),
            Strategy::RowParallel(RowParallelStrategy),
        ]
    }

    fn inner(&self) -> &dyn ApspStrategy {
        match self {
            Strategy::Sequential(strategy) => strategy,
            Strategy::ParallelFor(strategy) => strategy,
            Strategy::ParallelForEach(strategy) => strategy,
            Strategy::ImplicitTask(strategy) => strategy,
            Strategy::ExplicitTask(strategy) => strategy,
            Strategy::RowParallel(strategy) => strategy,
        }
    }
}

impl ApspStrategy for Strategy {
    fn id(&self) -> &'static str {
        self.inner().id()
    }

    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn round_ordering(&self) -> RoundOrdering {
        self.inner().round_ordering()
    }

    fn relax_all(&self, thread_pool: &ThreadPool, matrix: DistanceMatrix) -> DistanceMatrix {
        self.inner().relax_all(thread_pool, matrix)
    }
}
