use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
};

use tracing::debug;

use crate::{
    distance_matrix::DistanceMatrix,
    error::ApspError,
    params::ApspParams,
    strategy::{
        Strategy,
        apsp_strategy::{ApspStrategy, RoundOrdering},
        sequential::SequentialStrategy,
    },
};

/// Owns the worker pool and runs strategies on private copies of their input.
pub struct ApspSolver {
    params: ApspParams,
    thread_pool: rayon::ThreadPool,
}

impl ApspSolver {
    pub fn new(params: ApspParams) -> Result<Self, ApspError> {
        params.validate()?;

        let num_threads = params.threads.number_of_threads();
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|index| format!("apsp-{index}"))
            .build()?;

        debug!("Created APSP thread pool with {} threads", num_threads);

        Ok(Self {
            params,
            thread_pool,
        })
    }

    pub fn params(&self) -> &ApspParams {
        &self.params
    }

    pub fn num_threads(&self) -> usize {
        self.thread_pool.current_num_threads()
    }

    pub fn strategies(&self) -> Vec<Strategy> {
        Strategy::all(&self.params)
    }

    /// Runs `strategy` on a copy of `input`. `input` itself is never modified.
    ///
    /// A panic in any worker is reported as [`ApspError::WorkerPanic`] once all
    /// of the strategy's work has stopped. No partial result is returned.
    pub fn solve<S: ApspStrategy + ?Sized>(
        &self,
        strategy: &S,
        input: &DistanceMatrix,
    ) -> Result<DistanceMatrix, ApspError> {
        debug!(
            "Running {} on {} vertices",
            strategy.name(),
            input.num_vertices()
        );

        if strategy.round_ordering() == RoundOrdering::Unordered {
            debug!(
                "{} runs pivot rounds without ordering, result may differ from the sequential one",
                strategy.name()
            );
        }

        let working = input.clone();
        panic::catch_unwind(AssertUnwindSafe(|| {
            strategy.relax_all(&self.thread_pool, working)
        }))
        .map_err(|payload| ApspError::WorkerPanic(panic_message(payload.as_ref())))
    }

    /// Sequential shortest paths, the reference for every other strategy.
    pub fn solve_sequential(&self, input: &DistanceMatrix) -> Result<DistanceMatrix, ApspError> {
        self.solve(&SequentialStrategy, input)
    }
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_owned()
    }
}
