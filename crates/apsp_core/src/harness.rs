use std::{fmt, time::Duration};

use serde::Serialize;
use tracing::{info, warn};

use crate::{
    distance_matrix::DistanceMatrix,
    error::ApspError,
    solver::ApspSolver,
    stopwatch::Stopwatch,
    strategy::apsp_strategy::{ApspStrategy, RoundOrdering},
};

#[derive(Debug, Clone, Serialize)]
pub struct StrategyReport {
    pub strategy: &'static str,
    pub name: &'static str,
    pub round_ordering: RoundOrdering,
    #[serde(serialize_with = "serialize_millis", rename = "elapsed_ms")]
    pub elapsed: Duration,
    /// Cells that differ from the sequential result, `None` when not verified.
    pub mismatched_cells: Option<usize>,
}

impl StrategyReport {
    pub fn elapsed_millis(&self) -> f64 {
        duration_millis(&self.elapsed)
    }

    pub fn matches_oracle(&self) -> Option<bool> {
        self.mismatched_cells.map(|count| count == 0)
    }
}

fn duration_millis(duration: &Duration) -> f64 {
    duration.as_nanos() as f64 / 1_000_000.0
}

fn serialize_millis<S: serde::Serializer>(
    elapsed: &Duration,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration_millis(elapsed))
}

impl fmt::Display for StrategyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Time taken by {} Application is {} milliseconds",
            self.name,
            self.elapsed_millis()
        )
    }
}

/// Runs strategies once each and times them.
pub struct Harness<'a> {
    solver: &'a ApspSolver,
    oracle: Option<DistanceMatrix>,
}

impl<'a> Harness<'a> {
    pub fn new(solver: &'a ApspSolver) -> Self {
        Self {
            solver,
            oracle: None,
        }
    }

    /// Compares every following run against the sequential result for `input`.
    pub fn with_oracle(mut self, input: &DistanceMatrix) -> Result<Self, ApspError> {
        self.oracle = Some(self.solver.solve_sequential(input)?);
        Ok(self)
    }

    /// Runs `strategy` exactly once on a copy of `input`. The measured time
    /// covers the copy and every pivot round.
    pub fn run<S: ApspStrategy + ?Sized>(
        &self,
        strategy: &S,
        input: &DistanceMatrix,
    ) -> Result<StrategyReport, ApspError> {
        let mut stopwatch = Stopwatch::new(strategy.name());

        let result = stopwatch.measure(|| self.solver.solve(strategy, input))?;
        stopwatch.report();

        let mismatched_cells = self
            .oracle
            .as_ref()
            .map(|oracle| result.mismatched_cells(oracle).len());

        match mismatched_cells {
            Some(0) => info!("{} matches the sequential result", strategy.name()),
            Some(count) => warn!(
                "{} differs from the sequential result in {} cells",
                strategy.name(),
                count
            ),
            None => {}
        }

        Ok(StrategyReport {
            strategy: strategy.id(),
            name: strategy.name(),
            round_ordering: strategy.round_ordering(),
            elapsed: stopwatch.total_duration(),
            mismatched_cells,
        })
    }

    /// Runs each strategy once, in order. The first failure ends the run.
    pub fn run_all<S: ApspStrategy>(
        &self,
        strategies: &[S],
        input: &DistanceMatrix,
    ) -> Result<Vec<StrategyReport>, ApspError> {
        strategies
            .iter()
            .map(|strategy| self.run(strategy, input))
            .collect()
    }
}
