//! Forced interleaving for across-round dispatch.
//!
//! Real across-round strategies only diverge when the scheduler happens to
//! overlap rounds badly. This schedule forces the worst overlap on every run:
//! one thread per pivot round, every round reads all the cells it needs, the
//! rounds meet at a [`CommitBarrier`], and only then are the writes applied.
//! No round ever sees another round's writes.

use std::{
    panic::{self, AssertUnwindSafe},
    thread,
};

use parking_lot::Mutex;
use tracing::debug;

use crate::{
    distance_matrix::{DistanceMatrix, Weight},
    error::ApspError,
    kernel::relaxed_sum,
    shared_matrix::SharedDistanceMatrix,
    solver::panic_message,
};

use super::commit_barrier::{Arrival, CommitBarrier};

/// `(from, to, weight)` a round wants to write.
type Proposal = (usize, usize, Weight);

fn read_round(matrix: &SharedDistanceMatrix, pivot: usize) -> Vec<Proposal> {
    let n = matrix.num_vertices();
    let mut proposals = Vec::new();

    for from in 0..n {
        for to in 0..n {
            if let Some(candidate) = relaxed_sum(matrix.load(from, pivot), matrix.load(pivot, to))
            {
                if candidate < matrix.load(from, to) {
                    proposals.push((from, to, candidate));
                }
            }
        }
    }

    proposals
}

fn commit(matrix: &SharedDistanceMatrix, proposals: &[Vec<Proposal>]) {
    for &(from, to, weight) in proposals.iter().flatten() {
        if weight < matrix.load(from, to) {
            matrix.store(from, to, weight);
        }
    }
}

/// Runs all pivot rounds at once with every read ordered before every write.
///
/// The last round to finish reading commits every round's writes in pivot
/// order, so the outcome is deterministic. Spawns one thread per vertex, meant
/// for small graphs.
pub fn relax_all_lockstep(matrix: DistanceMatrix) -> Result<DistanceMatrix, ApspError> {
    let n = matrix.num_vertices();
    if n == 0 {
        return Ok(matrix);
    }

    let shared = SharedDistanceMatrix::from(matrix);
    let barrier = CommitBarrier::new(n);
    let proposals: Mutex<Vec<Vec<Proposal>>> = Mutex::new(vec![Vec::new(); n]);

    debug!("Running {} rounds in lockstep", n);

    thread::scope(|s| {
        let mut handles = Vec::with_capacity(n);

        for pivot in 0..n {
            let shared = &shared;
            let barrier = &barrier;
            let proposals = &proposals;

            let spawned = thread::Builder::new()
                .name(format!("round-{pivot}"))
                .spawn_scoped(s, move || -> Result<(), ApspError> {
                    let round = panic::catch_unwind(AssertUnwindSafe(|| {
                        let round = read_round(shared, pivot);
                        proposals.lock()[pivot] = round;
                        barrier.arrive_and_commit(|| commit(shared, &proposals.lock()))
                    }));

                    match round {
                        Ok(Arrival::Committed) => {
                            debug!("Round {} committed every proposal", pivot);
                            Ok(())
                        }
                        Ok(Arrival::Released) => Ok(()),
                        Ok(Arrival::Cancelled) => {
                            debug!("Round {} released by a failed round", pivot);
                            Ok(())
                        }
                        Err(payload) => {
                            barrier.cancel();
                            Err(ApspError::WorkerPanic(panic_message(payload.as_ref())))
                        }
                    }
                });

            match spawned {
                Ok(handle) => handles.push(handle),
                Err(error) => {
                    barrier.cancel();
                    return Err(ApspError::Spawn(error));
                }
            }
        }

        handles.into_iter().try_for_each(|handle| {
            handle
                .join()
                .map_err(|payload| ApspError::WorkerPanic(panic_message(payload.as_ref())))?
        })
    })?;

    Ok(shared.into_matrix())
}
