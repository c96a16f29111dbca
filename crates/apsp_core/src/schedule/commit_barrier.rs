use parking_lot::{Condvar, Mutex};
use tracing::debug;

/// Single-use barrier between the read phase and the write phase of a
/// lockstep run.
///
/// Every round arrives once. The last round to arrive runs the commit while
/// the others wait, so no round returns before the writes are applied. A
/// failed round cancels the barrier and releases everyone still waiting.
pub struct CommitBarrier {
    state: Mutex<CommitState>,
    released: Condvar,
    num_rounds: usize,
}

struct CommitState {
    arrived: usize,
    committed: bool,
    cancelled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrival {
    /// This round arrived last and ran the commit.
    Committed,
    /// Another round ran the commit.
    Released,
    Cancelled,
}

impl CommitBarrier {
    pub fn new(num_rounds: usize) -> Self {
        Self {
            state: Mutex::new(CommitState {
                arrived: 0,
                committed: false,
                cancelled: false,
            }),
            released: Condvar::new(),
            num_rounds,
        }
    }

    /// Marks the calling round's reads as done and blocks until `commit` has
    /// run. `commit` runs at most once, on the last round to arrive.
    pub fn arrive_and_commit<F: FnOnce()>(&self, commit: F) -> Arrival {
        let mut state = self.state.lock();

        if state.cancelled {
            return Arrival::Cancelled;
        }

        state.arrived += 1;
        if state.arrived == self.num_rounds {
            commit();
            state.committed = true;
            self.released.notify_all();
            return Arrival::Committed;
        }

        self.released
            .wait_while(&mut state, |state| !state.committed && !state.cancelled);

        if state.committed {
            Arrival::Released
        } else {
            Arrival::Cancelled
        }
    }

    pub fn cancel(&self) {
        let mut state = self.state.lock();
        if state.committed {
            return;
        }

        debug!(
            "Commit barrier cancelled with {}/{} rounds arrived",
            state.arrived, self.num_rounds
        );
        state.cancelled = true;
        self.released.notify_all();
    }
}
