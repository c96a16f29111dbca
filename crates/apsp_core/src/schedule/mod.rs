pub mod commit_barrier;
pub mod lockstep;
