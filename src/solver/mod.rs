//! Wordle solving algorithms
//!
//! Partition-based guess ranking, the parallel scheduler that drives it,
//! and the round-based [`Solver`] built on top.

pub mod elimination;
mod engine;
mod partition;
mod ranking;
mod scheduler;
mod strategy;

pub use elimination::{EliminationScore, rank_by_elimination};
pub use engine::{ProgressCallback, Solver, SolverOptions, Status};
pub use partition::{Partition, score_guess};
pub use ranking::{RankedGuess, sort_ranked};
pub use scheduler::{DEFAULT_WORKERS, ProgressFn, Scheduler};
pub use strategy::Strategy;
