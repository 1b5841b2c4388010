//! Command implementations

pub mod analyze;
pub mod play;
pub mod rank;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use play::{PlayEnd, play_loop, run_play};
pub use rank::{Played, rank_guesses};
pub use solve::{GuessStep, SolveConfig, SolveResult, pick_guess, solve_word};
