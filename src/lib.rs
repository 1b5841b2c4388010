//! Wordle Partition Solver
//!
//! Ranks every allowed guess by how well it splits the remaining answers:
//! each of the 243 possible feedback outcomes becomes a filter, the answers
//! each filter accepts form a bucket, and a guess scores by its largest
//! bucket (minimax).
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_partition::core::{Outcome, Word};
//! use wordle_partition::solver::{Solver, SolverOptions};
//!
//! let mut solver = Solver::from_text(
//!     &["slate", "irate", "crate", "grate", "plate"],
//!     &["crane"],
//!     SolverOptions::default(),
//! )
//! .unwrap();
//!
//! let best = solver.solve().unwrap()[0].clone();
//! println!("Play {} (worst case {} left)", best.word, best.score);
//!
//! let outcome = Outcome::calculate(&best.word, &Word::new("grate").unwrap());
//! let remaining = solver.apply_guess(&best.word, &outcome).unwrap();
//! assert!(remaining < 5);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{Error, InputError, Result};
