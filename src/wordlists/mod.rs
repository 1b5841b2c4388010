//! Word lists for Wordle solving
//!
//! Lists are read from disk at startup; see [`loader`].

pub mod loader;

/// Default candidate answer list
pub const DEFAULT_ANSWERS: &str = "targets.dict";

/// Default list of extra allowed guesses
pub const DEFAULT_GUESSES: &str = "guesses.dict";
