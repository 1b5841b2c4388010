//! Guess ranking command
//!
//! Applies any guesses already played, then ranks the guess pool.

use crate::core::{Outcome, Word};
use crate::solver::Solver;
use anyhow::{Context, Result, anyhow};

/// A guess already played together with the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Played {
    pub word: Word,
    pub outcome: Outcome,
}

impl Played {
    /// Parse `word=OUTCOME`, e.g. `crane=BYBBG`
    ///
    /// # Errors
    /// Returns an error if the separator is missing or either half is invalid.
    ///
    /// # Examples
    /// ```
    /// use wordle_partition::commands::Played;
    ///
    /// let played = Played::parse("crane=BYBBG").unwrap();
    /// assert_eq!(played.word.text(), "crane");
    /// assert_eq!(played.outcome.to_string(), "BYBBG");
    /// assert!(Played::parse("crane").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let (word, outcome) = text
            .split_once('=')
            .ok_or_else(|| anyhow!("expected word=OUTCOME, got {text:?}"))?;

        Ok(Self {
            word: Word::new(word.trim()).with_context(|| format!("in {text:?}"))?,
            outcome: Outcome::parse(outcome).with_context(|| format!("in {text:?}"))?,
        })
    }
}

/// Apply `played` in order, then rank every guess
///
/// # Errors
/// Returns an error if the feedback leaves no candidates or the
/// round cannot be scored.
pub fn rank_guesses(solver: &mut Solver, played: &[Played]) -> Result<()> {
    for Played { word, outcome } in played {
        solver
            .apply_guess(word, outcome)
            .with_context(|| format!("after playing {word} {outcome}"))?;
    }
    solver.solve()?;
    Ok(())
}
