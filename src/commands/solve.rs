//! Word solving command
//!
//! Plays a solver against a known answer and records every round.

use crate::core::{Outcome, Word};
use crate::solver::{RankedGuess, Solver, Status};
use anyhow::{Result, bail};
use log::debug;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: Word,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: Word,
    pub outcome: Outcome,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Strategy score, absent when only one candidate was left to play
    pub score: Option<f64>,
}

/// Pick the guess to play from a ranking
///
/// Takes the top entry, except that a candidate sharing the top score is
/// preferred over a non-candidate.
#[must_use]
pub fn pick_guess(ranked: &[RankedGuess]) -> Option<&RankedGuess> {
    let top = ranked.first()?;
    ranked
        .iter()
        .take_while(|guess| guess.score.total_cmp(&top.score).is_eq())
        .find(|guess| guess.is_candidate)
        .or(Some(top))
}

/// Solve a specific word by always playing the best ranked guess
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 letters a-z)
/// - The target is not one of the solver's candidates
/// - A solving round fails (for example an unimplemented strategy)
pub fn solve_word(config: SolveConfig, mut solver: Solver) -> Result<SolveResult> {
    let target = Word::new(&config.target)?;
    if !solver.candidates().contains(&target) {
        bail!("{target} is not in the answer list");
    }

    let mut guesses: Vec<GuessStep> = Vec::new();

    for round in 1..=config.max_guesses {
        let candidates_before = solver.candidates().len();

        let (guess, score) = match solver.status() {
            Status::Solved(answer) => (answer.clone(), None),
            Status::Unsolved(_) | Status::NoAnswer => {
                let ranked = solver.solve()?;
                match pick_guess(ranked) {
                    Some(best) => (best.word.clone(), Some(best.score)),
                    None => bail!("no guesses available"),
                }
            }
        };

        let outcome = Outcome::calculate(&guess, &target);
        let candidates_after = solver.apply_guess(&guess, &outcome)?;
        debug!("round {round}: {guess} {outcome}, {candidates_before} -> {candidates_after}");

        guesses.push(GuessStep {
            word: guess,
            outcome,
            candidates_before,
            candidates_after,
            score,
        });

        if outcome.is_perfect() {
            return Ok(SolveResult {
                success: true,
                guesses,
                target,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverOptions;

    const ANSWERS: [&str; 8] = [
        "slate", "irate", "crate", "grate", "plate", "trace", "react", "fuzzy",
    ];

    fn solver() -> Solver {
        Solver::from_text(&ANSWERS, &["crane", "audio"], SolverOptions::default()).unwrap()
    }

    fn ranked(text: &str, score: f64, is_candidate: bool) -> RankedGuess {
        RankedGuess {
            word: Word::new(text).unwrap(),
            is_candidate,
            score,
        }
    }

    #[test]
    fn solve_word_succeeds_for_every_answer() {
        for answer in ANSWERS {
            let result = solve_word(SolveConfig::new(answer.to_string()), solver()).unwrap();

            assert!(result.success, "{answer}");
            assert_eq!(result.guesses.last().unwrap().word.text(), answer);
        }
    }

    #[test]
    fn solve_records_history() {
        let result = solve_word(SolveConfig::new("grate".to_string()), solver()).unwrap();

        assert!(!result.guesses.is_empty());
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }
        assert_eq!(result.guesses[0].candidates_before, ANSWERS.len());
    }

    #[test]
    fn solve_unknown_target_returns_error() {
        assert!(solve_word(SolveConfig::new("zzzzz".to_string()), solver()).is_err());
        assert!(solve_word(SolveConfig::new("zz".to_string()), solver()).is_err());
    }

    #[test]
    fn solve_with_max_guesses_limit() {
        let mut config = SolveConfig::new("fuzzy".to_string());
        config.max_guesses = 1;

        let result = solve_word(config, solver()).unwrap();
        assert!(result.guesses.len() <= 1);
    }

    #[test]
    fn single_candidate_is_played_directly() {
        let solver = Solver::from_text(&["slate"], &["crane"], SolverOptions::default()).unwrap();
        let result = solve_word(SolveConfig::new("slate".to_string()), solver).unwrap();

        assert!(result.success);
        assert_eq!(result.guesses.len(), 1);
        assert_eq!(result.guesses[0].score, None);
    }

    #[test]
    fn pick_prefers_candidate_on_tied_score() {
        let ranking = [
            ranked("aaaaa", 1.0, false),
            ranked("bbbbb", 1.0, true),
            ranked("ccccc", 2.0, true),
        ];
        assert_eq!(pick_guess(&ranking).unwrap().word.text(), "bbbbb");

        let ranking = [ranked("aaaaa", 1.0, false), ranked("ccccc", 2.0, true)];
        assert_eq!(pick_guess(&ranking).unwrap().word.text(), "aaaaa");

        assert!(pick_guess(&[]).is_none());
    }
}
