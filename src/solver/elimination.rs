//! Brute-force elimination ranking
//!
//! Every target is played against every guess. The letter knowledge
//! the guess would reveal is checked against the whole target list, and the
//! guess is credited with every word it rules out. Guesses are ranked by the
//! mean number eliminated per target.

use super::scheduler::{ProgressFn, Scheduler};
use crate::core::{Knowledge, Word};
use log::info;
use std::cmp::Ordering;
use std::time::Instant;

/// Average elimination power of one guess
#[derive(Debug, Clone, PartialEq)]
pub struct EliminationScore {
    pub word: Word,
    /// Words eliminated, summed over every target
    pub eliminated: u64,
    /// `eliminated` divided by the number of targets
    pub mean_eliminated: f64,
}

/// Rank `guesses` by the mean number of `targets` each one eliminates
///
/// Sorted by mean descending, ties broken by word. An empty target list
/// gives every guess a mean of 0.
///
/// # Examples
/// ```
/// use wordle_partition::core::Word;
/// use wordle_partition::solver::{Scheduler, elimination::rank_by_elimination};
///
/// let targets: Vec<Word> = ["slate", "crate", "fuzzy"].iter().map(|w| Word::new(w).unwrap()).collect();
/// let ranking = rank_by_elimination(&targets, &targets, &Scheduler::new(2), None);
///
/// assert_eq!(ranking.len(), 3);
/// assert!(ranking[0].mean_eliminated >= ranking[2].mean_eliminated);
/// ```
#[must_use]
pub fn rank_by_elimination(
    targets: &[Word],
    guesses: &[Word],
    scheduler: &Scheduler,
    progress: Option<&ProgressFn<'_>>,
) -> Vec<EliminationScore> {
    let start = Instant::now();

    let partials = scheduler.run(
        targets,
        || vec![0u64; guesses.len()],
        |totals: &mut Vec<u64>, _, target| {
            for (total, guess) in totals.iter_mut().zip(guesses) {
                *total += Knowledge::gather(target, guess).eliminated(targets) as u64;
            }
        },
        progress,
    );

    let mut totals = vec![0u64; guesses.len()];
    for partial in partials {
        for (total, part) in totals.iter_mut().zip(partial) {
            *total += part;
        }
    }

    let mut scores: Vec<EliminationScore> = guesses
        .iter()
        .zip(totals)
        .map(|(word, eliminated)| EliminationScore {
            word: word.clone(),
            eliminated,
            mean_eliminated: if targets.is_empty() {
                0.0
            } else {
                eliminated as f64 / targets.len() as f64
            },
        })
        .collect();

    scores.sort_by(elimination_cmp);

    info!(
        "elimination ranking of {} guesses over {} targets took {:.2?}",
        guesses.len(),
        targets.len(),
        start.elapsed()
    );

    scores
}

/// Ordering used for [`rank_by_elimination`] output
#[must_use]
pub fn elimination_cmp(a: &EliminationScore, b: &EliminationScore) -> Ordering {
    b.mean_eliminated
        .total_cmp(&a.mean_eliminated)
        .then_with(|| a.word.cmp(&b.word))
}
