//! Main Wordle solver interface
//!
//! A [`Solver`] owns the candidate pool (answers still possible) and the
//! guess pool (everything that may be played). Each round the caller runs
//! [`Solver::solve`] to rank every guess, plays one, and feeds the observed
//! outcome back through [`Solver::apply_guess`].

use super::elimination::{EliminationScore, rank_by_elimination};
use super::partition::Partition;
use super::ranking::{RankedGuess, sort_ranked};
use super::scheduler::{DEFAULT_WORKERS, Scheduler};
use super::strategy::Strategy;
use crate::core::{Filter, Knowledge, Outcome, Word};
use crate::error::{Error, Result};
use log::{debug, info};
use rustc_hash::FxHashSet;
use std::time::Instant;

/// Progress callback, called with (total evaluations, completed evaluations)
pub type ProgressCallback = Box<dyn Fn(usize, usize) + Send + Sync>;

/// Solver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverOptions {
    pub strategy: Strategy,
    /// Number of parallel workers used while scoring
    pub workers: usize,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            workers: DEFAULT_WORKERS,
        }
    }
}

/// Where the solver stands after the feedback applied so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status<'a> {
    /// More than one answer is still possible
    Unsolved(usize),
    /// Exactly one answer remains
    Solved(&'a Word),
    /// No answer is consistent with the feedback
    NoAnswer,
}

/// Main Wordle solver
pub struct Solver {
    options: SolverOptions,
    scheduler: Scheduler,
    candidates: Vec<Word>,
    guesses: Vec<Word>,
    ranked: Vec<RankedGuess>,
    knowledge: Knowledge,
    progress: Option<ProgressCallback>,
}

impl Solver {
    /// Create a new solver
    ///
    /// # Parameters
    /// - `candidates`: possible answers
    /// - `extra_guesses`: words that may be guessed but cannot be the answer
    /// - `options`: strategy and worker count
    ///
    /// The guess pool is the union of both lists, candidates first, with
    /// duplicates removed. It stays fixed for the life of the solver.
    #[must_use]
    pub fn new(candidates: Vec<Word>, extra_guesses: Vec<Word>, options: SolverOptions) -> Self {
        let candidates = dedup(candidates);
        let guesses = dedup(candidates.iter().cloned().chain(extra_guesses).collect());

        Self {
            options,
            scheduler: Scheduler::new(options.workers),
            candidates,
            guesses,
            ranked: Vec::new(),
            knowledge: Knowledge::default(),
            progress: None,
        }
    }

    /// Create a solver from word text
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` on the first word that is not five letters a-z.
    ///
    /// # Examples
    /// ```
    /// use wordle_partition::solver::{Solver, SolverOptions};
    ///
    /// let solver = Solver::from_text(&["crane", "slate"], &["audio"], SolverOptions::default()).unwrap();
    /// assert_eq!(solver.candidates().len(), 2);
    /// assert_eq!(solver.guesses().len(), 3);
    ///
    /// assert!(Solver::from_text(&["cran3"], &[], SolverOptions::default()).is_err());
    /// ```
    pub fn from_text(
        candidates: &[&str],
        extra_guesses: &[&str],
        options: SolverOptions,
    ) -> Result<Self> {
        let parse = |texts: &[&str]| -> Result<Vec<Word>> {
            texts
                .iter()
                .map(|t| Word::new(t).map_err(Error::from))
                .collect()
        };
        Ok(Self::new(parse(candidates)?, parse(extra_guesses)?, options))
    }

    /// Register a progress observer for [`Solver::solve`]
    pub fn on_progress(&mut self, callback: impl Fn(usize, usize) + Send + Sync + 'static) {
        self.progress = Some(Box::new(callback));
    }

    /// Rank every guess in the guess pool against the current candidates
    ///
    /// Results are sorted by score, then word, and replace the previous
    /// round's ranking only if the whole round succeeds.
    ///
    /// # Errors
    /// - `Error::NotImplemented` if the configured strategy cannot be scored
    /// - `Error::EmptyResult` if no candidate answers remain
    pub fn solve(&mut self) -> Result<&[RankedGuess]> {
        let strategy = self.options.strategy;
        strategy.ensure_implemented()?;
        if self.candidates.is_empty() {
            return Err(Error::EmptyResult);
        }

        let start = Instant::now();
        let candidates = &self.candidates;
        let partials = self.scheduler.run(
            &self.guesses,
            Vec::new,
            |scores: &mut Vec<(usize, Result<f64>)>, index, guess| {
                let score = Partition::compute(guess, candidates).score(strategy);
                scores.push((index, score));
            },
            self.progress.as_deref(),
        );

        let candidate_set: FxHashSet<&Word> = self.candidates.iter().collect();
        let mut ranked = Vec::with_capacity(self.guesses.len());
        for (index, score) in partials.into_iter().flatten() {
            let word = &self.guesses[index];
            ranked.push(RankedGuess {
                word: word.clone(),
                is_candidate: candidate_set.contains(word),
                score: score?,
            });
        }
        sort_ranked(&mut ranked);

        info!(
            "ranked {} guesses against {} candidates ({strategy}) in {:.2?}",
            ranked.len(),
            self.candidates.len(),
            start.elapsed()
        );

        self.ranked = ranked;
        Ok(&self.ranked)
    }

    /// Remove every candidate inconsistent with a real guess and its outcome
    ///
    /// The ranking from the last [`Solver::solve`] is left untouched.
    ///
    /// Returns the number of candidates remaining.
    ///
    /// # Errors
    /// Returns `Error::EmptyResult` when no candidate survives; the pool is
    /// still updated and the solver reports [`Status::NoAnswer`].
    pub fn apply_guess(&mut self, word: &Word, outcome: &Outcome) -> Result<usize> {
        let filter = Filter::new(word, outcome);
        debug!("{word} + {outcome} =\n{filter}");

        let before = self.candidates.len();
        self.candidates.retain(|candidate| filter.contains(candidate));
        self.knowledge += &Knowledge::from_outcome(word, outcome);

        debug!(
            "candidate pool reduced from {before} to {} ({})",
            self.candidates.len(),
            self.knowledge
        );

        if self.candidates.is_empty() {
            Err(Error::EmptyResult)
        } else {
            Ok(self.candidates.len())
        }
    }

    /// Parse a guess and outcome from text, then apply them
    ///
    /// Nothing is changed if either piece of text is invalid.
    ///
    /// # Errors
    /// - `Error::InvalidInput` if the word or outcome does not parse
    /// - `Error::EmptyResult` as for [`Solver::apply_guess`]
    pub fn apply_guess_text(&mut self, word: &str, outcome: &str) -> Result<usize> {
        let word = Word::new(word)?;
        let outcome = Outcome::parse(outcome)?;
        self.apply_guess(&word, &outcome)
    }

    /// Top `n` ranked guesses from the last solve
    #[must_use]
    pub fn best_guesses(&self, n: usize) -> &[RankedGuess] {
        &self.ranked[..n.min(self.ranked.len())]
    }

    /// Top `n` ranked guesses that could themselves be the answer
    #[must_use]
    pub fn best_wordles(&self, n: usize) -> Vec<&RankedGuess> {
        self.ranked
            .iter()
            .filter(|guess| guess.is_candidate)
            .take(n)
            .collect()
    }

    /// Rank the guess pool by how many candidates each guess eliminates
    /// on average, simulated over every candidate as the answer
    #[must_use]
    pub fn elimination_ranking(&self) -> Vec<EliminationScore> {
        rank_by_elimination(
            &self.candidates,
            &self.guesses,
            &self.scheduler,
            self.progress.as_deref(),
        )
    }

    #[must_use]
    pub fn status(&self) -> Status<'_> {
        match self.candidates.as_slice() {
            [] => Status::NoAnswer,
            [answer] => Status::Solved(answer),
            many => Status::Unsolved(many.len()),
        }
    }

    /// Whether at most one candidate remains
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.candidates.len() <= 1
    }

    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Full ranking from the last solve
    #[must_use]
    pub fn ranked(&self) -> &[RankedGuess] {
        &self.ranked
    }

    /// Everything learned from the guesses applied so far
    #[must_use]
    pub const fn knowledge(&self) -> &Knowledge {
        &self.knowledge
    }

    #[must_use]
    pub const fn options(&self) -> &SolverOptions {
        &self.options
    }
}

/// Drop repeated words, keeping the first occurrence
fn dedup(words: Vec<Word>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    words
        .into_iter()
        .filter(|word| seen.insert(word.clone()))
        .collect()
}
