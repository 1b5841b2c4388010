//! Partitioning candidates by the feedback a guess could receive
//!
//! Given a guess and the candidate pool, every one of the 243 outcomes is
//! turned into a [`Filter`] and the candidates it accepts are counted.
//! Outcomes whose filters are equal land in the same bucket and are only
//! counted once.

use super::strategy::Strategy;
use crate::core::{Filter, Outcome, Word};
use crate::error::Result;
use rustc_hash::FxHashMap;

/// Bucket sizes produced by one guess against a candidate pool
#[derive(Debug, Clone, Default)]
pub struct Partition {
    buckets: FxHashMap<Filter, usize>,
}

impl Partition {
    /// Partition `candidates` by every outcome `guess` could receive
    ///
    /// Cost is O(243 × candidates).
    ///
    /// # Examples
    /// ```
    /// use wordle_partition::core::Word;
    /// use wordle_partition::solver::Partition;
    ///
    /// let guess = Word::new("abcde").unwrap();
    /// let candidates = vec![Word::new("abcde").unwrap(), Word::new("edcba").unwrap()];
    ///
    /// let partition = Partition::compute(&guess, &candidates);
    /// assert_eq!(partition.bucket_count(), 2);
    /// assert_eq!(partition.largest(), 1);
    /// ```
    #[must_use]
    pub fn compute(guess: &Word, candidates: &[Word]) -> Self {
        let mut buckets = FxHashMap::default();

        for outcome in Outcome::all() {
            let filter = Filter::new(guess, &outcome);
            if buckets.contains_key(&filter) {
                continue;
            }
            let size = candidates.iter().filter(|&c| filter.contains(c)).count();
            buckets.insert(filter, size);
        }

        Self { buckets }
    }

    /// Sizes of the non-empty buckets, largest first
    #[must_use]
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes: Vec<usize> = self.buckets.values().copied().filter(|&s| s > 0).collect();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes
    }

    /// Number of non-empty buckets
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.values().filter(|&&s| s > 0).count()
    }

    /// Size of the largest bucket (worst-case remaining candidates)
    #[must_use]
    pub fn largest(&self) -> usize {
        self.buckets.values().copied().max().unwrap_or(0)
    }

    /// Non-empty buckets with their filters
    pub fn buckets(&self) -> impl Iterator<Item = (&Filter, usize)> {
        self.buckets
            .iter()
            .filter(|&(_, &size)| size > 0)
            .map(|(filter, &size)| (filter, size))
    }

    /// Reduce the bucket sizes to a score under `strategy`
    ///
    /// # Errors
    /// Returns `Error::NotImplemented` for strategies without a reduction.
    pub fn score(&self, strategy: Strategy) -> Result<f64> {
        strategy.reduce(&self.sizes())
    }
}

/// Score a single guess against the candidate pool
///
/// # Errors
/// Returns `Error::NotImplemented` for strategies without a reduction.
pub fn score_guess(guess: &Word, candidates: &[Word], strategy: Strategy) -> Result<f64> {
    strategy.ensure_implemented()?;
    Partition::compute(guess, candidates).score(strategy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn two_distinguishable_words_score_one() {
        let candidates = words(&["abcde", "edcba"]);

        for guess in &candidates {
            let score = score_guess(guess, &candidates, Strategy::WorstCase).unwrap();
            assert!((score - 1.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn indistinguishable_words_share_a_bucket() {
        let candidates = words(&["aaaaa", "bbbbb", "ccccc"]);
        let partition = Partition::compute(&word("zzzzz"), &candidates);

        assert_eq!(partition.largest(), 3);
        assert_eq!(partition.bucket_count(), 1);
        assert_eq!(partition.sizes(), vec![3]);
    }

    #[test]
    fn perfect_split_scores_one() {
        let candidates = words(&["slate", "zzzzz"]);
        let partition = Partition::compute(&word("slate"), &candidates);
        assert_eq!(partition.largest(), 1);
    }

    #[test]
    fn distinct_letter_guess_places_every_candidate_once() {
        let candidates = words(&["slate", "irate", "crate", "grate", "plate", "fuzzy"]);
        let partition = Partition::compute(&word("crane"), &candidates);

        assert_eq!(partition.sizes().iter().sum::<usize>(), candidates.len());
        // irate/grate give BGGBG, slate/plate give BBGBG
        assert_eq!(partition.largest(), 2);
    }

    #[test]
    fn buckets_match_outcome_grouping() {
        let candidates = words(&["slate", "irate", "crate", "grate", "plate", "fuzzy"]);
        let guess = word("crane");
        let partition = Partition::compute(&guess, &candidates);

        for (filter, size) in partition.buckets() {
            let members = candidates.iter().filter(|c| filter.contains(c)).count();
            assert_eq!(members, size);
        }
        assert_eq!(partition.bucket_count(), partition.buckets().count());
    }

    #[test]
    fn empty_candidates_score_zero() {
        let partition = Partition::compute(&word("crane"), &[]);
        assert_eq!(partition.largest(), 0);
        assert_eq!(partition.bucket_count(), 0);
        assert_eq!(partition.score(Strategy::WorstCase).unwrap(), 0.0);
    }

    #[test]
    fn better_split_scores_lower() {
        let candidates = words(&["aaaaa", "bbbbb"]);
        let bad = score_guess(&word("zzzzz"), &candidates, Strategy::WorstCase).unwrap();
        let good = score_guess(&word("aaaaa"), &candidates, Strategy::WorstCase).unwrap();
        assert!(good < bad);
    }

    #[test]
    fn unimplemented_strategy_is_rejected() {
        let candidates = words(&["slate", "crate"]);
        assert_eq!(
            score_guess(&word("crane"), &candidates, Strategy::SquareMeanRoot),
            Err(Error::NotImplemented(Strategy::SquareMeanRoot))
        );
    }
}
