//! Ranked guesses produced by a solving round

use crate::core::Word;
use std::cmp::Ordering;

/// One scored guess
#[derive(Debug, Clone, PartialEq)]
pub struct RankedGuess {
    pub word: Word,
    /// Whether the guess could itself be the answer
    pub is_candidate: bool,
    /// Strategy score, lower is better
    pub score: f64,
}

impl RankedGuess {
    /// Ranking order: score ascending, then word text
    #[must_use]
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| self.word.cmp(&other.word))
    }
}

/// Sort guesses into ranking order
///
/// The word tie-break makes the order independent of evaluation order.
pub fn sort_ranked(guesses: &mut [RankedGuess]) {
    guesses.sort_by(RankedGuess::rank_cmp);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(text: &str, score: f64) -> RankedGuess {
        RankedGuess {
            word: Word::new(text).unwrap(),
            is_candidate: false,
            score,
        }
    }

    #[test]
    fn sorts_by_score_then_word() {
        let mut guesses = vec![
            ranked("slate", 3.0),
            ranked("crane", 2.0),
            ranked("abbey", 3.0),
            ranked("trace", 2.0),
        ];
        sort_ranked(&mut guesses);

        let order: Vec<String> = guesses.iter().map(|g| g.word.text()).collect();
        assert_eq!(order, ["crane", "trace", "abbey", "slate"]);
    }

    #[test]
    fn order_is_independent_of_input_order() {
        let mut forward = vec![ranked("aaaaa", 1.0), ranked("bbbbb", 1.0), ranked("ccccc", 0.0)];
        let mut backward: Vec<RankedGuess> = forward.iter().rev().cloned().collect();

        sort_ranked(&mut forward);
        sort_ranked(&mut backward);
        assert_eq!(forward, backward);
    }
}
