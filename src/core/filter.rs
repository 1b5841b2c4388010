//! Constraint sets implied by one guess and its feedback
//!
//! A [`Filter`] is the canonical form of "every word consistent with this
//! outcome": which letters each position still allows, how many copies of
//! each letter are required, and whether that count is exact. Two outcomes
//! that constrain the candidates identically produce equal filters, which
//! lets the partitioning search use filters as bucket keys.

use super::outcome::{Feedback, Outcome};
use super::word::{ALPHABET_SIZE, WORD_LENGTH, Word, letter_char};
use std::fmt;

/// Bit mask with one bit per letter of the alphabet
type LetterSet = u32;

const ALL_LETTERS: LetterSet = (1 << ALPHABET_SIZE) - 1;

#[inline]
const fn bit(letter: u8) -> LetterSet {
    1 << letter
}

/// Constraints derived from one (guess, outcome) pair
///
/// Ordering compares the raw constraint tables; it only exists so filters
/// can be used as ordered map keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Filter {
    allowed: [LetterSet; WORD_LENGTH],
    min_counts: [u8; ALPHABET_SIZE],
    exact: LetterSet,
}

impl Filter {
    /// Build the filter for `guess` having received `outcome`
    ///
    /// - absent: the letter is ruled out at this position and its count is
    ///   capped at the copies already seen present/correct
    /// - present: ruled out at this position, one more copy required
    /// - correct: the only letter allowed at this position, one more copy required
    ///
    /// # Examples
    /// ```
    /// use wordle_partition::core::{Filter, Outcome, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let outcome = Outcome::parse("BBGBG").unwrap();
    /// let filter = Filter::new(&guess, &outcome);
    ///
    /// assert!(filter.contains(&Word::new("slate").unwrap()));
    /// assert!(!filter.contains(&Word::new("crate").unwrap()));
    /// ```
    #[must_use]
    pub fn new(guess: &Word, outcome: &Outcome) -> Self {
        let mut allowed = [ALL_LETTERS; WORD_LENGTH];
        let mut min_counts = [0u8; ALPHABET_SIZE];
        let mut pinned = [0u8; ALPHABET_SIZE];
        let mut exact: LetterSet = 0;

        for (i, &feedback) in outcome.feedback().iter().enumerate() {
            let letter = guess.letter_at(i);
            match feedback {
                Feedback::Absent => {
                    allowed[i] &= !bit(letter);
                    exact |= bit(letter);
                }
                Feedback::Present => {
                    allowed[i] &= !bit(letter);
                    min_counts[letter as usize] += 1;
                }
                Feedback::Correct => {
                    allowed[i] = bit(letter);
                    min_counts[letter as usize] += 1;
                    pinned[letter as usize] += 1;
                }
            }
        }

        // An exact count fully covered by greens bans the letter everywhere else
        for letter in 0..ALPHABET_SIZE as u8 {
            let l = letter as usize;
            if exact & bit(letter) != 0 && pinned[l] == min_counts[l] {
                for mask in &mut allowed {
                    if *mask != bit(letter) {
                        *mask &= !bit(letter);
                    }
                }
            }
        }

        Self {
            allowed,
            min_counts,
            exact,
        }
    }

    /// Check whether a word satisfies every constraint
    ///
    /// O(5 + 26), no allocation.
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        let positions_ok = word
            .letters()
            .iter()
            .zip(&self.allowed)
            .all(|(&letter, &mask)| mask & bit(letter) != 0);

        positions_ok
            && word
                .counts()
                .iter()
                .zip(&self.min_counts)
                .enumerate()
                .all(|(letter, (&count, &min))| {
                    if self.exact & bit(letter as u8) != 0 {
                        count == min
                    } else {
                        count >= min
                    }
                })
    }

    /// Whether a letter (alphabet index) is still allowed at a position
    #[must_use]
    pub const fn allows(&self, position: usize, letter: u8) -> bool {
        self.allowed[position] & bit(letter) != 0
    }

    /// Minimum number of copies of a letter a matching word must hold
    #[must_use]
    pub const fn min_count(&self, letter: u8) -> u8 {
        self.min_counts[letter as usize]
    }

    /// Whether the minimum for a letter is also its maximum
    #[must_use]
    pub const fn is_exact(&self, letter: u8) -> bool {
        self.exact & bit(letter) != 0
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for letter in 0..ALPHABET_SIZE as u8 {
            write!(f, "{:>2}", letter_char(letter))?;
        }
        writeln!(f)?;

        for position in 0..WORD_LENGTH {
            write!(f, "{position:>3}")?;
            for letter in 0..ALPHABET_SIZE as u8 {
                let cell = if self.allows(position, letter) { 'o' } else { '.' };
                write!(f, "{cell:>2}")?;
            }
            writeln!(f)?;
        }

        write!(f, "min")?;
        for min in &self.min_counts {
            write!(f, "{min:>2}")?;
        }
        writeln!(f)?;

        write!(f, "max")?;
        for letter in 0..ALPHABET_SIZE as u8 {
            let cell = if self.is_exact(letter) { '^' } else { '.' };
            write!(f, "{cell:>2}")?;
        }
        writeln!(f)
    }
}
