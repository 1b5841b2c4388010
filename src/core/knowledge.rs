//! Letter knowledge extracted by comparing two words
//!
//! [`Knowledge`] is the coarse view of a guess: the positions known for
//! certain plus an "at least" / "exactly" count per guessed letter. It
//! deliberately ignores which duplicate copy was the misplaced one, so
//! a guess with repeated letters never produces an ambiguous claim.

use super::outcome::{Feedback, Outcome};
use super::word::{ALPHABET_SIZE, WORD_LENGTH, Word, letter_char};
use std::fmt;
use std::ops::{Add, AddAssign};

/// Known number of copies of a letter
///
/// Ordered so that the stricter claim is larger: any `Exactly` beats any
/// `AtLeast`, and within one kind the larger count wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterCount {
    AtLeast(u8),
    Exactly(u8),
}

impl LetterCount {
    /// Check whether a word holding `count` copies is consistent
    #[inline]
    #[must_use]
    pub const fn admits(self, count: u8) -> bool {
        match self {
            Self::AtLeast(n) => count >= n,
            Self::Exactly(n) => count == n,
        }
    }
}

/// Positions and letter counts known about the answer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Knowledge {
    positions: [Option<u8>; WORD_LENGTH],
    counts: [Option<LetterCount>; ALPHABET_SIZE],
}

impl Knowledge {
    /// What playing `guess` reveals when the answer is `target`
    ///
    /// 1. Every position where the letters agree becomes known.
    /// 2. For each distinct guessed letter with `f` copies in the guess:
    ///    - absent from the target: exactly 0
    ///    - `f` <= target copies: at least `f`
    ///    - `f` > target copies: exactly the target's count
    ///
    /// # Examples
    /// ```
    /// use wordle_partition::core::{Knowledge, LetterCount, Word};
    ///
    /// let target = Word::new("those").unwrap();
    /// let guess = Word::new("geese").unwrap();
    /// let known = Knowledge::gather(&target, &guess);
    ///
    /// // three e's guessed, one in the answer
    /// assert_eq!(known.letter_count(4), Some(LetterCount::Exactly(1)));
    /// assert!(known.admits(&target));
    /// ```
    #[must_use]
    pub fn gather(target: &Word, guess: &Word) -> Self {
        let mut known = Self::default();

        for (i, slot) in known.positions.iter_mut().enumerate() {
            if target.letter_at(i) == guess.letter_at(i) {
                *slot = Some(target.letter_at(i));
            }
        }

        for (letter, &guessed) in guess.counts().iter().enumerate() {
            if guessed == 0 {
                continue;
            }
            let available = target.counts()[letter];
            known.counts[letter] = Some(if available == 0 {
                LetterCount::Exactly(0)
            } else if guessed <= available {
                LetterCount::AtLeast(guessed)
            } else {
                LetterCount::Exactly(available)
            });
        }

        known
    }

    /// Knowledge implied by an observed outcome
    ///
    /// A gray copy caps the letter at the number of copies already seen
    /// present or correct in the same guess.
    #[must_use]
    pub fn from_outcome(guess: &Word, outcome: &Outcome) -> Self {
        let mut known = Self::default();

        for (i, &feedback) in outcome.feedback().iter().enumerate() {
            let letter = guess.letter_at(i);
            let entry = &mut known.counts[letter as usize];

            match feedback {
                Feedback::Absent => {
                    let seen = match *entry {
                        Some(LetterCount::AtLeast(n) | LetterCount::Exactly(n)) => n,
                        None => 0,
                    };
                    *entry = Some(LetterCount::Exactly(seen));
                }
                Feedback::Present | Feedback::Correct => {
                    if feedback == Feedback::Correct {
                        known.positions[i] = Some(letter);
                    }
                    *entry = Some(match *entry {
                        Some(LetterCount::AtLeast(n)) => LetterCount::AtLeast(n + 1),
                        Some(LetterCount::Exactly(n)) => LetterCount::Exactly(n + 1),
                        None => LetterCount::AtLeast(1),
                    });
                }
            }
        }

        known
    }

    /// Check whether a word is consistent with everything known
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        let positions_ok = self
            .positions
            .iter()
            .zip(word.letters())
            .all(|(known, &letter)| known.is_none_or(|k| k == letter));

        positions_ok
            && self
                .counts
                .iter()
                .zip(word.counts())
                .all(|(known, &count)| known.is_none_or(|k| k.admits(count)))
    }

    /// Number of words in `pool` this knowledge rules out
    #[must_use]
    pub fn eliminated(&self, pool: &[Word]) -> usize {
        pool.iter().filter(|w| !self.admits(w)).count()
    }

    /// Letter (alphabet index) known at a position
    #[must_use]
    pub const fn position(&self, position: usize) -> Option<u8> {
        self.positions[position]
    }

    /// Count constraint for a letter (alphabet index)
    #[must_use]
    pub const fn letter_count(&self, letter: u8) -> Option<LetterCount> {
        self.counts[letter as usize]
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.iter().all(Option::is_none) && self.counts.iter().all(Option::is_none)
    }
}

impl AddAssign<&Knowledge> for Knowledge {
    fn add_assign(&mut self, other: &Knowledge) {
        for (mine, theirs) in self.positions.iter_mut().zip(&other.positions) {
            if theirs.is_some() {
                *mine = *theirs;
            }
        }
        for (mine, theirs) in self.counts.iter_mut().zip(&other.counts) {
            // None sorts below Some, so max keeps the stricter claim
            *mine = (*mine).max(*theirs);
        }
    }
}

impl Add for Knowledge {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += &other;
        self
    }
}

impl fmt::Display for Knowledge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for known in &self.positions {
            match known {
                Some(letter) => write!(f, "{}", letter_char(*letter))?,
                None => write!(f, "_")?,
            }
        }

        write!(f, " ")?;
        for (letter, known) in self.counts.iter().enumerate() {
            let c = letter_char(letter as u8);
            match known {
                Some(LetterCount::AtLeast(n)) => write!(f, "[{c}>={n}]")?,
                Some(LetterCount::Exactly(n)) => write!(f, "[{c}=={n}]")?,
                None => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::word::letter_index;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn idx(c: char) -> u8 {
        letter_index(c).unwrap()
    }

    #[test]
    fn gather_records_matching_positions() {
        let known = Knowledge::gather(&word("slate"), &word("crane"));

        assert_eq!(known.position(2), Some(idx('a')));
        assert_eq!(known.position(4), Some(idx('e')));
        assert_eq!(known.position(0), None);
    }

    #[test]
    fn gather_count_rules() {
        // target "kebab": k1 e1 b2 a1
        let known = Knowledge::gather(&word("kebab"), &word("abbey"));

        assert_eq!(known.letter_count(idx('a')), Some(LetterCount::AtLeast(1)));
        // two b's guessed, two in the target: equal counts stay "at least"
        assert_eq!(known.letter_count(idx('b')), Some(LetterCount::AtLeast(2)));
        assert_eq!(known.letter_count(idx('y')), Some(LetterCount::Exactly(0)));
        assert_eq!(known.letter_count(idx('k')), None);

        // over-guessed letter pins the exact count
        let known = Knowledge::gather(&word("those"), &word("geese"));
        assert_eq!(known.letter_count(idx('e')), Some(LetterCount::Exactly(1)));
        assert_eq!(known.letter_count(idx('g')), Some(LetterCount::Exactly(0)));
        assert_eq!(known.letter_count(idx('s')), Some(LetterCount::AtLeast(1)));
    }

    #[test]
    fn gathered_knowledge_admits_target() {
        let words = ["crane", "slate", "geese", "those", "kebab", "abbey", "mamma", "fuzzy"];
        for target in words {
            for guess in words {
                let (t, g) = (word(target), word(guess));
                assert!(
                    Knowledge::gather(&t, &g).admits(&t),
                    "{guess} against {target}"
                );
            }
        }
    }

    #[test]
    fn admits_rejects_position_and_count_mismatches() {
        let known = Knowledge::gather(&word("slate"), &word("crane"));

        assert!(known.admits(&word("slate")));
        // c and r must be absent
        assert!(!known.admits(&word("crate")));
        // a must be at position 2
        assert!(!known.admits(&word("aloes")));
    }

    #[test]
    fn from_outcome_matches_gray_after_yellow() {
        // one e yellow, the second e gray: exactly one e
        let known = Knowledge::from_outcome(&word("geese"), &Outcome::parse("BYBBB").unwrap());
        assert_eq!(known.letter_count(idx('e')), Some(LetterCount::Exactly(1)));
        assert_eq!(known.letter_count(idx('g')), Some(LetterCount::Exactly(0)));

        // gray first, yellow later still ends at exactly one
        let known = Knowledge::from_outcome(&word("eerie"), &Outcome::parse("BYBBB").unwrap());
        assert_eq!(known.letter_count(idx('e')), Some(LetterCount::Exactly(1)));
    }

    #[test]
    fn from_outcome_records_greens() {
        let known = Knowledge::from_outcome(&word("crane"), &Outcome::parse("BBGBG").unwrap());
        assert_eq!(known.position(2), Some(idx('a')));
        assert_eq!(known.position(4), Some(idx('e')));
        assert_eq!(known.letter_count(idx('a')), Some(LetterCount::AtLeast(1)));
        assert!(known.admits(&word("slate")));
    }

    #[test]
    fn add_keeps_stricter_claims() {
        let first = Knowledge::gather(&word("kebab"), &word("abbey"));
        let second = Knowledge::gather(&word("kebab"), &word("bobby"));
        // bobby: three b's guessed, two in the target
        let combined = first.clone() + second;

        assert_eq!(combined.letter_count(idx('b')), Some(LetterCount::Exactly(2)));
        assert_eq!(combined.letter_count(idx('a')), Some(LetterCount::AtLeast(1)));
        assert_eq!(combined.letter_count(idx('o')), Some(LetterCount::Exactly(0)));
        assert_eq!(combined.position(2), Some(idx('b')));
        assert!(combined.admits(&word("kebab")));
        assert!(!first.is_empty());
    }

    #[test]
    fn eliminated_counts_rejected_words() {
        let pool: Vec<Word> = ["slate", "crate", "plate", "fuzzy"].iter().map(|w| word(w)).collect();
        let known = Knowledge::gather(&word("slate"), &word("crane"));
        // crate (c, r) and fuzzy (no a/e) are ruled out
        assert_eq!(known.eliminated(&pool), 2);
    }

    #[test]
    fn display_lists_positions_and_counts() {
        let known = Knowledge::gather(&word("slate"), &word("crane"));
        assert_eq!(known.to_string(), "__a_e [a>=1][c==0][e>=1][n==0][r==0]");
        assert!(Knowledge::default().is_empty());
    }
}
