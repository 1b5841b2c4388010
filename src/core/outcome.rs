//! Per-position feedback for a guess
//!
//! An [`Outcome`] holds one [`Feedback`] per letter:
//! - Absent (gray): letter not in word, or no copies left to match
//! - Present (yellow): letter in word, wrong position
//! - Correct (green): letter in correct position
//!
//! [`Outcome::all`] walks every one of the 3^5 = 243 outcomes in a fixed
//! odometer order, which is what the partitioning search relies on.

use super::word::{ALPHABET_SIZE, WORD_LENGTH, Word};
use crate::error::InputError;
use std::fmt;
use std::str::FromStr;

/// Feedback for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feedback {
    Absent = 0,
    Present = 1,
    Correct = 2,
}

impl Feedback {
    /// Odometer successor: Absent -> Present -> Correct -> Absent
    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Absent => Self::Present,
            Self::Present => Self::Correct,
            Self::Correct => Self::Absent,
        }
    }

    /// Parse one feedback symbol
    ///
    /// Accepts:
    /// - 'B'/'b'/'-'/'_'/⬜/⬛ for absent
    /// - 'Y'/'y'/'.'/🟨 for present
    /// - 'G'/'g'/'!'/🟩 for correct
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            'B' | 'b' | '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            'Y' | 'y' | '.' | '🟨' => Some(Self::Present),
            'G' | 'g' | '!' | '🟩' => Some(Self::Correct),
            _ => None,
        }
    }

    /// Canonical text symbol
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Absent => 'B',
            Self::Present => 'Y',
            Self::Correct => 'G',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }
}

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Outcome([Feedback; WORD_LENGTH]);

impl Outcome {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Feedback::Correct; WORD_LENGTH]);

    /// All grays
    pub const ALL_ABSENT: Self = Self([Feedback::Absent; WORD_LENGTH]);

    /// Number of distinct outcomes (3^5)
    pub const COUNT: usize = 243;

    #[inline]
    #[must_use]
    pub const fn new(feedback: [Feedback; WORD_LENGTH]) -> Self {
        Self(feedback)
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &[Feedback; WORD_LENGTH] {
        &self.0
    }

    /// Feedback at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn get(&self, position: usize) -> Feedback {
        self.0[position]
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Base-3 value (0-242), position 0 least significant
    #[must_use]
    pub fn value(&self) -> u8 {
        self.0
            .iter()
            .rev()
            .fold(0u8, |acc, &f| acc * 3 + f as u8)
    }

    /// Calculate the outcome when `guess` is played and `answer` is the target
    ///
    /// Follows the puzzle's colouring rules for duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches (greens) and remove them from the pool
    /// 2. Second pass: mark present-but-wrong-position (yellows) left to right
    ///    while copies remain in the pool
    ///
    /// # Examples
    /// ```
    /// use wordle_partition::core::{Outcome, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    ///
    /// let outcome = Outcome::calculate(&guess, &answer);
    /// assert_eq!(outcome.to_string(), "BBGBG");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut result = [Feedback::Absent; WORD_LENGTH];
        let mut available: [u8; ALPHABET_SIZE] = *answer.counts();

        for (i, slot) in result.iter_mut().enumerate() {
            let letter = guess.letter_at(i);
            if letter == answer.letter_at(i) {
                *slot = Feedback::Correct;
                available[letter as usize] -= 1;
            }
        }

        for (i, slot) in result.iter_mut().enumerate() {
            if *slot == Feedback::Absent {
                let remaining = &mut available[guess.letter_at(i) as usize];
                if *remaining > 0 {
                    *slot = Feedback::Present;
                    *remaining -= 1;
                }
            }
        }

        Self(result)
    }

    /// Parse an outcome from text like "GYBBY" or "🟩🟨⬜⬜🟨"
    ///
    /// # Errors
    /// Returns `InputError::InvalidFeedback` unless the text is exactly five
    /// recognised symbols.
    ///
    /// # Examples
    /// ```
    /// use wordle_partition::core::Outcome;
    ///
    /// let a = Outcome::parse("GY-GY").unwrap();
    /// let b = Outcome::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(a, b);
    /// assert!(Outcome::parse("GYX").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, InputError> {
        let invalid = || InputError::InvalidFeedback {
            text: text.to_string(),
        };

        let symbols: Vec<char> = text.trim().chars().collect();
        if symbols.len() != WORD_LENGTH {
            return Err(invalid());
        }

        let mut feedback = [Feedback::Absent; WORD_LENGTH];
        for (slot, &c) in feedback.iter_mut().zip(&symbols) {
            *slot = Feedback::from_symbol(c).ok_or_else(invalid)?;
        }

        Ok(Self(feedback))
    }

    /// Convert outcome to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }

    /// Every possible outcome, in odometer order
    ///
    /// Position 0 turns fastest; each position cycles
    /// absent -> present -> correct and carries into the next on wraparound.
    ///
    /// ```
    /// use wordle_partition::core::Outcome;
    ///
    /// let all: Vec<Outcome> = Outcome::all().collect();
    /// assert_eq!(all.len(), Outcome::COUNT);
    /// assert_eq!(all[0], Outcome::ALL_ABSENT);
    /// assert_eq!(all[1].to_string(), "YBBBB");
    /// assert_eq!(all[242], Outcome::PERFECT);
    /// ```
    #[must_use]
    pub const fn all() -> Odometer {
        Odometer {
            current: Some(Self::ALL_ABSENT),
        }
    }
}

/// Iterator over all outcomes, see [`Outcome::all`]
#[derive(Debug, Clone)]
pub struct Odometer {
    current: Option<Outcome>,
}

impl Iterator for Odometer {
    type Item = Outcome;

    fn next(&mut self) -> Option<Outcome> {
        let outcome = self.current?;

        let mut advanced = outcome;
        let mut rolled_over = true;
        for f in &mut advanced.0 {
            *f = f.next();
            // only move on to the next position if this one wrapped
            if *f != Feedback::Absent {
                rolled_over = false;
                break;
            }
        }

        self.current = (!rolled_over).then_some(advanced);
        Some(outcome)
    }
}

impl FromStr for Outcome {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for feedback in &self.0 {
            write!(f, "{}", feedback.symbol())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[rstest]
    #[case("crane", "slate", "BBGBG")]
    #[case("abcde", "fghij", "BBBBB")]
    #[case("crane", "crane", "GGGGG")]
    // S(yellow) P(gray) E(yellow) E(yellow) D(gray)
    #[case("speed", "erase", "YBYYB")]
    // First O is yellow, second O is green
    #[case("robot", "floor", "YYBGB")]
    // Only one E in the answer, and it is matched green
    #[case("geese", "those", "BBBGG")]
    // Green E consumes one copy, the earlier E takes the spare
    #[case("lever", "eaten", "BYBGB")]
    // The only L is matched green, extra L's stay gray
    #[case("lolly", "world", "BGBGB")]
    fn outcome_calculate(#[case] guess: &str, #[case] answer: &str, #[case] expected: &str) {
        let outcome = Outcome::calculate(&word(guess), &word(answer));
        assert_eq!(outcome.to_string(), expected);
    }

    #[test]
    fn outcome_self_is_perfect() {
        for text in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            let w = word(text);
            assert!(Outcome::calculate(&w, &w).is_perfect());
        }
    }

    #[rstest]
    #[case("GYBBY")]
    #[case("gy-_y")]
    #[case("!.__.")]
    #[case("🟩🟨⬜⬛🟨")]
    fn outcome_parse_accepts_symbol_sets(#[case] text: &str) {
        let outcome = Outcome::parse(text).unwrap();
        assert_eq!(outcome.to_string(), "GYBBY");
    }

    #[rstest]
    #[case("GYBBYB")]
    #[case("GYB")]
    #[case("GXBBY")]
    #[case("")]
    fn outcome_parse_rejects(#[case] text: &str) {
        assert!(matches!(
            Outcome::parse(text),
            Err(InputError::InvalidFeedback { .. })
        ));
    }

    #[test]
    fn outcome_emoji() {
        let outcome = Outcome::parse("GYBGY").unwrap();
        assert_eq!(outcome.to_emoji(), "🟩🟨⬜🟩🟨");
    }

    #[test]
    fn outcome_value_is_base_three() {
        // G=2, Y=1, G=2, -=0, -=0
        // 2 + 1×3 + 2×9 + 0×27 + 0×81 = 23
        assert_eq!(Outcome::parse("GYGBB").unwrap().value(), 23);
        assert_eq!(Outcome::PERFECT.value(), 242);
        assert_eq!(Outcome::ALL_ABSENT.value(), 0);
    }

    #[test]
    fn odometer_visits_every_outcome_once_in_order() {
        let all: Vec<Outcome> = Outcome::all().collect();
        assert_eq!(all.len(), Outcome::COUNT);

        let distinct: HashSet<Outcome> = all.iter().copied().collect();
        assert_eq!(distinct.len(), Outcome::COUNT);

        // odometer order is counting order of the base-3 value
        for (i, outcome) in all.iter().enumerate() {
            assert_eq!(usize::from(outcome.value()), i);
        }
    }

    #[test]
    fn odometer_carries_on_wraparound() {
        let all: Vec<String> = Outcome::all().take(4).map(|o| o.to_string()).collect();
        assert_eq!(all, ["BBBBB", "YBBBB", "GBBBB", "BYBBB"]);
    }
}
