//! Wordle word representation
//!
//! A Word stores its letters as alphabet indices (0 = 'a') together with a
//! per-letter occurrence histogram, so constraint checks never touch text.

use crate::error::InputError;
use std::fmt;
use std::str::FromStr;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// A 5-letter word with its letter histogram
///
/// Ordering is lexicographic on the text, which is what ranking uses to
/// break score ties.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    letters: [u8; WORD_LENGTH],
    counts: [u8; ALPHABET_SIZE],
}

/// Alphabet index of a character, case-insensitive
#[inline]
#[must_use]
pub fn letter_index(c: char) -> Option<u8> {
    c.is_ascii_alphabetic()
        .then(|| c.to_ascii_lowercase() as u8 - b'a')
}

/// Lowercase character for an alphabet index
///
/// # Panics
/// Panics in debug mode if `letter >= 26`
#[inline]
#[must_use]
pub const fn letter_char(letter: u8) -> char {
    debug_assert!((letter as usize) < ALPHABET_SIZE);
    (b'a' + letter) as char
}

impl Word {
    /// Create a new Word from text
    ///
    /// # Errors
    /// Returns `InputError` if:
    /// - Length is not exactly 5 characters
    /// - Any character is outside a-z (either case)
    ///
    /// # Examples
    /// ```
    /// use wordle_partition::core::Word;
    ///
    /// let word = Word::new("AdElE").unwrap();
    /// assert_eq!(word.text(), "adele");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, InputError> {
        let length = text.chars().count();
        if length != WORD_LENGTH {
            return Err(InputError::WrongLength {
                text: text.to_string(),
                expected: WORD_LENGTH,
            });
        }

        let mut letters = [0u8; WORD_LENGTH];
        let mut counts = [0u8; ALPHABET_SIZE];

        for (slot, c) in letters.iter_mut().zip(text.chars()) {
            let letter = letter_index(c).ok_or_else(|| InputError::InvalidLetter {
                text: text.to_string(),
                letter: c,
            })?;
            *slot = letter;
            counts[letter as usize] += 1;
        }

        Ok(Self { letters, counts })
    }

    /// The word as lowercase text
    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().map(|&l| letter_char(l)).collect()
    }

    /// Alphabet indices of the letters, in position order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Alphabet index of the letter at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Character at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> char {
        letter_char(self.letters[position])
    }

    /// How many times a letter (alphabet index) occurs
    #[inline]
    #[must_use]
    pub const fn count(&self, letter: u8) -> u8 {
        self.counts[letter as usize]
    }

    /// The full letter histogram, indexed by alphabet position
    #[inline]
    #[must_use]
    pub const fn counts(&self) -> &[u8; ALPHABET_SIZE] {
        &self.counts
    }

    /// Check if the word contains a letter (alphabet index)
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: u8) -> bool {
        self.counts[letter as usize] > 0
    }
}

impl FromStr for Word {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &letter in &self.letters {
            write!(f, "{}", letter_char(letter))?;
        }
        Ok(())
    }
}
