//! Core domain types for Wordle
//!
//! Words, feedback outcomes and the constraint models built from them.
//! Everything here is pure: no I/O, no threads, no logging.

mod filter;
mod knowledge;
mod outcome;
mod word;

pub use filter::Filter;
pub use knowledge::{Knowledge, LetterCount};
pub use outcome::{Feedback, Odometer, Outcome};
pub use word::{ALPHABET_SIZE, WORD_LENGTH, Word, letter_char, letter_index};
