//! Error types shared across the solver
//!
//! Input problems are reported at the boundary where text becomes a [`Word`](crate::core::Word)
//! or an [`Outcome`](crate::core::Outcome), before any solver state is touched.

use crate::solver::Strategy;
use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Everything the solver can fail with
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A word, feedback string or strategy name could not be parsed
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// The configured strategy has no reduction implemented yet
    #[error("strategy `{0}` is not implemented")]
    NotImplemented(Strategy),

    /// No candidate answer is consistent with the feedback applied so far
    #[error("no candidate answers remain")]
    EmptyResult,
}

/// Why a piece of input text was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("\"{text}\" must be exactly {expected} letters")]
    WrongLength { text: String, expected: usize },

    #[error("\"{text}\" contains '{letter}', which is not a letter a-z")]
    InvalidLetter { text: String, letter: char },

    #[error("\"{text}\" is not a feedback string (use B/Y/G, one per letter)")]
    InvalidFeedback { text: String },

    #[error("unknown strategy \"{name}\"")]
    UnknownStrategy { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_error_converts_into_invalid_input() {
        let err: Error = InputError::InvalidFeedback {
            text: "bxg".to_string(),
        }
        .into();

        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(err.to_string().contains("bxg"));
    }

    #[test]
    fn not_implemented_names_the_strategy() {
        let err = Error::NotImplemented(Strategy::Mean);
        assert_eq!(err.to_string(), "strategy `mean` is not implemented");
    }
}
