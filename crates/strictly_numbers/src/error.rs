//! Errors raised while parsing or applying a guess.

use crate::{MAX_SECRET, MIN_SECRET};

/// Why a piece of guess input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputProblem {
    /// Nothing was typed (or only whitespace).
    #[display("Please enter a valid number!")]
    Empty,
    /// Text that is not a whole number.
    #[display("Please enter numbers only!")]
    NotANumber(String),
}

/// Error that can occur when creating a session or making a guess.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GuessError {
    /// Guess input could not be parsed; no attempt is consumed.
    #[display("{}", _0)]
    InvalidInput(InputProblem),

    /// The session already ended in a win or a loss.
    #[display("The game is over")]
    GameOver,

    /// A fixed secret was outside the playable range.
    #[display("Secret {} is outside {}..={}", _0, MIN_SECRET, MAX_SECRET)]
    SecretOutOfRange(i32),
}

impl std::error::Error for GuessError {}

impl From<InputProblem> for GuessError {
    fn from(problem: InputProblem) -> Self {
        Self::InvalidInput(problem)
    }
}
