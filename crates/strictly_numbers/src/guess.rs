//! Guess values and input parsing.
//!
//! Parsing happens before a guess reaches the session, so rejected input
//! never consumes an attempt.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{GuessError, InputProblem};

/// A number submitted by the player.
///
/// Any `i32` is a valid guess. Values outside the secret range are allowed
/// and count as an ordinary wrong guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{}", _0)]
pub struct Guess(i32);

impl Guess {
    /// Creates a guess from a number.
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the guessed number.
    pub fn value(self) -> i32 {
        self.0
    }

    /// Parses raw form input.
    ///
    /// Surrounding whitespace is ignored and a leading sign is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::InvalidInput`] for empty input or anything that
    /// is not a whole number within `i32`.
    #[instrument]
    pub fn parse(input: &str) -> Result<Self, GuessError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            debug!("Empty guess input");
            return Err(InputProblem::Empty.into());
        }

        trimmed.parse::<i32>().map(Self).map_err(|e| {
            debug!(error = %e, "Guess input is not a number");
            InputProblem::NotANumber(trimmed.to_string()).into()
        })
    }
}

impl FromStr for Guess {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<i32> for Guess {
    fn from(value: i32) -> Self {
        Self(value)
    }
}
