//! Core domain types for the guessing game.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Smallest secret number a session can pick.
pub const MIN_SECRET: i32 = 1;

/// Largest secret number a session can pick.
pub const MAX_SECRET: i32 = 100;

/// Number of guesses a player gets per session.
pub const MAX_ATTEMPTS: u32 = 5;

/// Direction hint returned after a wrong guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Hint {
    /// The secret is larger than the guess.
    #[strum(to_string = "Try a higher number!")]
    Higher,
    /// The secret is smaller than the guess.
    #[strum(to_string = "Try a lower number!")]
    Lower,
}

/// Lifecycle state of a [`GameSession`](crate::GameSession).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SessionState {
    /// Guesses are accepted.
    #[default]
    Active,
    /// The secret was found.
    Won,
    /// All attempts were used without finding the secret.
    Lost,
}

impl SessionState {
    /// Returns true for `Won` and `Lost`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// Final result of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameOutcome {
    /// Player found the secret.
    #[display("You guessed it in {attempts} attempt(s)! The number was: {secret}")]
    Won {
        /// Guesses used, including the winning one.
        attempts: u32,
        /// The secret number.
        secret: i32,
    },
    /// Player ran out of attempts.
    #[display("You've used all your attempts. The number was: {secret}")]
    Lost {
        /// Guesses used (always [`MAX_ATTEMPTS`]).
        attempts: u32,
        /// The secret number.
        secret: i32,
    },
}

impl GameOutcome {
    /// Returns the secret number revealed by this outcome.
    #[instrument]
    pub fn secret(&self) -> i32 {
        match self {
            Self::Won { secret, .. } | Self::Lost { secret, .. } => *secret,
        }
    }

    /// Returns the number of guesses used.
    #[instrument]
    pub fn attempts(&self) -> u32 {
        match self {
            Self::Won { attempts, .. } | Self::Lost { attempts, .. } => *attempts,
        }
    }

    /// Returns true if the player won.
    pub fn is_win(&self) -> bool {
        matches!(self, Self::Won { .. })
    }
}

/// Result of a single accepted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessResult {
    /// Wrong guess with attempts left.
    Active {
        /// Which way to go next.
        hint: Hint,
        /// Guesses used so far.
        attempts: u32,
        /// Guesses still available.
        remaining: u32,
    },
    /// The guess ended the session.
    Finished(GameOutcome),
}
