//! Game session state machine.
//!
//! A session starts `Active` and moves to `Won` or `Lost` exactly once.
//! Terminal sessions reject further guesses without touching the attempt
//! counter.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::{
    GameOutcome, Guess, GuessError, GuessResult, Hint, MAX_ATTEMPTS, MAX_SECRET, MIN_SECRET,
    SessionState,
};

/// One round of the guessing game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    secret: i32,
    attempts: u32,
    state: SessionState,
}

impl GameSession {
    /// Creates a session with a secret drawn from the thread-local RNG.
    #[instrument]
    pub fn new() -> Self {
        Self::from_rng(&mut rand::thread_rng())
    }

    /// Creates a session with a secret drawn uniformly from `1..=100`.
    #[instrument(skip(rng))]
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let secret = rng.gen_range(MIN_SECRET..=MAX_SECRET);
        debug!("New session created");
        Self {
            secret,
            attempts: 0,
            state: SessionState::Active,
        }
    }

    /// Creates a session with a fixed secret.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::SecretOutOfRange`] if `secret` is not in `1..=100`.
    #[instrument]
    pub fn with_secret(secret: i32) -> Result<Self, GuessError> {
        if !(MIN_SECRET..=MAX_SECRET).contains(&secret) {
            warn!(secret, "Rejected fixed secret");
            return Err(GuessError::SecretOutOfRange(secret));
        }
        Ok(Self {
            secret,
            attempts: 0,
            state: SessionState::Active,
        })
    }

    /// Applies one guess.
    ///
    /// Every accepted guess consumes an attempt, whatever its value.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::GameOver`] if the session is already `Won` or
    /// `Lost`. The attempt counter is left unchanged.
    #[instrument(skip(self), fields(attempts = self.attempts, state = ?self.state))]
    pub fn guess(&mut self, guess: Guess) -> Result<GuessResult, GuessError> {
        if self.state.is_terminal() {
            warn!("Guess rejected, session already finished");
            return Err(GuessError::GameOver);
        }

        self.attempts += 1;
        let value = guess.value();

        if value == self.secret {
            self.state = SessionState::Won;
            info!(attempts = self.attempts, "Secret found");
            return Ok(GuessResult::Finished(GameOutcome::Won {
                attempts: self.attempts,
                secret: self.secret,
            }));
        }

        if self.attempts >= MAX_ATTEMPTS {
            self.state = SessionState::Lost;
            info!(attempts = self.attempts, "Out of attempts");
            return Ok(GuessResult::Finished(GameOutcome::Lost {
                attempts: self.attempts,
                secret: self.secret,
            }));
        }

        let hint = if value < self.secret {
            Hint::Higher
        } else {
            Hint::Lower
        };
        debug!(attempts = self.attempts, hint = ?hint, "Wrong guess");

        Ok(GuessResult::Active {
            hint,
            attempts: self.attempts,
            remaining: self.remaining_attempts(),
        })
    }

    /// Returns the secret number.
    pub fn secret(&self) -> i32 {
        self.secret
    }

    /// Returns how many guesses have been made.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Returns how many guesses are left.
    pub fn remaining_attempts(&self) -> u32 {
        MAX_ATTEMPTS.saturating_sub(self.attempts)
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns true once the session is `Won` or `Lost`.
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Returns the final outcome, or `None` while the session is active.
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.state {
            SessionState::Active => None,
            SessionState::Won => Some(GameOutcome::Won {
                attempts: self.attempts,
                secret: self.secret,
            }),
            SessionState::Lost => Some(GameOutcome::Lost {
                attempts: self.attempts,
                secret: self.secret,
            }),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
