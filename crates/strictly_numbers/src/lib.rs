//! Strictly Numbers - pure number-guessing game logic.
//!
//! A [`GameSession`] holds a secret number in `1..=100` and gives the player
//! [`MAX_ATTEMPTS`] guesses to find it. Each wrong guess yields a [`Hint`];
//! the session ends in [`GameOutcome::Won`] or [`GameOutcome::Lost`].
//!
//! # Example
//!
//! ```
//! use strictly_numbers::{GameSession, Guess, GuessResult, Hint};
//!
//! let mut session = GameSession::with_secret(70).unwrap();
//! let result = session.guess(Guess::new(30)).unwrap();
//! assert!(matches!(result, GuessResult::Active { hint: Hint::Higher, .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod guess;
mod session;
mod types;

pub use error::{GuessError, InputProblem};
pub use guess::Guess;
pub use session::GameSession;
pub use types::{GameOutcome, GuessResult, Hint, MAX_ATTEMPTS, MAX_SECRET, MIN_SECRET, SessionState};
