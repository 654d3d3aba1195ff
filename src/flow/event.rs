//! Inputs to and outputs from the flow controller.
//!
//! The front end turns user input into an [`Action`], hands it to
//! [`FlowController::handle`](crate::FlowController::handle), and renders the
//! [`FlowEvent`]s it gets back. It never touches flow state directly.

use strictly_numbers::{GameOutcome, GuessError, Hint};

use crate::AuthError;

/// A user action submitted by the front end.
#[derive(Clone, PartialEq, Eq)]
pub enum Action {
    /// Register button on the login form.
    Register {
        /// Username as typed (trimmed by the controller).
        username: String,
        /// Password as typed.
        password: String,
    },
    /// Login button on the login form.
    Login {
        /// Username as typed (trimmed by the controller).
        username: String,
        /// Password as typed.
        password: String,
    },
    /// Raw text submitted from the guess field.
    Guess(String),
    /// "Play again" on the end-of-game choice.
    Replay,
    /// Leave the game and return to the login form.
    Logout,
}

impl std::fmt::Debug for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Register { username, .. } => f
                .debug_struct("Register")
                .field("username", username)
                .finish_non_exhaustive(),
            Self::Login { username, .. } => f
                .debug_struct("Login")
                .field("username", username)
                .finish_non_exhaustive(),
            Self::Guess(input) => f.debug_tuple("Guess").field(input).finish(),
            Self::Replay => f.write_str("Replay"),
            Self::Logout => f.write_str("Logout"),
        }
    }
}

/// Which screen the front end should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum View {
    /// Login / register form.
    Login,
    /// Guess form.
    Game,
    /// End-of-game choice.
    GameOver,
}

/// Status line text produced by the controller.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Message {
    /// Registration succeeded.
    #[display("Registration successful! You can now log in.")]
    Registered,
    /// A register or login request was refused.
    #[display("{}", _0)]
    Auth(AuthError),
    /// A new game has started.
    #[display("Welcome, {username}! You have {attempts} attempts!")]
    Welcome {
        /// Logged-in player.
        username: String,
        /// Guesses available this game.
        attempts: u32,
    },
    /// Direction hint after a wrong guess.
    #[display("{}", _0)]
    Hint(Hint),
    /// A guess could not be applied.
    #[display("{}", _0)]
    Guess(GuessError),
    /// The player logged out.
    #[display("Logged out.")]
    LoggedOut,
    /// The credentials file could not be read at startup.
    #[display("Warning: could not read saved accounts ({}). Registration is disabled until the file is fixed.", _0)]
    StoreUnavailable(String),
}

impl Message {
    /// Returns true for messages that report a failure.
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Self::Auth(_) | Self::Guess(_) | Self::StoreUnavailable(_)
        )
    }
}

/// Presentation command emitted by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    /// Switch to another screen. Later events in the same batch target it.
    Navigate(View),
    /// Replace the status line.
    ShowMessage(Message),
    /// Update the attempt counter.
    ShowAttempts {
        /// Guesses used.
        used: u32,
        /// Guesses allowed.
        max: u32,
    },
    /// Present the final result with the replay / logout choice.
    ShowOutcome(GameOutcome),
}
