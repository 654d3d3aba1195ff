//! Flow states.

use strictly_numbers::{GameOutcome, GameSession};

/// Coarse phase of the application, for logging and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Phase {
    /// Nobody is authenticated.
    LoggedOut,
    /// Identity established, no game yet. Login passes through this phase
    /// on its way to [`Phase::Playing`]; no [`FlowState`] holds it.
    LoggedIn,
    /// A game session is running.
    Playing,
    /// The last game finished; waiting for replay or logout.
    Ended,
}

/// Full application state owned by the [`FlowController`](crate::FlowController).
///
/// At most one identity and one game session exist at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FlowState {
    /// Login form.
    #[default]
    LoggedOut,
    /// Guessing.
    Playing {
        /// Authenticated user.
        username: String,
        /// The current game.
        session: GameSession,
    },
    /// Game finished.
    Ended {
        /// Authenticated user.
        username: String,
        /// How the game ended.
        outcome: GameOutcome,
    },
}

impl FlowState {
    /// Returns the phase of this state.
    pub fn phase(&self) -> Phase {
        match self {
            Self::LoggedOut => Phase::LoggedOut,
            Self::Playing { .. } => Phase::Playing,
            Self::Ended { .. } => Phase::Ended,
        }
    }

    /// Returns the authenticated user, if any.
    pub fn username(&self) -> Option<&str> {
        match self {
            Self::LoggedOut => None,
            Self::Playing { username, .. }
            | Self::Ended { username, .. } => Some(username),
        }
    }

    /// Returns the running game session, if any.
    pub fn session(&self) -> Option<&GameSession> {
        match self {
            Self::Playing { session, .. } => Some(session),
            _ => None,
        }
    }

    /// Returns the outcome of the finished game, if any.
    pub fn outcome(&self) -> Option<&GameOutcome> {
        match self {
            Self::Ended { outcome, .. } => Some(outcome),
            _ => None,
        }
    }
}
