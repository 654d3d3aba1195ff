//! Strictly Guessing - a number guessing game behind a login gate.
//!
//! # Architecture
//!
//! - **Store**: flat-file credential store (`username:password` per line)
//! - **Auth**: username validation, registration and login over the store
//! - **Flow**: state machine from login through game to the replay/logout choice
//! - **TUI**: terminal screens that feed actions to the flow and render its events
//!
//! Game rules live in the `strictly_numbers` crate.
//!
//! # Example
//!
//! ```no_run
//! use strictly_guessing::{Action, AuthService, CredentialStore, FlowController};
//!
//! # fn example() -> anyhow::Result<()> {
//! let store = CredentialStore::load("users.txt")?;
//! let mut flow = FlowController::new(AuthService::new(store));
//! let events = flow.handle(Action::Login {
//!     username: "alice".to_string(),
//!     password: "secret".to_string(),
//! });
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod auth_service;
mod config;
mod flow;
mod store;
mod tui;

// Crate-level exports - Credential store
pub use store::{Credential, CredentialStore, DEFAULT_USERS_FILE, StoreError, StoreErrorKind};

// Crate-level exports - Auth
pub use auth_service::{AuthError, AuthService, validate_username};

// Crate-level exports - Flow
pub use flow::{Action, FlowController, FlowEvent, FlowState, Message, Phase, View};

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GateConfig};

// Crate-level exports - Terminal UI
pub use tui::{App, run_tui};

// Crate-level exports - Game types
pub use strictly_numbers::{
    GameOutcome, GameSession, Guess, GuessError, GuessResult, Hint, InputProblem, MAX_ATTEMPTS,
    SessionState,
};
