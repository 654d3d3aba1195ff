//! Application flow: login gate, game and end-of-game choice.
//!
//! The flow is a plain state machine: (state, [`Action`]) → (state,
//! [`FlowEvent`]s). Rendering lives elsewhere.

mod controller;
mod event;
mod state;

pub use controller::FlowController;
pub use event::{Action, FlowEvent, Message, View};
pub use state::{FlowState, Phase};
