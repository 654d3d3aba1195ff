//! Screen trait and key outcome type for the terminal front end.

use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::{Action, FlowEvent};

/// The result of handling a key press on a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Nothing for the flow controller; the screen may have updated itself.
    Stay,
    /// Submit an action to the flow controller.
    Submit(Action),
    /// Exit the application.
    Quit,
}

/// Trait implemented by each screen of the front end.
///
/// Screens own their input state only. Everything else arrives through
/// [`Screen::apply`] as a [`FlowEvent`].
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame);

    /// Handles a key event and returns the resulting [`KeyOutcome`].
    fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome;

    /// Applies a presentation event addressed to this screen.
    fn apply(&mut self, event: &FlowEvent);
}
