//! Application shell: routes keys to the active screen and flow events back.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use tracing::{debug, info, instrument, warn};

use crate::tui::screen::{KeyOutcome, Screen};
use crate::tui::screens::{GameOverScreen, GameScreen, LoginScreen};
use crate::{FlowController, FlowEvent, Message, View};

/// Active screen in the front end.
#[derive(Debug)]
enum ActiveScreen {
    Login(LoginScreen),
    Game(GameScreen),
    GameOver(GameOverScreen),
}

impl ActiveScreen {
    fn view(&self) -> View {
        match self {
            Self::Login(_) => View::Login,
            Self::Game(_) => View::Game,
            Self::GameOver(_) => View::GameOver,
        }
    }

    fn as_screen(&self) -> &dyn Screen {
        match self {
            Self::Login(s) => s,
            Self::Game(s) => s,
            Self::GameOver(s) => s,
        }
    }

    fn as_screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            Self::Login(s) => s,
            Self::Game(s) => s,
            Self::GameOver(s) => s,
        }
    }
}

/// Terminal front end state: the flow controller plus the screen showing it.
#[derive(Debug)]
pub struct App {
    flow: FlowController,
    screen: ActiveScreen,
}

impl App {
    /// Creates the app on the login screen, optionally with a startup notice.
    #[instrument(skip(flow))]
    pub fn new(flow: FlowController, notice: Option<Message>) -> Self {
        info!("Creating App");
        Self {
            flow,
            screen: ActiveScreen::Login(LoginScreen::new(notice)),
        }
    }

    /// Returns the flow controller.
    pub fn flow(&self) -> &FlowController {
        &self.flow
    }

    /// Returns which screen is showing.
    pub fn view(&self) -> View {
        self.screen.view()
    }

    /// Renders the active screen.
    pub fn render(&self, frame: &mut Frame) {
        self.screen.as_screen().render(frame);
    }

    /// Handles one key press. Returns `false` when the app should exit.
    #[instrument(skip(self, key), fields(view = %self.screen.view()))]
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            info!("Ctrl+C pressed");
            return false;
        }

        match self.screen.as_screen_mut().handle_key(key) {
            KeyOutcome::Stay => true,
            KeyOutcome::Quit => {
                info!("Quit requested");
                false
            }
            KeyOutcome::Submit(action) => {
                let events = self.flow.handle(action);
                self.dispatch(events);
                true
            }
        }
    }

    /// Applies flow events in order. `Navigate` swaps the screen, so the
    /// events after it land on the new one.
    #[instrument(skip(self, events), fields(count = events.len()))]
    fn dispatch(&mut self, events: Vec<FlowEvent>) {
        for event in events {
            match event {
                FlowEvent::Navigate(view) => {
                    debug!(view = %view, "Navigating");
                    self.screen = self.screen_for(view);
                }
                other => self.screen.as_screen_mut().apply(&other),
            }
        }
    }

    fn screen_for(&self, view: View) -> ActiveScreen {
        match view {
            View::Login => ActiveScreen::Login(LoginScreen::new(None)),
            View::Game => match self.flow.current_user() {
                Some(username) => ActiveScreen::Game(GameScreen::new(username.to_string())),
                None => {
                    warn!("No user for Game view, showing login");
                    ActiveScreen::Login(LoginScreen::new(None))
                }
            },
            View::GameOver => ActiveScreen::GameOver(GameOverScreen::new()),
        }
    }
}
