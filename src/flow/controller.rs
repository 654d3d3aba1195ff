//! Flow controller: the state machine behind the login gate and the game.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_numbers::{GameSession, Guess, GuessError, GuessResult, MAX_ATTEMPTS};
use tracing::{debug, info, instrument, warn};

use crate::flow::{Action, FlowEvent, FlowState, Message, Phase, View};
use crate::AuthService;

/// Drives LoggedOut → Playing → Ended → {Playing | LoggedOut}.
///
/// Owns the [`AuthService`], the authenticated identity and the single active
/// [`GameSession`]. Call [`FlowController::handle`] once per user action.
#[derive(Debug)]
pub struct FlowController {
    auth: AuthService,
    state: FlowState,
    rng: StdRng,
}

impl FlowController {
    /// Creates a controller in the `LoggedOut` state with an entropy-seeded RNG.
    #[instrument(skip(auth))]
    pub fn new(auth: AuthService) -> Self {
        Self::with_rng(auth, StdRng::from_entropy())
    }

    /// Creates a controller that draws secrets from `rng`.
    #[instrument(skip(auth, rng))]
    pub fn with_rng(auth: AuthService, rng: StdRng) -> Self {
        info!("Creating FlowController");
        Self {
            auth,
            state: FlowState::LoggedOut,
            rng,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> &FlowState {
        &self.state
    }

    /// Returns the auth service.
    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    /// Returns the authenticated user, if any.
    pub fn current_user(&self) -> Option<&str> {
        self.state.username()
    }

    /// Applies one user action and returns what the front end should show.
    ///
    /// Actions that make no sense in the current state leave it unchanged.
    #[instrument(skip(self), fields(phase = %self.state.phase()))]
    pub fn handle(&mut self, action: Action) -> Vec<FlowEvent> {
        let state = std::mem::take(&mut self.state);
        let previous = state.phase();
        let (next, events) = self.transition(state, action);
        if next.phase() != previous {
            debug!(from = %previous, to = %next.phase(), "Phase changed");
        }
        self.state = next;
        events
    }

    fn transition(&mut self, state: FlowState, action: Action) -> (FlowState, Vec<FlowEvent>) {
        match (state, action) {
            (FlowState::LoggedOut, Action::Register { username, password }) => {
                self.register(&username, &password)
            }

            (FlowState::LoggedOut, Action::Login { username, password }) => {
                self.login(&username, &password)
            }

            (FlowState::Playing { username, session }, Action::Guess(input)) => {
                self.guess(username, session, &input)
            }

            (state @ FlowState::Ended { .. }, Action::Guess(_)) => {
                debug!("Guess after game end");
                let events = vec![FlowEvent::ShowMessage(Message::Guess(GuessError::GameOver))];
                (state, events)
            }

            (FlowState::Ended { username, .. }, Action::Replay) => {
                info!(username = %username, "Replaying");
                self.start_game(username)
            }

            (
                FlowState::Playing { username, .. } | FlowState::Ended { username, .. },
                Action::Logout,
            ) => {
                info!(username = %username, "Logging out");
                (
                    FlowState::LoggedOut,
                    vec![
                        FlowEvent::Navigate(View::Login),
                        FlowEvent::ShowMessage(Message::LoggedOut),
                    ],
                )
            }

            (state, action) => {
                warn!(phase = %state.phase(), action = ?action, "Action ignored in this state");
                (state, Vec::new())
            }
        }
    }

    #[instrument(skip(self, password))]
    fn register(&mut self, username: &str, password: &str) -> (FlowState, Vec<FlowEvent>) {
        let message = match self.auth.register(username.trim(), password) {
            Ok(()) => Message::Registered,
            Err(e) => {
                debug!(error = %e, "Register refused");
                Message::Auth(e)
            }
        };
        (FlowState::LoggedOut, vec![FlowEvent::ShowMessage(message)])
    }

    #[instrument(skip(self, password))]
    fn login(&mut self, username: &str, password: &str) -> (FlowState, Vec<FlowEvent>) {
        match self.auth.login(username.trim(), password) {
            Ok(username) => {
                // LoggedIn lasts only until the first session is created.
                info!(phase = %Phase::LoggedIn, username = %username, "Identity established");
                self.start_game(username)
            }
            Err(e) => {
                debug!(error = %e, "Login refused");
                (
                    FlowState::LoggedOut,
                    vec![FlowEvent::ShowMessage(Message::Auth(e))],
                )
            }
        }
    }

    #[instrument(skip(self))]
    fn start_game(&mut self, username: String) -> (FlowState, Vec<FlowEvent>) {
        let session = GameSession::from_rng(&mut self.rng);
        info!(username = %username, "Game started");
        let events = vec![
            FlowEvent::Navigate(View::Game),
            FlowEvent::ShowMessage(Message::Welcome {
                username: username.clone(),
                attempts: MAX_ATTEMPTS,
            }),
            FlowEvent::ShowAttempts {
                used: 0,
                max: MAX_ATTEMPTS,
            },
        ];
        (FlowState::Playing { username, session }, events)
    }

    #[instrument(skip(self, session), fields(attempts = session.attempts()))]
    fn guess(
        &mut self,
        username: String,
        mut session: GameSession,
        input: &str,
    ) -> (FlowState, Vec<FlowEvent>) {
        let guess = match Guess::parse(input) {
            Ok(guess) => guess,
            Err(e) => {
                let events = vec![FlowEvent::ShowMessage(Message::Guess(e))];
                return (FlowState::Playing { username, session }, events);
            }
        };

        match session.guess(guess) {
            Ok(GuessResult::Active { hint, attempts, .. }) => {
                let events = vec![
                    FlowEvent::ShowAttempts {
                        used: attempts,
                        max: MAX_ATTEMPTS,
                    },
                    FlowEvent::ShowMessage(Message::Hint(hint)),
                ];
                (FlowState::Playing { username, session }, events)
            }
            Ok(GuessResult::Finished(outcome)) => {
                info!(username = %username, won = outcome.is_win(), "Game finished");
                let events = vec![
                    FlowEvent::ShowAttempts {
                        used: outcome.attempts(),
                        max: MAX_ATTEMPTS,
                    },
                    FlowEvent::Navigate(View::GameOver),
                    FlowEvent::ShowOutcome(outcome),
                ];
                (FlowState::Ended { username, outcome }, events)
            }
            Err(e) => {
                warn!(error = %e, "Guess rejected by session");
                let events = vec![FlowEvent::ShowMessage(Message::Guess(e))];
                (FlowState::Playing { username, session }, events)
            }
        }
    }
}
