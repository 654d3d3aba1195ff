//! Tests for the login → game → replay/logout state machine.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;

use strictly_guessing::{
    Action, AuthError, AuthService, CredentialStore, FlowController, FlowEvent, FlowState,
    GameOutcome, GuessError, Hint, InputProblem, MAX_ATTEMPTS, Message, Phase, View,
};

/// Builds a controller with `alice`/`wonder` registered and a seeded RNG.
fn setup_flow() -> (TempDir, FlowController) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut store = CredentialStore::load(dir.path().join("users.txt")).expect("Load failed");
    store.register("alice", "wonder").expect("Register failed");
    let flow = FlowController::with_rng(AuthService::new(store), StdRng::seed_from_u64(42));
    (dir, flow)
}

fn login(flow: &mut FlowController) -> Vec<FlowEvent> {
    flow.handle(Action::Login {
        username: "alice".to_string(),
        password: "wonder".to_string(),
    })
}

fn secret(flow: &FlowController) -> i32 {
    flow.state()
        .session()
        .expect("A session should be running")
        .secret()
}

/// A guess that is wrong for the current secret.
fn wrong_guess(flow: &FlowController) -> String {
    let secret = secret(flow);
    let guess = if secret == 1 { 2 } else { secret - 1 };
    guess.to_string()
}

#[test]
fn test_starts_logged_out() {
    let (_dir, flow) = setup_flow();
    assert_eq!(flow.state(), &FlowState::LoggedOut);
    assert_eq!(flow.state().phase(), Phase::LoggedOut);
    assert_eq!(flow.current_user(), None);
}

#[test]
fn test_login_starts_game() {
    let (_dir, mut flow) = setup_flow();
    let events = login(&mut flow);

    assert_eq!(
        events,
        vec![
            FlowEvent::Navigate(View::Game),
            FlowEvent::ShowMessage(Message::Welcome {
                username: "alice".to_string(),
                attempts: MAX_ATTEMPTS,
            }),
            FlowEvent::ShowAttempts {
                used: 0,
                max: MAX_ATTEMPTS,
            },
        ]
    );
    assert_eq!(flow.state().phase(), Phase::Playing);
    assert_eq!(flow.current_user(), Some("alice"));
    let session = flow.state().session().expect("Session running");
    assert_eq!(session.attempts(), 0);
    assert!((1..=100).contains(&session.secret()));
}

#[test]
fn test_welcome_message_text() {
    let message = Message::Welcome {
        username: "alice".to_string(),
        attempts: 5,
    };
    assert_eq!(message.to_string(), "Welcome, alice! You have 5 attempts!");
}

#[test]
fn test_login_trims_username() {
    let (_dir, mut flow) = setup_flow();
    flow.handle(Action::Login {
        username: "  alice ".to_string(),
        password: "wonder".to_string(),
    });
    assert_eq!(flow.current_user(), Some("alice"));
}

#[test]
fn test_login_wrong_password_stays_logged_out() {
    let (_dir, mut flow) = setup_flow();
    let events = flow.handle(Action::Login {
        username: "alice".to_string(),
        password: "nope".to_string(),
    });

    assert_eq!(
        events,
        vec![FlowEvent::ShowMessage(Message::Auth(AuthError::AuthFailed))]
    );
    assert_eq!(flow.state(), &FlowState::LoggedOut);
}

#[test]
fn test_register_reports_success_and_stays_logged_out() {
    let (_dir, mut flow) = setup_flow();
    let events = flow.handle(Action::Register {
        username: "bob".to_string(),
        password: "builder".to_string(),
    });

    assert_eq!(events, vec![FlowEvent::ShowMessage(Message::Registered)]);
    assert_eq!(flow.state(), &FlowState::LoggedOut);
    assert!(flow.auth().store().contains("bob"));
}

#[test]
fn test_register_refusals_are_reported() {
    let (_dir, mut flow) = setup_flow();

    let events = flow.handle(Action::Register {
        username: "alice".to_string(),
        password: "other".to_string(),
    });
    assert_eq!(
        events,
        vec![FlowEvent::ShowMessage(Message::Auth(
            AuthError::AlreadyExists("alice".to_string())
        ))]
    );

    let events = flow.handle(Action::Register {
        username: "bob 2".to_string(),
        password: "pw".to_string(),
    });
    assert!(matches!(
        events.as_slice(),
        [FlowEvent::ShowMessage(Message::Auth(AuthError::InvalidUsername(_)))]
    ));
    assert_eq!(flow.state(), &FlowState::LoggedOut);
}

#[test]
fn test_wrong_guess_gives_hint() {
    let (_dir, mut flow) = setup_flow();
    login(&mut flow);
    let secret = secret(&flow);

    let (guess, hint) = if secret < 100 {
        (secret + 1, Hint::Lower)
    } else {
        (secret - 1, Hint::Higher)
    };
    let events = flow.handle(Action::Guess(guess.to_string()));

    assert_eq!(
        events,
        vec![
            FlowEvent::ShowAttempts {
                used: 1,
                max: MAX_ATTEMPTS,
            },
            FlowEvent::ShowMessage(Message::Hint(hint)),
        ]
    );
    assert_eq!(flow.state().phase(), Phase::Playing);
}

#[test]
fn test_invalid_input_does_not_consume_attempt() {
    let (_dir, mut flow) = setup_flow();
    login(&mut flow);

    let events = flow.handle(Action::Guess("abc".to_string()));
    assert_eq!(
        events,
        vec![FlowEvent::ShowMessage(Message::Guess(
            GuessError::InvalidInput(InputProblem::NotANumber("abc".to_string()))
        ))]
    );

    let events = flow.handle(Action::Guess("   ".to_string()));
    assert_eq!(
        events,
        vec![FlowEvent::ShowMessage(Message::Guess(
            GuessError::InvalidInput(InputProblem::Empty)
        ))]
    );

    let session = flow.state().session().expect("Session running");
    assert_eq!(session.attempts(), 0);
}

#[test]
fn test_correct_guess_wins() {
    let (_dir, mut flow) = setup_flow();
    login(&mut flow);
    let secret = secret(&flow);

    let events = flow.handle(Action::Guess(format!(" {} ", secret)));
    let outcome = GameOutcome::Won {
        attempts: 1,
        secret,
    };

    assert_eq!(
        events,
        vec![
            FlowEvent::ShowAttempts {
                used: 1,
                max: MAX_ATTEMPTS,
            },
            FlowEvent::Navigate(View::GameOver),
            FlowEvent::ShowOutcome(outcome),
        ]
    );
    assert_eq!(flow.state().phase(), Phase::Ended);
    assert_eq!(flow.state().outcome(), Some(&outcome));
    assert_eq!(flow.current_user(), Some("alice"));
}

#[test]
fn test_five_wrong_guesses_lose() {
    let (_dir, mut flow) = setup_flow();
    login(&mut flow);
    let secret = secret(&flow);
    let guess = wrong_guess(&flow);

    for _ in 1..MAX_ATTEMPTS {
        flow.handle(Action::Guess(guess.clone()));
        assert_eq!(flow.state().phase(), Phase::Playing);
    }
    let events = flow.handle(Action::Guess(guess));

    assert_eq!(
        events.last(),
        Some(&FlowEvent::ShowOutcome(GameOutcome::Lost {
            attempts: MAX_ATTEMPTS,
            secret,
        }))
    );
    assert_eq!(flow.state().phase(), Phase::Ended);
}

#[test]
fn test_guess_after_end_reports_game_over() {
    let (_dir, mut flow) = setup_flow();
    login(&mut flow);
    let secret = secret(&flow);
    flow.handle(Action::Guess(secret.to_string()));

    let events = flow.handle(Action::Guess("50".to_string()));
    assert_eq!(
        events,
        vec![FlowEvent::ShowMessage(Message::Guess(GuessError::GameOver))]
    );
    assert_eq!(flow.state().phase(), Phase::Ended);
}

#[test]
fn test_replay_starts_fresh_session() {
    let (_dir, mut flow) = setup_flow();
    login(&mut flow);
    let guess = wrong_guess(&flow);
    for _ in 0..MAX_ATTEMPTS {
        flow.handle(Action::Guess(guess.clone()));
    }
    assert_eq!(flow.state().phase(), Phase::Ended);

    let events = flow.handle(Action::Replay);
    assert_eq!(events.first(), Some(&FlowEvent::Navigate(View::Game)));
    assert_eq!(flow.state().phase(), Phase::Playing);
    assert_eq!(flow.current_user(), Some("alice"));
    let session = flow.state().session().expect("Session running");
    assert_eq!(session.attempts(), 0);
    assert!(!session.is_over());
}

#[test]
fn test_logout_from_ended() {
    let (_dir, mut flow) = setup_flow();
    login(&mut flow);
    let secret = secret(&flow);
    flow.handle(Action::Guess(secret.to_string()));

    let events = flow.handle(Action::Logout);
    assert_eq!(
        events,
        vec![
            FlowEvent::Navigate(View::Login),
            FlowEvent::ShowMessage(Message::LoggedOut),
        ]
    );
    assert_eq!(flow.state(), &FlowState::LoggedOut);
    assert_eq!(flow.current_user(), None);
}

#[test]
fn test_logout_mid_game() {
    let (_dir, mut flow) = setup_flow();
    login(&mut flow);
    flow.handle(Action::Logout);
    assert_eq!(flow.state(), &FlowState::LoggedOut);
}

#[test]
fn test_out_of_place_actions_are_ignored() {
    let (_dir, mut flow) = setup_flow();

    assert!(flow.handle(Action::Guess("50".to_string())).is_empty());
    assert!(flow.handle(Action::Replay).is_empty());
    assert!(flow.handle(Action::Logout).is_empty());
    assert_eq!(flow.state(), &FlowState::LoggedOut);

    login(&mut flow);
    let before = flow.state().clone();
    assert!(flow.handle(Action::Replay).is_empty());
    assert!(
        flow.handle(Action::Login {
            username: "alice".to_string(),
            password: "wonder".to_string(),
        })
        .is_empty()
    );
    assert_eq!(flow.state(), &before);
}

#[test]
fn test_same_seed_same_secrets() {
    let (_dir_a, mut a) = setup_flow();
    let (_dir_b, mut b) = setup_flow();
    login(&mut a);
    login(&mut b);
    assert_eq!(secret(&a), secret(&b));
}

#[test]
fn test_action_debug_hides_password() {
    let action = Action::Login {
        username: "alice".to_string(),
        password: "hunter2".to_string(),
    };
    let debug = format!("{:?}", action);
    assert!(debug.contains("alice"));
    assert!(!debug.contains("hunter2"));
}

#[test]
fn test_message_error_classification() {
    assert!(Message::Auth(AuthError::AuthFailed).is_error());
    assert!(Message::Guess(GuessError::GameOver).is_error());
    assert!(!Message::Registered.is_error());
    assert!(!Message::Hint(Hint::Higher).is_error());
}

#[test]
fn test_login_goes_straight_to_playing() {
    let (_dir, mut flow) = setup_flow();
    login(&mut flow);
    assert!(matches!(flow.state(), FlowState::Playing { username, .. } if username == "alice"));
    assert_ne!(flow.state().phase(), Phase::LoggedIn);

    flow.handle(Action::Logout);
    assert_eq!(flow.state().phase(), Phase::LoggedOut);
}

#[test]
fn test_store_unavailable_notice_text() {
    let message = Message::StoreUnavailable("bad file".to_string());
    assert!(message.is_error());
    assert!(message.to_string().contains("bad file"));
}
