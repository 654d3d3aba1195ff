//! Tests for the guessing session state machine.

use rand::SeedableRng;
use rand::rngs::StdRng;

use strictly_numbers::{
    GameOutcome, GameSession, Guess, GuessError, GuessResult, Hint, InputProblem, MAX_ATTEMPTS,
    SessionState,
};

#[test]
fn test_new_session_is_active() {
    let session = GameSession::with_secret(42).expect("Valid secret");
    assert_eq!(session.state(), SessionState::Active);
    assert_eq!(session.attempts(), 0);
    assert_eq!(session.remaining_attempts(), MAX_ATTEMPTS);
    assert!(session.outcome().is_none());
}

#[test]
fn test_win_on_first_attempt() {
    let mut session = GameSession::with_secret(50).expect("Valid secret");
    let result = session.guess(Guess::new(50)).expect("Guess accepted");

    assert_eq!(
        result,
        GuessResult::Finished(GameOutcome::Won {
            attempts: 1,
            secret: 50
        })
    );
    assert_eq!(session.state(), SessionState::Won);
    assert_eq!(session.attempts(), 1);
}

#[test]
fn test_win_on_last_attempt_is_a_win() {
    let mut session = GameSession::with_secret(7).expect("Valid secret");
    for _ in 0..MAX_ATTEMPTS - 1 {
        session.guess(Guess::new(1)).expect("Guess accepted");
    }
    let result = session.guess(Guess::new(7)).expect("Guess accepted");
    assert!(matches!(
        result,
        GuessResult::Finished(GameOutcome::Won { attempts: 5, .. })
    ));
}

#[test]
fn test_lose_after_max_attempts() {
    let mut session = GameSession::with_secret(50).expect("Valid secret");
    for _ in 0..MAX_ATTEMPTS - 1 {
        let result = session.guess(Guess::new(10)).expect("Guess accepted");
        assert!(matches!(result, GuessResult::Active { .. }));
    }

    let result = session.guess(Guess::new(10)).expect("Guess accepted");
    assert_eq!(
        result,
        GuessResult::Finished(GameOutcome::Lost {
            attempts: 5,
            secret: 50
        })
    );
    assert_eq!(session.state(), SessionState::Lost);
    assert_eq!(session.attempts(), 5);
}

#[test]
fn test_hint_higher_when_guess_too_low() {
    let mut session = GameSession::with_secret(70).expect("Valid secret");
    let result = session.guess(Guess::new(30)).expect("Guess accepted");
    assert_eq!(
        result,
        GuessResult::Active {
            hint: Hint::Higher,
            attempts: 1,
            remaining: 4
        }
    );
}

#[test]
fn test_hint_lower_when_guess_too_high() {
    let mut session = GameSession::with_secret(70).expect("Valid secret");
    let result = session.guess(Guess::new(90)).expect("Guess accepted");
    assert!(matches!(
        result,
        GuessResult::Active {
            hint: Hint::Lower,
            ..
        }
    ));
}

#[test]
fn test_out_of_range_guess_consumes_attempt() {
    let mut session = GameSession::with_secret(70).expect("Valid secret");
    let result = session.guess(Guess::new(250)).expect("Guess accepted");
    assert!(matches!(
        result,
        GuessResult::Active {
            hint: Hint::Lower,
            ..
        }
    ));
    let result = session.guess(Guess::new(-3)).expect("Guess accepted");
    assert!(matches!(
        result,
        GuessResult::Active {
            hint: Hint::Higher,
            ..
        }
    ));
    assert_eq!(session.attempts(), 2);
}

#[test]
fn test_guess_after_win_is_game_over() {
    let mut session = GameSession::with_secret(12).expect("Valid secret");
    session.guess(Guess::new(12)).expect("Guess accepted");

    let result = session.guess(Guess::new(12));
    assert_eq!(result, Err(GuessError::GameOver));
    assert_eq!(session.attempts(), 1);
}

#[test]
fn test_guess_after_loss_is_game_over() {
    let mut session = GameSession::with_secret(99).expect("Valid secret");
    for _ in 0..MAX_ATTEMPTS {
        session.guess(Guess::new(1)).expect("Guess accepted");
    }

    let result = session.guess(Guess::new(99));
    assert_eq!(result, Err(GuessError::GameOver));
    assert_eq!(session.attempts(), MAX_ATTEMPTS);
    assert_eq!(
        session.outcome(),
        Some(GameOutcome::Lost {
            attempts: 5,
            secret: 99
        })
    );
}

#[test]
fn test_with_secret_rejects_out_of_range() {
    assert_eq!(
        GameSession::with_secret(0),
        Err(GuessError::SecretOutOfRange(0))
    );
    assert_eq!(
        GameSession::with_secret(101),
        Err(GuessError::SecretOutOfRange(101))
    );
    assert!(GameSession::with_secret(1).is_ok());
    assert!(GameSession::with_secret(100).is_ok());
}

#[test]
fn test_random_secret_stays_in_range() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1_000 {
        let session = GameSession::from_rng(&mut rng);
        assert!((1..=100).contains(&session.secret()));
    }
}

#[test]
fn test_seeded_rng_is_deterministic() {
    let a = GameSession::from_rng(&mut StdRng::seed_from_u64(42));
    let b = GameSession::from_rng(&mut StdRng::seed_from_u64(42));
    assert_eq!(a.secret(), b.secret());
}

#[test]
fn test_parse_accepts_whitespace_and_sign() {
    assert_eq!(Guess::parse(" 42 "), Ok(Guess::new(42)));
    assert_eq!(Guess::parse("+7"), Ok(Guess::new(7)));
    assert_eq!(Guess::parse("-3"), Ok(Guess::new(-3)));
}

#[test]
fn test_parse_rejects_empty_input() {
    assert_eq!(
        Guess::parse("   "),
        Err(GuessError::InvalidInput(InputProblem::Empty))
    );
}

#[test]
fn test_parse_rejects_non_numeric_input() {
    let err = Guess::parse("forty").expect_err("Should reject text");
    assert!(matches!(
        err,
        GuessError::InvalidInput(InputProblem::NotANumber(_))
    ));
    assert_eq!(err.to_string(), "Please enter numbers only!");

    assert!(Guess::parse("4.5").is_err());
    assert!(Guess::parse("99999999999").is_err());
}

#[test]
fn test_invalid_input_does_not_consume_attempt() {
    let mut session = GameSession::with_secret(20).expect("Valid secret");
    let parsed = "abc".parse::<Guess>();
    assert!(parsed.is_err());
    assert_eq!(session.attempts(), 0);

    let guess = "20".parse::<Guess>().expect("Valid number");
    let result = session.guess(guess).expect("Guess accepted");
    assert!(matches!(
        result,
        GuessResult::Finished(GameOutcome::Won { attempts: 1, .. })
    ));
}

#[test]
fn test_outcome_messages() {
    let won = GameOutcome::Won {
        attempts: 3,
        secret: 64,
    };
    assert_eq!(
        won.to_string(),
        "You guessed it in 3 attempt(s)! The number was: 64"
    );
    assert_eq!(won.secret(), 64);
    assert!(won.is_win());

    let lost = GameOutcome::Lost {
        attempts: 5,
        secret: 8,
    };
    assert_eq!(
        lost.to_string(),
        "You've used all your attempts. The number was: 8"
    );
    assert_eq!(lost.attempts(), 5);
    assert_eq!(Hint::Higher.to_string(), "Try a higher number!");
}
