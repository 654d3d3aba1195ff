//! Tests for username validation, registration and login.

use std::fs;

use tempfile::TempDir;

use strictly_guessing::{AuthError, AuthService, CredentialStore, validate_username};

fn setup_service() -> (TempDir, AuthService) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = CredentialStore::load(dir.path().join("users.txt")).expect("Load failed");
    (dir, AuthService::new(store))
}

#[test]
fn test_validate_username_accepts_letters() {
    assert!(validate_username("alice").is_ok());
    assert!(validate_username("Bob").is_ok());
    assert!(validate_username("ZZ").is_ok());
}

#[test]
fn test_validate_username_rejects_everything_else() {
    for bad in ["", "bob1", "a b", " alice", "al_ice", "al:ice", "é", "ñame"] {
        assert_eq!(
            validate_username(bad),
            Err(AuthError::InvalidUsername(bad.to_string())),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn test_register_then_login() {
    let (_dir, mut service) = setup_service();
    service.register("alice", "wonder").expect("Register failed");

    let username = service.login("alice", "wonder").expect("Login failed");
    assert_eq!(username, "alice");
    assert_eq!(service.authenticate("alice", "wonder"), Ok(true));
}

#[test]
fn test_register_invalid_username_touches_nothing() {
    let (dir, mut service) = setup_service();
    let path = dir.path().join("users.txt");

    let err = service.register("bob1", "pw").expect_err("Should be rejected");
    assert!(matches!(err, AuthError::InvalidUsername(_)));
    assert!(service.store().is_empty());
    assert!(!path.exists(), "No file should be written");
}

#[test]
fn test_register_duplicate_is_already_exists() {
    let (_dir, mut service) = setup_service();
    service.register("alice", "first").expect("Register failed");

    let err = service.register("alice", "second").expect_err("Duplicate");
    assert_eq!(err, AuthError::AlreadyExists("alice".to_string()));
    assert_eq!(err.to_string(), "This username is already taken!");
    assert!(service.login("alice", "first").is_ok());
}

#[test]
fn test_login_unknown_user_fails() {
    let (_dir, service) = setup_service();
    assert_eq!(service.login("nobody", "pw"), Err(AuthError::AuthFailed));
}

#[test]
fn test_login_wrong_password_fails_the_same_way() {
    let (_dir, mut service) = setup_service();
    service.register("alice", "wonder").expect("Register failed");

    let err = service.login("alice", "wrong").expect_err("Wrong password");
    assert_eq!(err, AuthError::AuthFailed);
    assert_eq!(err.to_string(), "Login failed! Incorrect username or password.");
}

#[test]
fn test_login_invalid_username_is_rejected_before_lookup() {
    let (_dir, service) = setup_service();
    assert!(matches!(
        service.login("a b", "pw"),
        Err(AuthError::InvalidUsername(_))
    ));
}

#[test]
fn test_register_save_failure_is_io() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    // The store points at a directory, so writing it fails.
    let mut service = AuthService::new(CredentialStore::empty(dir.path()));

    let err = service.register("alice", "pw").expect_err("Save should fail");
    assert!(matches!(err, AuthError::Io(_)));
    assert!(std::error::Error::source(&err).is_some());
    assert!(!service.store().contains("alice"));
}

#[test]
fn test_registered_account_survives_reload() {
    let (dir, mut service) = setup_service();
    service.register("alice", "wonder").expect("Register failed");

    let path = dir.path().join("users.txt");
    let content = fs::read_to_string(&path).expect("Read failed");
    assert_eq!(content, "alice:wonder\n");

    let reloaded = AuthService::new(CredentialStore::load(&path).expect("Reload failed"));
    assert_eq!(reloaded.login("alice", "wonder"), Ok("alice".to_string()));
}

#[test]
fn test_invalid_username_message() {
    let err = validate_username("bob1").expect_err("Should be rejected");
    assert_eq!(
        err.to_string(),
        "Username must only contain letters! No spaces, numbers, or symbols."
    );
}

#[test]
fn test_register_on_degraded_store_is_io() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let (store, error) = CredentialStore::load_or_empty(dir.path());
    assert!(error.is_some());

    let mut service = AuthService::new(store);
    let err = service.register("dave", "pw").expect_err("Should refuse to save");
    assert!(matches!(err, AuthError::Io(_)));
    assert!(service.login("dave", "pw").is_err());
}
