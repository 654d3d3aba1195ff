//! Registration and login rules layered over the credential store.

use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, info, instrument, warn};

use crate::{CredentialStore, StoreError, StoreErrorKind};

static USERNAME_PATTERN: OnceLock<Regex> = OnceLock::new();

fn username_pattern() -> &'static Regex {
    USERNAME_PATTERN
        .get_or_init(|| Regex::new(r"^[A-Za-z]+$").expect("username pattern is a valid regex"))
}

/// Why a register or login request was refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum AuthError {
    /// Username is empty or contains anything but ASCII letters.
    #[display("Username must only contain letters! No spaces, numbers, or symbols.")]
    InvalidUsername(String),

    /// Registration conflict.
    #[display("This username is already taken!")]
    AlreadyExists(String),

    /// Unknown user or wrong password; the two are not told apart.
    #[display("Login failed! Incorrect username or password.")]
    AuthFailed,

    /// The credentials file could not be written.
    #[display("Could not save credentials: {}", _0)]
    Io(StoreError),
}

impl std::error::Error for AuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err.kind {
            StoreErrorKind::AlreadyExists(username) => Self::AlreadyExists(username),
            StoreErrorKind::Io { .. } => Self::Io(err),
        }
    }
}

/// Checks a username against `^[A-Za-z]+$`.
///
/// # Errors
///
/// Returns [`AuthError::InvalidUsername`] on any mismatch, including the
/// empty string.
#[instrument]
pub fn validate_username(username: &str) -> Result<(), AuthError> {
    if username_pattern().is_match(username) {
        Ok(())
    } else {
        debug!("Username failed validation");
        Err(AuthError::InvalidUsername(username.to_string()))
    }
}

/// Service layer for account operations.
///
/// Wraps [`CredentialStore`] with username validation; every request with a
/// malformed username is refused before the store is consulted.
#[derive(Debug, Clone)]
pub struct AuthService {
    store: CredentialStore,
}

impl AuthService {
    /// Creates a new auth service backed by the given store.
    #[instrument(skip(store), fields(path = %store.path().display()))]
    pub fn new(store: CredentialStore) -> Self {
        info!(users = store.len(), "Creating AuthService");
        Self { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidUsername`], [`AuthError::AlreadyExists`]
    /// or [`AuthError::Io`].
    #[instrument(skip(self, password))]
    pub fn register(&mut self, username: &str, password: &str) -> Result<(), AuthError> {
        validate_username(username)?;
        self.store.register(username, password).map_err(|e| {
            warn!(error = %e, "Registration failed");
            AuthError::from(e)
        })?;
        info!("Account registered");
        Ok(())
    }

    /// Returns whether the credentials match a registered account.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidUsername`] for a malformed username.
    #[instrument(skip(self, password))]
    pub fn authenticate(&self, username: &str, password: &str) -> Result<bool, AuthError> {
        validate_username(username)?;
        Ok(self.store.authenticate(username, password))
    }

    /// Authenticates and returns the accepted username.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidUsername`] or [`AuthError::AuthFailed`].
    #[instrument(skip(self, password))]
    pub fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        if self.authenticate(username, password)? {
            info!("Login accepted");
            Ok(username.to_string())
        } else {
            info!("Login refused");
            Err(AuthError::AuthFailed)
        }
    }
}
