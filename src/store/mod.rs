//! Flat-file persistence for user credentials.

mod credential;
mod credential_store;
mod error;

pub use credential::Credential;
pub use credential_store::{CredentialStore, DEFAULT_USERS_FILE};
pub use error::{StoreError, StoreErrorKind};
