//! Credential store backed by a newline-delimited text file.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::store::{Credential, StoreError, StoreErrorKind};

/// Default name of the credentials file.
pub const DEFAULT_USERS_FILE: &str = "users.txt";

/// In-memory username → credential map, persisted to a flat file.
///
/// The whole file is read once by [`CredentialStore::load`] and rewritten on
/// every successful mutation. Entries are kept sorted by username, which is
/// also the order they are written in.
///
/// A store built by [`CredentialStore::load_or_empty`] after a failed read is
/// degraded: it serves logins from memory but never writes the file it could
/// not load.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
    users: BTreeMap<String, Credential>,
    skipped_lines: usize,
    degraded: bool,
}

impl CredentialStore {
    /// Creates an empty store bound to `path` without reading it.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn empty(path: impl AsRef<Path>) -> Self {
        debug!("Creating empty credential store");
        Self {
            path: path.as_ref().to_path_buf(),
            users: BTreeMap::new(),
            skipped_lines: 0,
            degraded: false,
        }
    }

    /// Loads `path`, falling back to an empty, degraded store if it cannot be
    /// read.
    ///
    /// The read error is handed back so the caller can show it. A degraded
    /// store refuses to save, so the unreadable file is left as it is.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_empty(path: impl AsRef<Path>) -> (Self, Option<StoreError>) {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(store) => (store, None),
            Err(e) => {
                warn!(error = %e, "Falling back to an empty, read-only credential store");
                let mut store = Self::empty(path);
                store.degraded = true;
                (store, Some(e))
            }
        }
    }

    /// Loads the store from `path`.
    ///
    /// A missing file yields an empty store. Lines that are not exactly
    /// `username:password` are skipped with a warning; a later line for the
    /// same username replaces an earlier one. Bytes that are not valid UTF-8
    /// are decoded as U+FFFD rather than failing the whole file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file exists but cannot be read.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let mut store = Self::empty(path);

        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("Credentials file not found, starting empty");
                return Ok(store);
            }
            Err(e) => {
                warn!(error = %e, "Failed to read credentials file");
                return Err(StoreError::io(path, &e));
            }
        };

        let content = String::from_utf8_lossy(&bytes);
        if matches!(content, Cow::Owned(_)) {
            warn!("Credentials file is not valid UTF-8, undecodable bytes replaced");
        }

        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match Credential::from_line(line) {
                Some(credential) => {
                    store
                        .users
                        .insert(credential.username().clone(), credential);
                }
                None => {
                    store.skipped_lines += 1;
                    warn!(line_number = idx + 1, "Skipping malformed credential line");
                }
            }
        }

        info!(
            users = store.users.len(),
            skipped = store.skipped_lines,
            "Credentials loaded"
        );
        Ok(store)
    }

    /// Writes every credential to the file, replacing its contents.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be written, or if the store
    /// is degraded.
    #[instrument(skip(self), fields(path = %self.path.display(), users = self.users.len()))]
    pub fn save(&self) -> Result<(), StoreError> {
        if self.degraded {
            warn!("Refusing to overwrite a credentials file that was never loaded");
            return Err(StoreError::new(StoreErrorKind::Io {
                path: self.path.display().to_string(),
                reason: "file was not loaded, refusing to overwrite it".to_string(),
            }));
        }

        let mut content = String::new();
        for credential in self.users.values() {
            content.push_str(&credential.to_line());
            content.push('\n');
        }

        std::fs::write(&self.path, content).map_err(|e| {
            warn!(error = %e, "Failed to write credentials file");
            StoreError::io(&self.path, &e)
        })?;

        debug!("Credentials saved");
        Ok(())
    }

    /// Adds a new user and persists the store.
    ///
    /// If the write fails the new entry is removed again, so memory never
    /// holds a user the file does not.
    ///
    /// # Errors
    ///
    /// Returns an `AlreadyExists` [`StoreError`] if `username` is taken, or an
    /// `Io` one if saving fails.
    #[instrument(skip(self, password))]
    pub fn register(&mut self, username: &str, password: &str) -> Result<(), StoreError> {
        if self.users.contains_key(username) {
            debug!("Username already registered");
            return Err(StoreError::already_exists(username));
        }

        self.users.insert(
            username.to_string(),
            Credential::new(username.to_string(), password.to_string()),
        );

        if let Err(e) = self.save() {
            self.users.remove(username);
            return Err(e);
        }

        info!("User registered");
        Ok(())
    }

    /// Returns true if `username` is registered with exactly `password`.
    #[instrument(skip(self, password))]
    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        let ok = self
            .users
            .get(username)
            .is_some_and(|credential| credential.matches(password));
        debug!(ok, "Authentication checked");
        ok
    }

    /// Returns true if `username` is registered.
    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    /// Returns all registered usernames in file order.
    pub fn usernames(&self) -> Vec<&str> {
        self.users.keys().map(String::as_str).collect()
    }

    /// Returns the number of registered users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns true if no users are registered.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if the file could not be loaded and will not be written.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Returns how many malformed lines were skipped by [`load`](Self::load).
    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }
}
