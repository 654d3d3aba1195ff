//! Credential record and its line format.

use derive_getters::Getters;
use derive_new::new;
use tracing::instrument;

/// A username/password pair as stored in the credentials file.
///
/// The on-disk form is one `username:password` line. Colons are not escaped,
/// so a field containing one cannot be read back.
#[derive(Clone, PartialEq, Eq, Getters, new)]
pub struct Credential {
    username: String,
    password: String,
}

impl Credential {
    /// Parses one line of the credentials file.
    ///
    /// Returns `None` unless the line splits into exactly two colon-separated
    /// fields.
    #[instrument(skip(line))]
    pub fn from_line(line: &str) -> Option<Self> {
        let mut fields = line.split(':');
        match (fields.next(), fields.next(), fields.next()) {
            (Some(username), Some(password), None) => {
                Some(Self::new(username.to_string(), password.to_string()))
            }
            _ => None,
        }
    }

    /// Renders the credential as a file line, without the trailing newline.
    pub fn to_line(&self) -> String {
        format!("{}:{}", self.username, self.password)
    }

    /// Returns true if `password` matches exactly.
    pub fn matches(&self, password: &str) -> bool {
        self.password == password
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
