//! Persisted mock-session store.

use delish_core::{Email, Session};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::storage::{SharedStorage, StorageError};

/// Storage key for the serialized session.
pub const SESSION_KEY: &str = "delish_user";

/// Sign-in failures.
///
/// The messages are shown verbatim on the form, so they are phrased for the
/// visitor rather than the log.
#[derive(Debug, Error)]
pub enum SignInError {
    /// Email was blank after trimming.
    #[error("please provide an email address")]
    MissingEmail,

    /// Password was blank after trimming.
    #[error("please provide a password")]
    MissingPassword,

    /// Persisting the session failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// The persisted mock identity, independent of the cart store.
///
/// Sign-in stores only the email. The password is required to be non-blank
/// and then discarded - it is never persisted, compared, or logged. This is
/// a demo flow, not an authentication system.
pub struct SessionStore {
    storage: SharedStorage,
}

impl SessionStore {
    /// Create a store over a backend.
    #[must_use]
    pub const fn new(storage: SharedStorage) -> Self {
        Self { storage }
    }

    /// Validate the form fields and persist the session.
    ///
    /// # Errors
    ///
    /// Returns a validation error if either field is blank after trimming,
    /// in which case nothing is persisted, or a storage error if the write
    /// fails.
    pub fn sign_in(&self, email: &str, password: &SecretString) -> Result<Session, SignInError> {
        let email = Email::parse(email).map_err(|_| SignInError::MissingEmail)?;
        if password.expose_secret().trim().is_empty() {
            return Err(SignInError::MissingPassword);
        }

        let session = Session::new(email);
        let raw = serde_json::to_string(&session)
            .map_err(std::io::Error::from)
            .map_err(StorageError::from)?;
        self.storage.set(SESSION_KEY, &raw)?;

        tracing::info!(email = %session.email, "visitor signed in");
        Ok(session)
    }

    /// Clear any persisted session.
    ///
    /// # Errors
    ///
    /// Returns an error if the removal cannot be persisted.
    pub fn continue_as_guest(&self) -> Result<(), StorageError> {
        self.storage.remove(SESSION_KEY)
    }

    /// Load the current session, if any.
    ///
    /// A missing key means guest; a corrupt or unreadable blob is treated as
    /// guest too (logged at warn).
    #[must_use]
    pub fn current_session(&self) -> Option<Session> {
        let raw = match self.storage.get(SESSION_KEY) {
            Ok(raw) => raw?,
            Err(err) => {
                tracing::warn!("failed to read {SESSION_KEY}: {err}; treating as guest");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::warn!("corrupt {SESSION_KEY} blob: {err}; treating as guest");
                None
            }
        }
    }
}
