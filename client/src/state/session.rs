//! Persisted login session record and its store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page writes one record under `loginState`; the dashboard reads it
//! to decide between rendering and redirecting, and removes it on logout.
//!
//! ERROR HANDLING
//! ==============
//! Reads never fail from the caller's point of view: missing, unparseable, or
//! logged-out records all mean "no session" and are logged. Only writes
//! report errors, so the login flow can settle its busy state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::util::storage::{BrowserStorage, KeyValueStorage, StorageError};

/// Storage key holding the JSON-encoded [`SessionRecord`].
pub const SESSION_KEY: &str = "loginState";

/// The single persisted session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    #[serde(default)]
    pub email: String,
    pub is_logged_in: bool,
    #[serde(default)]
    pub timestamp: String,
}

impl SessionRecord {
    /// A fresh logged-in record for `email` created at `timestamp`.
    #[must_use]
    pub fn logged_in(email: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self { email: email.into(), is_logged_in: true, timestamp: timestamp.into() }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_logged_in
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("failed to encode session record: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Reads and writes the session record through a storage backend.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl SessionStore<BrowserStorage> {
    /// Store backed by `window.localStorage`.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// The active session, if one is stored.
    pub fn read(&self) -> Option<SessionRecord> {
        let raw = match self.storage.get(SESSION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("failed to read session record: {e}");
                return None;
            }
        };
        let record = match serde_json::from_str::<SessionRecord>(&raw) {
            Ok(record) => record,
            Err(e) => {
                log::warn!("failed to parse session record: {e}");
                return None;
            }
        };
        if !record.is_active() {
            log::debug!("stored session is not logged in");
            return None;
        }
        Some(record)
    }

    /// Persist `record`, replacing any previous session.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be encoded or the backend
    /// rejects the write.
    pub fn write(&self, record: &SessionRecord) -> Result<(), SessionError> {
        let raw = serde_json::to_string(record)?;
        self.storage.set(SESSION_KEY, &raw)?;
        Ok(())
    }

    /// Remove the stored session. Clearing an empty store is a no-op.
    pub fn clear(&self) {
        if let Err(e) = self.storage.remove(SESSION_KEY) {
            log::warn!("failed to clear session record: {e}");
        }
    }
}
