//! Per-user session state — the last search each requester ran.
//!
//! The export button answers with the full result set of the requester's
//! most recent search, not whatever fits in the callback payload, so the
//! search handler records its results here and the export handler recalls
//! them. One entry per user; a new search overwrites the previous one.

use crate::types::PostOffice;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// A completed search: the query as typed and every record it matched.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub query: String,
    pub results: Vec<PostOffice>,
}

/// Shared map of requester id to last [`Session`].
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: Mutex<HashMap<i64, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember `results` as the user's latest search, replacing any
    /// previous session for that user.
    pub fn record(&self, user_id: i64, query: String, results: Vec<PostOffice>) {
        let mut sessions = self.lock();
        sessions.insert(user_id, Session { query, results });
    }

    /// The user's latest search, if they have run one.
    pub fn recall(&self, user_id: i64) -> Option<Session> {
        self.lock().get(&user_id).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<i64, Session>> {
        // A handler that panicked mid-insert cannot leave a session half
        // written, so a poisoned lock is still safe to reuse.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
