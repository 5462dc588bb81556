//! In-memory session store.
//!
//! The only mutable shared state in the service. Every operation takes the
//! map lock, so per-key transitions are atomic and serializable; sessions
//! are tiny and short-lived, which keeps a single mutex sufficient. The
//! lock is never held across an await point.

use std::collections::HashMap;

use parking_lot::Mutex;
use time::{Duration, OffsetDateTime};

use crate::domain::session::{Participant, Session};

#[derive(Debug, Default)]
pub struct SessionStore {
    inner: Mutex<HashMap<String, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a freshly opened session. A duplicate id replaces the prior
    /// session (last-writer-wins); interaction ids make collisions a
    /// redelivery artifact, not a normal flow.
    pub fn create(&self, session: Session) {
        self.inner.lock().insert(session.id.clone(), session);
    }

    pub fn get(&self, id: &str) -> Option<Session> {
        self.inner.lock().get(id).cloned()
    }

    /// Fill the responder slot exactly once and return the completed
    /// session for resolution.
    ///
    /// Returns `None` when the id is unknown or another caller has already
    /// claimed the session. The filled slot doubles as the pending-removal
    /// marker: the winner resolves and then calls [`remove`](Self::remove),
    /// while every racer observes the claim and drops its submission.
    pub fn claim_response(&self, id: &str, responder: Participant) -> Option<Session> {
        let mut inner = self.inner.lock();
        let session = inner.get_mut(id)?;
        if session.responder.is_some() {
            return None;
        }
        session.responder = Some(responder);
        Some(session.clone())
    }

    /// Idempotent delete; removing an absent key is a no-op.
    pub fn remove(&self, id: &str) {
        self.inner.lock().remove(id);
    }

    /// Number of sessions still awaiting a responder.
    pub fn open_count(&self) -> usize {
        self.inner.lock().values().filter(|s| s.is_open()).count()
    }

    /// Drop open sessions older than `ttl`, returning the evicted ids.
    /// Claimed sessions are exempt: their removal belongs to the submit
    /// path that claimed them.
    pub fn evict_older_than(&self, ttl: Duration) -> Vec<String> {
        let now = OffsetDateTime::now_utc();
        let mut evicted = Vec::new();
        self.inner.lock().retain(|id, session| {
            let stale = session.is_open() && now - session.created_at > ttl;
            if stale {
                evicted.push(id.clone());
            }
            !stale
        });
        evicted
    }
}
