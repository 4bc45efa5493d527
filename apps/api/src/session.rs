//! Per-session state — currently just the consecutive-miss counter that
//! drives the escalating "not in the resume" ladder.
//!
//! State is taken out of the store, threaded through `resolve` explicitly,
//! and put back by the handler. Sessions live in process memory and die with
//! it; nothing here persists.

use std::collections::HashMap;
use std::sync::Mutex;

use uuid::Uuid;

/// Session-scoped resolver state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Consecutive retrievals that found zero relevant passages since the
    /// last successful retrieval (or session start).
    pub miss_count: u32,
}

/// In-memory session map. One entry per session id, created lazily.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<Uuid, SessionState>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the session's state, defaulting a fresh session to zero misses.
    pub fn get(&self, id: Uuid) -> SessionState {
        let sessions = self.sessions.lock().expect("session store poisoned");
        sessions.get(&id).copied().unwrap_or_default()
    }

    /// Stores the session's state after a resolve round-trip.
    pub fn put(&self, id: Uuid, state: SessionState) {
        let mut sessions = self.sessions.lock().expect("session store poisoned");
        sessions.insert(id, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_session_starts_at_zero_misses() {
        let store = SessionStore::new();
        assert_eq!(store.get(Uuid::new_v4()).miss_count, 0);
    }

    #[test]
    fn test_put_then_get_round_trips() {
        let store = SessionStore::new();
        let id = Uuid::new_v4();

        store.put(id, SessionState { miss_count: 2 });
        assert_eq!(store.get(id).miss_count, 2);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let store = SessionStore::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        store.put(a, SessionState { miss_count: 5 });
        assert_eq!(store.get(b).miss_count, 0);
    }
}
