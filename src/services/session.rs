//! Per-conversation session storage
//!
//! Navigation state is scoped to one conversational session, keyed by user
//! and chat. The store works on whole snapshots: callers read the full state,
//! compute a new one, and write it back, so each mutation stays atomic even
//! if the host later delivers events concurrently.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{OtchetnikError, OtchetnikResult};
use crate::survey::NavigationState;

/// Identifies one conversational session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionKey {
    pub user_id: i64,
    pub chat_id: i64,
}

impl SessionKey {
    pub fn new(user_id: i64, chat_id: i64) -> Self {
        Self { user_id, chat_id }
    }
}

/// Whole-snapshot storage for active survey sessions
pub trait SessionStore {
    /// Read the full state for a session, if one is active
    fn load(&self, key: SessionKey) -> OtchetnikResult<Option<NavigationState>>;

    /// Replace the full state for a session
    fn store(&self, key: SessionKey, state: NavigationState) -> OtchetnikResult<()>;

    /// Discard a session's state (completion or cancellation)
    fn clear(&self, key: SessionKey) -> OtchetnikResult<()>;
}

/// In-memory session store
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<SessionKey, NavigationState>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(&self, key: SessionKey) -> OtchetnikResult<Option<NavigationState>> {
        let sessions = self
            .sessions
            .lock()
            .map_err(|e| OtchetnikError::Storage(format!("Session store poisoned: {}", e)))?;
        Ok(sessions.get(&key).cloned())
    }

    fn store(&self, key: SessionKey, state: NavigationState) -> OtchetnikResult<()> {
        let mut sessions = self
            .sessions
            .lock()
            .map_err(|e| OtchetnikError::Storage(format!("Session store poisoned: {}", e)))?;
        sessions.insert(key, state);
        Ok(())
    }

    fn clear(&self, key: SessionKey) -> OtchetnikResult<()> {
        let mut sessions = self
            .sessions
            .lock()
            .map_err(|e| OtchetnikError::Storage(format!("Session store poisoned: {}", e)))?;
        sessions.remove(&key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> NavigationState {
        NavigationState {
            survey_id: "start_business".into(),
            current_question_id: "q1".into(),
            answers: vec![],
            question_history: vec!["q1".into()],
            action_queue: vec![],
        }
    }

    #[test]
    fn test_round_trip() {
        let store = InMemorySessionStore::new();
        let key = SessionKey::new(1, 100);

        assert!(store.load(key).unwrap().is_none());

        store.store(key, sample_state()).unwrap();
        assert_eq!(store.load(key).unwrap(), Some(sample_state()));

        store.clear(key).unwrap();
        assert!(store.load(key).unwrap().is_none());
    }

    #[test]
    fn test_sessions_are_isolated_by_key() {
        let store = InMemorySessionStore::new();
        store.store(SessionKey::new(1, 100), sample_state()).unwrap();

        // Same user in another chat has no session
        assert!(store.load(SessionKey::new(1, 200)).unwrap().is_none());
        assert!(store.load(SessionKey::new(2, 100)).unwrap().is_none());
    }
}
