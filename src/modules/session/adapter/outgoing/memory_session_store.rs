use std::sync::Mutex;

use crate::modules::session::application::ports::outgoing::{SessionStore, SessionStoreError};

/// In-memory implementation of `SessionStore`.
///
/// Nothing survives the process; meant for tests and for embedders that
/// manage persistence themselves. Constructed fresh per test so session
/// state never leaks between cases.
#[derive(Default)]
pub struct MemorySessionStore {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    token: Option<String>,
    demo_mode: bool,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_state<T>(
        &self,
        f: impl FnOnce(&mut State) -> T,
    ) -> Result<T, SessionStoreError> {
        let mut guard = self
            .state
            .lock()
            .map_err(|_| SessionStoreError::Corrupted("session state poisoned".to_string()))?;
        Ok(f(&mut guard))
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Result<Option<String>, SessionStoreError> {
        self.with_state(|s| s.token.clone())
    }

    fn set_token(&self, token: &str) -> Result<(), SessionStoreError> {
        self.with_state(|s| s.token = Some(token.to_string()))
    }

    fn remove_token(&self) -> Result<(), SessionStoreError> {
        self.with_state(|s| {
            s.token = None;
            s.demo_mode = false;
        })
    }

    fn demo_mode(&self) -> Result<bool, SessionStoreError> {
        self.with_state(|s| s.demo_mode)
    }

    fn set_demo_mode(&self, enabled: bool) -> Result<(), SessionStoreError> {
        self.with_state(|s| s.demo_mode = enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_store_is_unauthenticated() {
        let store = MemorySessionStore::new();
        assert!(!store.is_authenticated().unwrap());
        assert!(!store.demo_mode().unwrap());
    }

    #[test]
    fn test_remove_token_resets_both_slots() {
        let store = MemorySessionStore::new();
        store.set_token("tok").unwrap();
        store.set_demo_mode(true).unwrap();

        store.remove_token().unwrap();

        assert_eq!(store.token().unwrap(), None);
        assert!(!store.demo_mode().unwrap());
    }
}
