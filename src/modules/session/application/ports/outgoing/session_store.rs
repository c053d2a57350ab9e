//
// ──────────────────────────────────────────────────────────
// Port: durable session state (auth token + demo flag)
// ──────────────────────────────────────────────────────────
//
// Two slots, shared process-wide: the opaque auth token handed out by the
// backend (or the demo sentinel), and the demo-mode flag. Both facades
// consult this store on every call. Operations are synchronous and touch
// durable storage only; a storage failure is surfaced, never swallowed.
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session storage unavailable: {0}")]
    Unavailable(String),

    #[error("Session state corrupted: {0}")]
    Corrupted(String),
}

pub trait SessionStore: Send + Sync {
    fn token(&self) -> Result<Option<String>, SessionStoreError>;

    fn set_token(&self, token: &str) -> Result<(), SessionStoreError>;

    /// Clears the token AND the demo flag. A session without a token has
    /// no mode.
    fn remove_token(&self) -> Result<(), SessionStoreError>;

    fn demo_mode(&self) -> Result<bool, SessionStoreError>;

    fn set_demo_mode(&self, enabled: bool) -> Result<(), SessionStoreError>;

    fn is_authenticated(&self) -> Result<bool, SessionStoreError> {
        Ok(self.token()?.is_some())
    }
}
