pub mod adapter;
pub mod application;

pub use adapter::outgoing::{FileSessionStore, MemorySessionStore};
pub use application::ports::outgoing::{SessionStore, SessionStoreError};
