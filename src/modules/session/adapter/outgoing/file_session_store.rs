use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::modules::session::application::ports::outgoing::{SessionStore, SessionStoreError};

/// File-backed implementation of `SessionStore`.
///
/// The durable analog of the browser's local storage: a single JSON file
/// under the platform config directory holding the auth token and the
/// demo-mode flag. Every operation reads and rewrites the whole file;
/// session state is two fields, so there is nothing to optimize.
///
/// Concurrent writers (two dashboard processes) are not coordinated;
/// last write wins, same as two browser tabs sharing local storage.
pub struct FileSessionStore {
    path: PathBuf,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(default)]
    demo_mode: bool,
}

impl FileSessionStore {
    /// Open the store at the platform-default location
    /// (e.g. `~/.config/portfolio_client/session.json` on Linux).
    pub fn open_default() -> Result<Self, SessionStoreError> {
        let dirs = ProjectDirs::from("design", "amgad", "portfolio_client").ok_or_else(|| {
            SessionStoreError::Unavailable("could not determine a config directory".to_string())
        })?;
        Self::open(dirs.config_dir().join("session.json"))
    }

    /// Open the store at an explicit path, creating parent directories.
    pub fn open(path: PathBuf) -> Result<Self, SessionStoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| SessionStoreError::Unavailable(e.to_string()))?;
        }
        Ok(Self { path })
    }

    fn load(&self) -> Result<SessionFile, SessionStoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw)
                .map_err(|e| SessionStoreError::Corrupted(e.to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(SessionFile::default()),
            Err(e) => Err(SessionStoreError::Unavailable(e.to_string())),
        }
    }

    fn save(&self, state: &SessionFile) -> Result<(), SessionStoreError> {
        let raw = serde_json::to_string_pretty(state)
            .map_err(|e| SessionStoreError::Corrupted(e.to_string()))?;
        fs::write(&self.path, raw).map_err(|e| SessionStoreError::Unavailable(e.to_string()))
    }
}

impl SessionStore for FileSessionStore {
    fn token(&self) -> Result<Option<String>, SessionStoreError> {
        Ok(self.load()?.token)
    }

    fn set_token(&self, token: &str) -> Result<(), SessionStoreError> {
        let mut state = self.load()?;
        state.token = Some(token.to_string());
        self.save(&state)
    }

    fn remove_token(&self) -> Result<(), SessionStoreError> {
        self.save(&SessionFile::default())
    }

    fn demo_mode(&self) -> Result<bool, SessionStoreError> {
        Ok(self.load()?.demo_mode)
    }

    fn set_demo_mode(&self, enabled: bool) -> Result<(), SessionStoreError> {
        let mut state = self.load()?;
        state.demo_mode = enabled;
        self.save(&state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FileSessionStore {
        FileSessionStore::open(dir.path().join("session.json")).unwrap()
    }

    #[test]
    fn test_token_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.token().unwrap(), None);
        assert!(!store.is_authenticated().unwrap());

        store.set_token("tok-123").unwrap();
        assert_eq!(store.token().unwrap().as_deref(), Some("tok-123"));
        assert!(store.is_authenticated().unwrap());
    }

    #[test]
    fn test_remove_token_clears_demo_flag_too() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.set_token("tok-123").unwrap();
        store.set_demo_mode(true).unwrap();

        store.remove_token().unwrap();

        assert_eq!(store.token().unwrap(), None);
        assert!(!store.demo_mode().unwrap());
    }

    #[test]
    fn test_state_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = FileSessionStore::open(path.clone()).unwrap();
        store.set_token("tok-123").unwrap();
        store.set_demo_mode(true).unwrap();
        drop(store);

        let reopened = FileSessionStore::open(path).unwrap();
        assert_eq!(reopened.token().unwrap().as_deref(), Some("tok-123"));
        assert!(reopened.demo_mode().unwrap());
    }

    #[test]
    fn test_corrupted_file_is_reported_not_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();

        let store = FileSessionStore::open(path).unwrap();
        assert!(matches!(
            store.token().unwrap_err(),
            SessionStoreError::Corrupted(_)
        ));
    }
}
