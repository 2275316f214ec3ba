/**
 * Session Store
 *
 * Single source of truth for "am I authenticated" on the client. The token
 * and the cached user profile are one value object written and cleared
 * together, so there is no window where one exists without the other.
 *
 * The store keeps the session in memory and mirrors it to a JSON file so a
 * restarted process picks up where it left off. Disk failures degrade to
 * memory-only operation with a warning; they never fail an operation.
 */

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::shared::models::UserProfile;

/// File name under the platform data directory.
const SESSION_FILE: &str = "session.json";

/// The persisted session: bearer token plus the profile cached for
/// immediate UI rendering without a round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

/// In-memory cache state. `Unloaded` means the disk copy has not been
/// consulted yet; it is read at most once.
#[derive(Debug)]
enum Cache {
    Unloaded,
    Loaded(Option<Session>),
}

/// Client session store.
///
/// Cheaply cloneable; clones share the same state, so the API client and
/// the auth controller observe each other's changes.
#[derive(Debug, Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    /// Backing file; `None` for a memory-only store.
    path: Option<PathBuf>,
    cache: Mutex<Cache>,
}

impl SessionStore {
    /// Store backed by the platform data directory
    /// (e.g. `~/.local/share/geosentinel/session.json`).
    pub fn new() -> Self {
        let path = dirs::data_dir().map(|dir| dir.join("geosentinel").join(SESSION_FILE));
        if path.is_none() {
            tracing::warn!("No platform data directory; session will not persist");
        }
        Self::with_path(path)
    }

    /// Store backed by an explicit file, or memory-only when `None`.
    pub fn with_path(path: Option<PathBuf>) -> Self {
        Self {
            inner: Arc::new(Inner {
                path,
                cache: Mutex::new(Cache::Unloaded),
            }),
        }
    }

    /// Memory-only store. Used by tests and short-lived tools.
    pub fn in_memory() -> Self {
        Self::with_path(None)
    }

    /// Store the session in memory and on disk. Token and user are written
    /// as a single value.
    pub fn set(&self, session: Session) {
        let mut cache = self.inner.cache.lock().expect("session cache poisoned");
        if let Some(path) = &self.inner.path {
            if let Err(e) = persist(path, &session) {
                tracing::warn!("Failed to persist session to {}: {}", path.display(), e);
            }
        }
        *cache = Cache::Loaded(Some(session));
    }

    /// Current session: the in-memory value if present, otherwise one lazy
    /// load from disk. `None` if never set or cleared.
    pub fn get(&self) -> Option<Session> {
        let mut cache = self.inner.cache.lock().expect("session cache poisoned");
        if let Cache::Unloaded = *cache {
            let loaded = self.inner.path.as_deref().and_then(load);
            *cache = Cache::Loaded(loaded);
        }
        match &*cache {
            Cache::Loaded(session) => session.clone(),
            Cache::Unloaded => None,
        }
    }

    /// Current bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.get().map(|s| s.token)
    }

    /// Cached user profile, if any.
    pub fn user(&self) -> Option<UserProfile> {
        self.get().map(|s| s.user)
    }

    /// Remove the session from memory and disk. Idempotent: clearing an
    /// already-empty store is a no-op.
    pub fn clear(&self) {
        let mut cache = self.inner.cache.lock().expect("session cache poisoned");
        *cache = Cache::Loaded(None);
        if let Some(path) = &self.inner.path {
            match std::fs::remove_file(path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    tracing::warn!("Failed to remove session file {}: {}", path.display(), e);
                }
            }
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

fn persist(path: &std::path::Path, session: &Session) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_vec_pretty(session)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    std::fs::write(path, json)
}

fn load(path: &std::path::Path) -> Option<Session> {
    let bytes = std::fs::read(path).ok()?;
    match serde_json::from_slice(&bytes) {
        Ok(session) => Some(session),
        Err(e) => {
            // A corrupt file is treated as logged out, not an error
            tracing::warn!("Discarding unreadable session file {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> Session {
        Session {
            token: "token-abc".to_string(),
            user: UserProfile {
                id: "user-1".to_string(),
                name: "Test User".to_string(),
                email: "test@example.com".to_string(),
                organization: None,
                role: "user".to_string(),
                phone: None,
            },
        }
    }

    #[test]
    fn test_set_then_get_round_trip() {
        let store = SessionStore::in_memory();
        store.set(sample_session());
        assert_eq!(store.token().as_deref(), Some("token-abc"));
        assert_eq!(store.user().unwrap().email, "test@example.com");
    }

    #[test]
    fn test_get_without_set_is_none() {
        let store = SessionStore::in_memory();
        assert!(store.get().is_none());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = SessionStore::in_memory();
        store.set(sample_session());
        store.clear();
        assert!(store.get().is_none());
        // Second clear must not error
        store.clear();
        assert!(store.get().is_none());
    }

    #[test]
    fn test_survives_simulated_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = SessionStore::with_path(Some(path.clone()));
        store.set(sample_session());

        // A fresh store on the same path simulates a process restart
        let reloaded = SessionStore::with_path(Some(path));
        assert_eq!(reloaded.get(), Some(sample_session()));
    }

    #[test]
    fn test_clear_removes_disk_copy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = SessionStore::with_path(Some(path.clone()));
        store.set(sample_session());
        store.clear();

        let reloaded = SessionStore::with_path(Some(path));
        assert!(reloaded.get().is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let store = SessionStore::in_memory();
        let other = store.clone();
        store.set(sample_session());
        assert!(other.get().is_some());
        other.clear();
        assert!(store.get().is_none());
    }

    #[test]
    fn test_corrupt_file_treated_as_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, b"not json").unwrap();

        let store = SessionStore::with_path(Some(path));
        assert!(store.get().is_none());
    }
}
