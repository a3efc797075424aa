use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

// 1. CredentialStore Contract
/// CredentialStore
///
/// Defines the abstract, strictly read-only contract over whatever mechanism
/// persists the auth token. The navigation core never writes, refreshes, or
/// validates the credential; the login flow owns the value, some storage
/// layer persists it, and this trait is the keyhole the guard peeks through.
///
/// Swappable implementations cover the real deployments (a JSON file under
/// the desktop shell's profile directory) and tests (an in-memory map),
/// without the guard knowing the difference.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Reads the value stored under `key`, if any. The guard treats the
    /// returned string as fully opaque and only cares whether it is
    /// non-empty.
    async fn get(&self, key: &str) -> Option<String>;
}

/// CredentialState
///
/// The concrete type used to share credential access across the navigator.
pub type CredentialState = Arc<dyn CredentialStore>;

// 2. In-Memory Implementation (Tests & Embedding Hosts)
/// MemoryCredentialStore
///
/// A fixed in-memory key-value map. Used by tests and by hosts that manage
/// the token themselves and just hand the navigator a snapshot.
#[derive(Clone, Default)]
pub struct MemoryCredentialStore {
    entries: HashMap<String, String>,
}

impl MemoryCredentialStore {
    /// A store holding nothing: every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A store holding a single entry.
    pub fn with(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self { entries }
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

// 3. File-Backed Implementation (Desktop Shell)
/// FileCredentialStore
///
/// Reads the token from a flat JSON object of string keys to string values,
/// the desktop-shell analogue of browser local storage. The file is re-read
/// on every lookup so a login completed in another window is picked up by
/// the next navigation without any invalidation protocol.
///
/// A missing, unreadable, or malformed file is *not* an error: it simply
/// means "no credential", which the guard handles as a normal branch.
#[derive(Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn get(&self, key: &str) -> Option<String> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "credential file unreadable");
                return None;
            }
        };

        match serde_json::from_str::<HashMap<String, String>>(&raw) {
            Ok(entries) => entries.get(key).cloned(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "credential file is not a flat JSON string map");
                None
            }
        }
    }
}
