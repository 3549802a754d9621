use std::collections::HashMap;
use std::sync::Mutex;

use super::TokenStore;

/// In-memory store for tests and embedders that manage credentials
/// themselves.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with a credential under the preferred key.
    pub fn with_token(value: &str) -> Self {
        let store = Self::new();
        store.write(super::AUTH_KEY, value);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AUTH_KEY;

    #[test]
    fn test_write_read_remove() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.read("k"), None);

        store.write("k", "v");
        assert_eq!(store.read("k").as_deref(), Some("v"));

        store.remove("k");
        assert_eq!(store.read("k"), None);
    }

    #[test]
    fn test_with_token_seeds_auth_key() {
        let store = MemoryTokenStore::with_token("tok");
        assert_eq!(store.read(AUTH_KEY).as_deref(), Some("tok"));
    }
}
