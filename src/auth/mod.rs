//! Credential storage and bearer-header normalization.
//!
//! Credentials live in a [`TokenStore`], the crate's stand-in for browser
//! localStorage. Reads check two keys: `auth` (preferred) and `token`
//! (legacy). The dual read is a migration shim confined to [`access_token`];
//! new writers should only touch `auth`.

mod file;
mod memory;

pub use file::FileTokenStore;
pub use memory::MemoryTokenStore;

/// Preferred credential key.
pub const AUTH_KEY: &str = "auth";

/// Legacy credential key, still honored on reads and cleared on a 401.
pub const TOKEN_KEY: &str = "token";

/// Synchronous key-value credential storage.
#[cfg_attr(test, mockall::automock)]
pub trait TokenStore: Send + Sync {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Looks up the stored credential, preferring `auth` over the legacy `token`
/// key.
pub fn access_token(store: &dyn TokenStore) -> Option<String> {
    store
        .read(AUTH_KEY)
        .or_else(|| store.read(TOKEN_KEY))
        .filter(|value| !value.is_empty())
}

/// Normalizes a raw credential into an `Authorization` header value.
///
/// An existing `"Bearer "` prefix is kept, never doubled.
pub fn bearer(raw: &str) -> String {
    if raw.starts_with("Bearer ") {
        raw.to_string()
    } else {
        format!("Bearer {}", raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_adds_prefix() {
        assert_eq!(bearer("abc123"), "Bearer abc123");
    }

    #[test]
    fn test_bearer_keeps_existing_prefix() {
        assert_eq!(bearer("Bearer abc123"), "Bearer abc123");
    }

    #[test]
    fn test_bearer_is_case_sensitive_about_the_prefix() {
        // "bearer x" is not recognized as prefixed; it gets wrapped as-is.
        assert_eq!(bearer("bearer x"), "Bearer bearer x");
    }

    #[test]
    fn test_access_token_prefers_auth_key() {
        let store = MemoryTokenStore::new();
        store.write(AUTH_KEY, "from-auth");
        store.write(TOKEN_KEY, "from-token");
        assert_eq!(access_token(&store).as_deref(), Some("from-auth"));
    }

    #[test]
    fn test_access_token_falls_back_to_token_key() {
        let store = MemoryTokenStore::new();
        store.write(TOKEN_KEY, "from-token");
        assert_eq!(access_token(&store).as_deref(), Some("from-token"));
    }

    #[test]
    fn test_access_token_absent() {
        let store = MemoryTokenStore::new();
        assert_eq!(access_token(&store), None);
    }

    #[test]
    fn test_access_token_ignores_empty_value() {
        let store = MemoryTokenStore::new();
        store.write(AUTH_KEY, "");
        assert_eq!(access_token(&store), None);
    }
}
