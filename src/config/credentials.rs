use crate::core::{AppError, Result};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Storage key under which the backend bearer token lives.
pub const TOKEN_KEY: &str = "Token";

/// Process-wide credential store.
///
/// The browser original keeps the bearer token in persisted local storage
/// under the key `"Token"`; this is the same contract as an in-process
/// key/value store shared by every API client. Cloning is cheap — clones
/// share the underlying map. There is no refresh logic: an expired token
/// stays in the store and every subsequent call fails with the backend's
/// auth error.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded from the environment (`LEDGERLINE_API_TOKEN`),
    /// if the variable is present.
    pub fn from_env() -> Self {
        let store = Self::new();
        if let Ok(token) = std::env::var("LEDGERLINE_API_TOKEN") {
            store.set(TOKEN_KEY, token);
        }
        store
    }

    pub fn set(&self, key: &str, value: impl Into<String>) {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        map.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.get(key).cloned()
    }

    pub fn remove(&self, key: &str) {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        map.remove(key);
    }

    /// Fetch the bearer token, failing when none has been stored.
    pub fn bearer_token(&self) -> Result<String> {
        self.get(TOKEN_KEY)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::unauthorized("no auth token in credential store"))
    }
}
