//! Shared API key store.

use std::sync::{Arc, PoisonError, RwLock};

/// The currently selected API key, shared between the gateway and the
/// terminal key prompt. Requests read it at call time.
#[derive(Debug, Clone, Default)]
pub struct ApiKeyStore {
    inner: Arc<RwLock<Option<String>>>,
}

impl ApiKeyStore {
    pub fn new(initial: Option<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(initial.filter(|k| !k.trim().is_empty()))),
        }
    }

    pub fn get(&self) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_set(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Replace the key; a blank key clears it.
    pub fn set(&self, key: impl Into<String>) {
        let key = key.into().trim().to_string();
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) =
            (!key.is_empty()).then_some(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_the_key() {
        let store = ApiKeyStore::new(None);
        let gateway_view = store.clone();
        assert!(!gateway_view.is_set());

        store.set("  AIza-test  ");
        assert_eq!(gateway_view.get().as_deref(), Some("AIza-test"));

        store.set("   ");
        assert!(!gateway_view.is_set());
    }

    #[test]
    fn test_blank_initial_key_is_ignored() {
        assert!(!ApiKeyStore::new(Some(String::new())).is_set());
    }
}
