use std::sync::{Arc, Mutex};

use crate::SessionStore;

/// In-memory SessionStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn set(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store() {
        let store = MemoryStore::new();
        assert!(store.get().is_none());
        assert!(!store.is_present());
    }

    #[test]
    fn test_set_and_get() {
        let store = MemoryStore::new();
        store.set("abc");
        assert_eq!(store.get().as_deref(), Some("abc"));
        assert!(store.is_present());
    }

    #[test]
    fn test_last_write_wins() {
        let store = MemoryStore::new();
        store.set("first");
        store.set("second");
        assert_eq!(store.get().as_deref(), Some("second"));
    }

    #[test]
    fn test_clear() {
        let store = MemoryStore::new();
        store.set("abc");
        store.clear();
        assert!(store.get().is_none());

        // Clearing an empty store is a no-op
        store.clear();
        assert!(!store.is_present());
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("shared");
        assert_eq!(other.get().as_deref(), Some("shared"));
        other.clear();
        assert!(!store.is_present());
    }
}
