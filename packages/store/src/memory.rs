use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::repo::KeyValueStore;

/// In-memory KeyValueStore for testing and as a last-resort fallback.
///
/// Clones share the same map, so a test can hand one clone to the code under
/// test and inspect the other.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.items.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    async fn get_item(&self, key: &str) -> Option<String> {
        self.items
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    async fn set_item(&self, key: &str, value: String) {
        self.items
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value);
    }

    async fn remove_item(&self, key: &str) {
        self.items
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserProfile;
    use crate::repo::{ProfileRepository, USER_KEY};

    #[tokio::test]
    async fn test_set_get_remove() {
        let store = MemoryStore::new();

        assert!(store.get_item("theme").await.is_none());

        store.set_item("theme", "dark".to_string()).await;
        assert_eq!(store.get_item("theme").await.as_deref(), Some("dark"));

        store.set_item("theme", "light".to_string()).await;
        assert_eq!(store.get_item("theme").await.as_deref(), Some("light"));
        assert_eq!(store.len(), 1);

        store.remove_item("theme").await;
        assert!(store.get_item("theme").await.is_none());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_save_and_load_profile() {
        let store = MemoryStore::new();
        let repo = ProfileRepository::new(store.clone());

        // Initially empty
        assert!(repo.load().await.is_none());

        repo.save(&UserProfile::demo()).await.unwrap();

        // Stored under the "user" key as JSON
        let raw = store.get_item(USER_KEY).await.unwrap();
        assert!(raw.contains("\"profilePic\":\"img/avery.jpg\""));

        assert_eq!(repo.load().await, Some(UserProfile::demo()));
    }

    #[tokio::test]
    async fn test_save_replaces_previous_profile() {
        let store = MemoryStore::new();
        let repo = ProfileRepository::new(store.clone());

        let mut other = UserProfile::demo();
        other.name = "Someone Else".to_string();
        other.clubs.clear();
        repo.save(&other).await.unwrap();

        repo.save(&UserProfile::demo()).await.unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(repo.load().await, Some(UserProfile::demo()));
    }

    #[tokio::test]
    async fn test_malformed_profile_is_absent() {
        let store = MemoryStore::new();
        store.set_item(USER_KEY, "{not json".to_string()).await;

        let repo = ProfileRepository::new(store);
        assert!(repo.load().await.is_none());
    }

    #[tokio::test]
    async fn test_clear_profile() {
        let store = MemoryStore::new();
        store.set_item("theme", "dark".to_string()).await;

        let repo = ProfileRepository::new(store.clone());
        repo.save(&UserProfile::demo()).await.unwrap();
        repo.clear().await;

        assert!(repo.load().await.is_none());
        // Other keys are left alone
        assert_eq!(store.get_item("theme").await.as_deref(), Some("dark"));
    }
}
