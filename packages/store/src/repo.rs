//! # Repository — the user profile on top of an abstract key-value store
//!
//! All reads and writes go through the [`KeyValueStore`] trait, so the same
//! logic works against an in-memory store (tests), the filesystem (desktop),
//! or the browser's `localStorage` (web).
//!
//! ## [`KeyValueStore`] trait
//!
//! An async interface modelled on the browser storage API: `get_item`,
//! `set_item` and `remove_item` over string keys and string values.
//! Implementations live in sibling modules ([`crate::memory`],
//! [`crate::file_store`], `crate::local_storage`).
//!
//! ## [`ProfileRepository`]
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`save`](ProfileRepository::save) | Serialises a [`UserProfile`] to JSON and writes it under [`USER_KEY`], replacing whatever was there. |
//! | [`load`](ProfileRepository::load) | Reads and parses the record. A malformed record is logged and reported as absent. |
//! | [`clear`](ProfileRepository::clear) | Removes the record (sign-out). |

use crate::error::StoreError;
use crate::models::UserProfile;

/// Storage key holding the signed-in user's profile.
pub const USER_KEY: &str = "user";

/// Async trait for string-keyed persistent storage.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> impl std::future::Future<Output = Option<String>>;
    fn set_item(&self, key: &str, value: String) -> impl std::future::Future<Output = ()>;
    fn remove_item(&self, key: &str) -> impl std::future::Future<Output = ()>;
}

/// The stored user profile, backed by a KeyValueStore.
pub struct ProfileRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ProfileRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Write the profile wholesale under [`USER_KEY`].
    pub async fn save(&self, profile: &UserProfile) -> Result<(), StoreError> {
        let json = serde_json::to_string(profile)?;
        self.store.set_item(USER_KEY, json).await;
        tracing::debug!(key = USER_KEY, "Saved user profile");
        Ok(())
    }

    /// Read the stored profile, if any.
    pub async fn load(&self) -> Option<UserProfile> {
        let raw = self.store.get_item(USER_KEY).await?;
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(e) => {
                tracing::warn!(key = USER_KEY, "Ignoring malformed user profile: {}", e);
                None
            }
        }
    }

    /// Remove the stored profile.
    pub async fn clear(&self) {
        self.store.remove_item(USER_KEY).await;
        tracing::debug!(key = USER_KEY, "Cleared user profile");
    }
}
