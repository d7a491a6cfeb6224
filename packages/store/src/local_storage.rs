//! # Browser `localStorage` store — web-side persistence
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] implementation used on the
//! **web platform**. It writes straight through to `window.localStorage`, so
//! values survive page loads and are visible to every page on the origin.
//!
//! ## Error handling
//!
//! All trait methods swallow errors: a missing window, storage disabled by
//! the browser, or a quota error reads as "nothing stored" and drops the
//! write. Failures are logged at `warn`.

use crate::repo::KeyValueStore;
use web_sys::Storage;

/// localStorage-backed KeyValueStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<Storage> {
        match web_sys::window()?.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                tracing::warn!("localStorage unavailable: {:?}", e);
                None
            }
        }
    }
}

impl KeyValueStore for LocalStorageStore {
    async fn get_item(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok()?
    }

    async fn set_item(&self, key: &str, value: String) {
        let Some(storage) = self.storage() else {
            return;
        };
        if let Err(e) = storage.set_item(key, &value) {
            tracing::warn!("Failed to write localStorage key {:?}: {:?}", key, e);
        }
    }

    async fn remove_item(&self, key: &str) {
        let Some(storage) = self.storage() else {
            return;
        };
        let _ = storage.remove_item(key);
    }
}
