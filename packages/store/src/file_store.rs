//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is a [`KeyValueStore`] implementation that persists each key
//! as its own file. It is used on desktop to keep the signed-in profile
//! across app restarts, the way `localStorage` does in the browser.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── items/
//!     └── <key>          # raw UTF-8 value
//! ```
//!
//! ## Platform data directories
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/sweapp/` |
//! | Linux | `~/.local/share/sweapp/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\sweapp\` |
//!
//! Keys must be plain file names; anything containing a path separator or
//! starting with a dot is rejected (reads miss, writes are dropped).

use std::path::PathBuf;

use crate::repo::KeyValueStore;

/// Filesystem-backed KeyValueStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn items_dir(&self) -> PathBuf {
        self.base.join("items")
    }

    fn item_path(&self, key: &str) -> Option<PathBuf> {
        if !is_valid_key(key) {
            tracing::warn!("Rejected storage key {:?}", key);
            return None;
        }
        Some(self.items_dir().join(key))
    }
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && !key.starts_with('.') && !key.contains(&['/', '\\', '\0'][..])
}

impl KeyValueStore for FileStore {
    async fn get_item(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.item_path(key)?).ok()
    }

    async fn set_item(&self, key: &str, value: String) {
        let Some(path) = self.item_path(key) else {
            return;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(e) = std::fs::write(&path, value) {
            tracing::warn!("Failed to write {}: {}", path.display(), e);
        }
    }

    async fn remove_item(&self, key: &str) {
        let Some(path) = self.item_path(key) else {
            return;
        };
        let _ = std::fs::remove_file(path);
    }
}
