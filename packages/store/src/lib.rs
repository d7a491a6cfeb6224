pub mod config;
pub mod error;
pub mod models;
pub mod repo;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

pub use config::{LoginConfig, SweAppConfig, TerminalAction};
pub use error::StoreError;
pub use models::UserProfile;
pub use repo::{KeyValueStore, ProfileRepository, USER_KEY};
