//! Shared storage and config constructors for all platforms.
//!
//! Returns a [`store::KeyValueStore`] backed by the appropriate storage:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorageStore`]
//! - **Desktop** (native): filesystem via [`store::FileStore`] under the platform data dir

use store::{KeyValueStore, ProfileRepository, SweAppConfig};

/// Create a platform-appropriate key-value store.
pub fn make_store() -> impl KeyValueStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        store::FileStore::new(data_dir())
    }
}

/// Create a profile repository on the platform store.
pub fn make_profiles() -> ProfileRepository<impl KeyValueStore> {
    ProfileRepository::new(make_store())
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn data_dir() -> std::path::PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("sweapp")
}

/// Load the app configuration.
///
/// Native builds read `sweapp.toml` from the data directory. The web build
/// has no config file and always uses the defaults.
pub fn load_config() -> SweAppConfig {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SweAppConfig::default()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        load_config_from(&data_dir().join(SweAppConfig::filename()))
    }
}

/// Read a config file, falling back to the defaults when it is missing or
/// does not parse.
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn load_config_from(path: &std::path::Path) -> SweAppConfig {
    let Ok(text) = std::fs::read_to_string(path) else {
        return SweAppConfig::default();
    };
    match SweAppConfig::from_toml(&text) {
        Ok(config) => {
            tracing::info!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            tracing::warn!("Ignoring invalid {}: {}", path.display(), e);
            SweAppConfig::default()
        }
    }
}
