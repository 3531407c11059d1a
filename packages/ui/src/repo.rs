//! Shared constructors for the platform's session store and image host.
//!
//! - **Web** (WASM + `web` feature): browser local storage via [`store::LocalStorageStore`]
//! - **Native**: one file per key under `<data_dir>/profilebox/` via [`store::FileStore`]

use api::{ImageHostConfig, ImgbbClient};
use store::SessionStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorageStore;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStore = store::MemoryStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = store::FileStore;

/// Create the session store for this platform.
pub fn make_session_store() -> SessionStore<PlatformStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionStore::new(store::LocalStorageStore::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        SessionStore::new(store::MemoryStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("profilebox");
        SessionStore::new(store::FileStore::new(base))
    }
}

/// Create the image host client from the environment.
///
/// A missing API key is logged and yields a client whose uploads always fail,
/// so the app still starts and registration reports the failure to the user.
pub fn make_image_host() -> ImgbbClient {
    match ImageHostConfig::from_env() {
        Ok(config) => ImgbbClient::new(&config),
        Err(e) => {
            tracing::error!("{}; profile picture uploads will fail", e);
            ImgbbClient::unconfigured()
        }
    }
}
