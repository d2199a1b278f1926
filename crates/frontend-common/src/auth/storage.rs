//! Browser `localStorage` backing for the session token

use catalog_core::{SessionConfig, TokenStore};
use web_sys::Storage;

/// Token store over `window.localStorage`, key [`SessionConfig::TOKEN_STORAGE_KEY`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocalTokenStore;

/// Get localStorage
fn get_local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        get_local_storage()?
            .get_item(SessionConfig::TOKEN_STORAGE_KEY)
            .ok()
            .flatten()
    }

    fn save(&self, token: &str) {
        let Some(storage) = get_local_storage() else {
            tracing::warn!("localStorage unavailable, session will not survive a reload");
            return;
        };
        if let Err(err) = storage.set_item(SessionConfig::TOKEN_STORAGE_KEY, token) {
            tracing::warn!(error = ?err, "Failed to persist session token");
        }
    }

    fn clear(&self) {
        if let Some(storage) = get_local_storage() {
            if let Err(err) = storage.remove_item(SessionConfig::TOKEN_STORAGE_KEY) {
                tracing::warn!(error = ?err, "Failed to remove session token");
            }
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_save_load_clear() {
        let store = LocalTokenStore;
        store.clear();
        assert_eq!(store.load(), None);

        store.save("abc");
        assert_eq!(store.load().as_deref(), Some("abc"));

        store.clear();
        store.clear();
        assert_eq!(store.load(), None);
    }
}
