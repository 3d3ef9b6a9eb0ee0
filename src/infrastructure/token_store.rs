//! Bearer token persistence
//!
//! The browser keeps the token in `localStorage`, with `sessionStorage` as a
//! fallback location. Outside a browser there is no persistent storage and
//! every read answers `None`.

use std::sync::{Arc, PoisonError, RwLock};

/// Storage key holding the bearer token
pub const TOKEN_KEY: &str = "token";

pub trait TokenStore: Send + Sync {
    fn get_token(&self) -> Option<String>;
    fn set_token(&self, token: &str);
    fn clear_token(&self);
}

/// One key-value storage area, such as `localStorage` or `sessionStorage`
pub trait StorageArea {
    fn get_item(&self, key: &str) -> Option<String>;
    /// Returns whether the value was stored
    fn set_item(&self, key: &str, value: &str) -> bool;
    fn remove_item(&self, key: &str);
}

/// Token from `primary`, else from `secondary`. An empty value counts as
/// missing.
pub fn read_token(primary: Option<&dyn StorageArea>, secondary: Option<&dyn StorageArea>) -> Option<String> {
    [primary, secondary]
        .into_iter()
        .flatten()
        .find_map(|area| area.get_item(TOKEN_KEY).filter(|v| !v.is_empty()))
}

/// Tokens are only ever written to `primary`
pub fn write_token(primary: Option<&dyn StorageArea>, token: &str) -> bool {
    primary.is_some_and(|area| area.set_item(TOKEN_KEY, token))
}

pub fn erase_token(primary: Option<&dyn StorageArea>, secondary: Option<&dyn StorageArea>) {
    for area in [primary, secondary].into_iter().flatten() {
        area.remove_item(TOKEN_KEY);
    }
}

/// Token store backed by the browser's Web Storage
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTokenStore;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::StorageArea;
    use web_sys::Storage;

    impl StorageArea for Storage {
        fn get_item(&self, key: &str) -> Option<String> {
            Storage::get_item(self, key).ok().flatten()
        }

        fn set_item(&self, key: &str, value: &str) -> bool {
            Storage::set_item(self, key, value).is_ok()
        }

        fn remove_item(&self, key: &str) {
            let _ = Storage::remove_item(self, key);
        }
    }

    pub fn local() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    pub fn session() -> Option<Storage> {
        web_sys::window()?.session_storage().ok().flatten()
    }

    pub fn area(storage: &Option<Storage>) -> Option<&dyn StorageArea> {
        storage.as_ref().map(|s| s as &dyn StorageArea)
    }
}

#[cfg(target_arch = "wasm32")]
impl TokenStore for BrowserTokenStore {
    fn get_token(&self) -> Option<String> {
        let (local, session) = (web::local(), web::session());
        read_token(web::area(&local), web::area(&session))
    }

    fn set_token(&self, token: &str) {
        let local = web::local();
        if !write_token(web::area(&local), token) {
            tracing::warn!("Failed to persist token to localStorage");
        }
    }

    fn clear_token(&self) {
        let (local, session) = (web::local(), web::session());
        erase_token(web::area(&local), web::area(&session));
    }
}

// Server rendering / desktop: no Web Storage available
#[cfg(not(target_arch = "wasm32"))]
impl TokenStore for BrowserTokenStore {
    fn get_token(&self) -> Option<String> {
        None
    }

    fn set_token(&self, _token: &str) {
        tracing::trace!("No browser storage, token not persisted");
    }

    fn clear_token(&self) {}
}

/// Process-local token store
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    token: Arc<RwLock<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(RwLock::new(Some(token.into()))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get_token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_token(&self, token: &str) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
    }

    fn clear_token(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
