use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::error::StorageError;

/// Persistent key-value storage for small string values.
pub trait TokenStorage {
    /// Read the value stored under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value stored under `key`.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// [`TokenStorage`] backed by the browser's `localStorage`.
///
/// Values are stored as plain strings rather than JSON so they stay
/// readable by anything else inspecting the same origin's storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTokenStorage;

impl LocalTokenStorage {
    fn storage() -> Result<Storage, StorageError> {
        require_storage(
            web_sys::window()
                .map(|window| window.local_storage())
                .transpose()
                .map_err(js_error)?
                .flatten(),
        )
    }
}

impl TokenStorage for LocalTokenStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?.get_item(key).map_err(js_error)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?.remove_item(key).map_err(js_error)
    }
}

fn require_storage(storage: Option<Storage>) -> Result<Storage, StorageError> {
    storage.ok_or(StorageError::Unavailable)
}

fn js_error(err: JsValue) -> StorageError {
    StorageError::Backend(
        err.as_string()
            .unwrap_or_else(|| "localStorage operation failed".to_string()),
    )
}
