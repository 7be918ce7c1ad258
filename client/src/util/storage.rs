//! Browser localStorage backend for the persisted session slot.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the csr-only web-sys glue so the core `SessionStore` can
//! persist the identity without knowing it runs in a browser. Non-browser
//! builds behave like an always-empty store.

use si7ati::storage::{SessionStorage, StorageError};

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or_else(|| StorageError::Unavailable("no localStorage".to_owned()))?;
            storage
                .set_item(key, value)
                .map_err(|_| StorageError::Unavailable("localStorage rejected write".to_owned()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                return Ok(());
            };
            storage
                .remove_item(key)
                .map_err(|_| StorageError::Unavailable("localStorage rejected delete".to_owned()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Ok(())
        }
    }
}
