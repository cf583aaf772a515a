use folio_core::{KeyValueStore, MemoryStore, PreferenceStore, StorageError};
use web_sys::Storage;

use crate::dom::js_err;

/// `localStorage` when the browser grants it, an in-page map otherwise.
pub(crate) enum BrowserStore {
    Local(Storage),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub(crate) fn open() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        match storage {
            Some(storage) => BrowserStore::Local(storage),
            None => {
                gloo::console::warn!("preferences: localStorage unavailable, using memory");
                BrowserStore::Memory(MemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            BrowserStore::Local(storage) => storage.get_item(key).map_err(|err| {
                StorageError::Rejected {
                    key: key.to_string(),
                    reason: js_err(err),
                }
            }),
            BrowserStore::Memory(store) => store.read(key),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            BrowserStore::Local(storage) => storage.set_item(key, value).map_err(|err| {
                StorageError::Rejected {
                    key: key.to_string(),
                    reason: js_err(err),
                }
            }),
            BrowserStore::Memory(store) => store.write(key, value),
        }
    }
}

pub(crate) fn preference_store() -> PreferenceStore<BrowserStore> {
    PreferenceStore::new(BrowserStore::open())
}
