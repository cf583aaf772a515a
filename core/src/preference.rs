use std::cell::RefCell;
use std::collections::HashMap;

use crate::config::THEME_STORAGE_KEY;
use crate::error::StorageError;
use crate::theme::ThemePreference;

pub trait KeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process store for hosts without `localStorage`. Values last for the page only.
#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub struct PreferenceStore<S> {
    store: S,
    key: &'static str,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            key: THEME_STORAGE_KEY,
        }
    }

    pub fn get(&self) -> ThemePreference {
        let raw = self.store.read(self.key).ok().flatten();
        ThemePreference::parse(raw.as_deref())
    }

    pub fn set(&self, value: ThemePreference) -> Result<(), StorageError> {
        self.store.write(self.key, value.as_str())
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
