//! Persistent Store Adapter
//!
//! Keeps the item labels as one JSON array of strings under a single key.
//! Every save rewrites the whole list.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::warn;

use crate::error::{TodoError, TodoResult};

/// Synchronous string key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> TodoResult<()>;
    fn remove(&self, key: &str) -> TodoResult<()>;
}

/// In-memory store. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> TodoResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> TodoResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// `window.localStorage`, or memory when the browser denies access to it
pub enum BrowserStorage {
    Local(web_sys::Storage),
    Memory(MemoryStore),
}

impl BrowserStorage {
    pub fn open() -> Self {
        match web_sys::window().and_then(|window| window.local_storage().ok().flatten()) {
            Some(storage) => Self::Local(storage),
            None => {
                warn!("localStorage unavailable, items will not survive a reload");
                Self::Memory(MemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            Self::Local(storage) => storage.get_item(key).ok().flatten(),
            Self::Memory(memory) => memory.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> TodoResult<()> {
        match self {
            Self::Local(storage) => storage
                .set_item(key, value)
                .map_err(|e| TodoError::StorageWrite(format!("{:?}", e))),
            Self::Memory(memory) => memory.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> TodoResult<()> {
        match self {
            Self::Local(storage) => storage
                .remove_item(key)
                .map_err(|e| TodoError::StorageWrite(format!("{:?}", e))),
            Self::Memory(memory) => memory.remove(key),
        }
    }
}

/// Reads and writes the label list under `key`
pub struct ItemStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> ItemStore<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Stored labels. Missing or unreadable data loads as an empty list.
    pub fn load(&self) -> Vec<String> {
        let Some(raw) = self.backend.get(&self.key) else {
            return Vec::new();
        };
        match parse_items(&raw) {
            Ok(items) => items,
            Err(e) => {
                warn!(key = %self.key, error = %e, "ignoring unreadable stored items");
                Vec::new()
            }
        }
    }

    pub fn save(&self, items: &[String]) -> TodoResult<()> {
        let raw = serde_json::to_string(items)?;
        self.backend.set(&self.key, &raw)
    }

    /// Remove the key entirely
    pub fn clear(&self) -> TodoResult<()> {
        self.backend.remove(&self.key)
    }

    #[cfg(test)]
    pub fn backend(&self) -> &S {
        &self.backend
    }
}

fn parse_items(raw: &str) -> TodoResult<Vec<String>> {
    Ok(serde_json::from_str(raw)?)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn local_storage_round_trip() {
        let store = ItemStore::new(BrowserStorage::open(), "items-browser-test");
        let items = vec!["Eggs".to_string(), "Milk".to_string()];

        store.save(&items).unwrap();
        assert_eq!(store.load(), items);

        store.clear().unwrap();
        assert!(store.backend().get("items-browser-test").is_none());
    }
}
