//! Item List Model
//!
//! Ordered labels mirrored to an [`ItemStore`]. Each mutation persists the
//! new list first and only then replaces the in-memory copy, so a refused
//! write leaves both sides unchanged.

use tracing::info;

use crate::error::{TodoError, TodoResult};
use crate::storage::{ItemStore, KeyValueStore};

pub struct ItemList<S> {
    items: Vec<String>,
    store: ItemStore<S>,
}

/// Reject labels that are empty after trimming
pub fn validate_label(label: &str) -> TodoResult<()> {
    if label.trim().is_empty() {
        Err(TodoError::EmptyLabel)
    } else {
        Ok(())
    }
}

impl<S: KeyValueStore> ItemList<S> {
    /// Load the list from storage
    pub fn hydrate(store: ItemStore<S>) -> Self {
        let items = store.load();
        info!(count = items.len(), "hydrated item list");
        Self { items, store }
    }

    /// Append `label` as given
    pub fn add(&mut self, label: &str) -> TodoResult<()> {
        validate_label(label)?;
        let mut next = self.items.clone();
        next.push(label.to_string());
        self.commit(next)?;
        info!(label, "added item");
        Ok(())
    }

    /// Remove the first `old` and append `new`.
    ///
    /// Returns the index `old` was removed from, if it was present.
    pub fn update(&mut self, old: &str, new: &str) -> TodoResult<Option<usize>> {
        validate_label(new)?;
        let mut next = self.items.clone();
        let removed = first_index(&next, old);
        if let Some(index) = removed {
            next.remove(index);
        }
        next.push(new.to_string());
        self.commit(next)?;
        info!(old, new, "updated item");
        Ok(removed)
    }

    /// Remove the first occurrence of `label`; absent labels are a no-op
    pub fn remove(&mut self, label: &str) -> TodoResult<Option<usize>> {
        let Some(index) = first_index(&self.items, label) else {
            return Ok(None);
        };
        let mut next = self.items.clone();
        next.remove(index);
        self.commit(next)?;
        info!(label, index, "removed item");
        Ok(Some(index))
    }

    /// Empty the list and drop the storage key
    pub fn clear(&mut self) -> TodoResult<()> {
        self.store.clear()?;
        self.items.clear();
        info!("cleared all items");
        Ok(())
    }

    pub fn all(&self) -> &[String] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[cfg(test)]
    pub fn store(&self) -> &ItemStore<S> {
        &self.store
    }

    fn commit(&mut self, next: Vec<String>) -> TodoResult<()> {
        self.store.save(&next)?;
        self.items = next;
        Ok(())
    }
}

fn first_index(items: &[String], label: &str) -> Option<usize> {
    items.iter().position(|item| item == label)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    /// Store whose writes always fail, as a full localStorage quota would
    pub(crate) struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Option<String> {
            Some(r#"["Eggs"]"#.to_string())
        }

        fn set(&self, _key: &str, _value: &str) -> TodoResult<()> {
            Err(TodoError::StorageWrite("QuotaExceededError".to_string()))
        }

        fn remove(&self, _key: &str) -> TodoResult<()> {
            Err(TodoError::StorageWrite("SecurityError".to_string()))
        }
    }

    fn new_list(items: &[&str]) -> (ItemList<MemoryStore>, MemoryStore) {
        let memory = MemoryStore::new();
        let store = ItemStore::new(memory.clone(), "items");
        let seed: Vec<String> = items.iter().map(|s| s.to_string()).collect();
        store.save(&seed).unwrap();
        (ItemList::hydrate(store), memory)
    }

    fn persisted(list: &ItemList<MemoryStore>) -> Vec<String> {
        list.store().load()
    }

    #[test]
    fn test_hydrate() {
        let (list, _) = new_list(&["Eggs", "Milk"]);
        assert_eq!(list.all(), ["Eggs", "Milk"]);
        assert_eq!(list.get(1), Some("Milk"));
        assert_eq!(list.get(2), None);
    }

    #[test]
    fn test_add_appends_and_persists() {
        let (mut list, _) = new_list(&[]);
        for label in ["Eggs", "Milk", " Bread "] {
            list.add(label).unwrap();
            assert_eq!(list.all().last().map(String::as_str), Some(label));
            assert_eq!(persisted(&list), list.all());
        }
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_add_rejects_blank() {
        let (mut list, _) = new_list(&["Eggs"]);
        for label in ["", "   ", "\t\n"] {
            assert!(matches!(list.add(label), Err(TodoError::EmptyLabel)));
        }
        assert_eq!(list.all(), ["Eggs"]);
        assert_eq!(persisted(&list), ["Eggs"]);
    }

    #[test]
    fn test_update_moves_to_end() {
        let (mut list, _) = new_list(&["Eggs", "Milk"]);
        let removed = list.update("Eggs", "Bread").unwrap();

        assert_eq!(removed, Some(0));
        assert_eq!(list.all(), ["Milk", "Bread"]);
        assert_eq!(persisted(&list), ["Milk", "Bread"]);
    }

    #[test]
    fn test_update_rejects_blank() {
        let (mut list, _) = new_list(&["Eggs", "Milk"]);
        assert!(list.update("Eggs", "  ").is_err());
        assert_eq!(list.all(), ["Eggs", "Milk"]);
    }

    #[test]
    fn test_remove_first_occurrence() {
        let (mut list, _) = new_list(&["Eggs", "Milk", "Eggs"]);
        let removed = list.remove("Eggs").unwrap();

        assert_eq!(removed, Some(0));
        assert_eq!(list.all(), ["Milk", "Eggs"]);
        assert_eq!(persisted(&list), ["Milk", "Eggs"]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let (mut list, _) = new_list(&["Eggs"]);
        assert_eq!(list.remove("Milk").unwrap(), None);
        assert_eq!(list.all(), ["Eggs"]);
    }

    #[test]
    fn test_clear_drops_key() {
        let (mut list, memory) = new_list(&["Eggs", "Milk"]);
        list.clear().unwrap();

        assert!(list.is_empty());
        assert!(!memory.contains("items"));
    }

    #[test]
    fn test_failed_write_keeps_memory() {
        let mut list = ItemList::hydrate(ItemStore::new(FailingStore, "items"));

        assert!(matches!(list.add("Milk"), Err(TodoError::StorageWrite(_))));
        assert!(matches!(list.update("Eggs", "Bread"), Err(TodoError::StorageWrite(_))));
        assert!(list.remove("Eggs").is_err());
        assert!(list.clear().is_err());
        assert_eq!(list.all(), ["Eggs"]);
    }
}
