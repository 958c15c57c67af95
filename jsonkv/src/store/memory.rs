use super::KeyValueStore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("memory store lock poisoned")]
pub struct Error;

/// An in-process [`KeyValueStore`].
///
/// Clones share the same underlying map, so several facades built from clones of
/// one `MemoryStore` see each other's writes.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    store: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
    /// Number of entries currently held.
    pub fn len(&self) -> Result<usize, Error> {
        Ok(self.lock()?.len())
    }
    pub fn is_empty(&self) -> Result<bool, Error> {
        Ok(self.lock()?.is_empty())
    }
    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, Error> {
        self.store.lock().map_err(|_| Error)
    }
}

impl KeyValueStore for MemoryStore {
    type Error = Error;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.lock()?.get(key).cloned())
    }
    fn set(&self, key: &str, value: String) -> Result<(), Self::Error> {
        self.lock()?.insert(key.to_string(), value);
        Ok(())
    }
    fn del(&self, key: &str) -> Result<(), Self::Error> {
        self.lock()?.remove(key);
        Ok(())
    }
    fn clear(&self) -> Result<(), Self::Error> {
        self.lock()?.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::wasm_bindgen_test;

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn test_set_get_del() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").expect("get should succeed"), None);
        store.set("k", String::from("v1")).expect("set should succeed");
        assert_eq!(store.get("k").expect("get should succeed"), Some(String::from("v1")));
        store.set("k", String::from("v2")).expect("set should succeed");
        assert_eq!(store.get("k").expect("get should succeed"), Some(String::from("v2")));
        store.del("k").expect("del should succeed");
        assert_eq!(store.get("k").expect("get should succeed"), None);
        // deleting again is a no-op
        store.del("k").expect("del should succeed");
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn test_clones_share_entries() {
        let a = MemoryStore::new();
        let b = a.clone();
        a.set("shared", String::from("1")).expect("set should succeed");
        assert_eq!(b.get("shared").expect("get should succeed"), Some(String::from("1")));
        b.clear().expect("clear should succeed");
        assert!(a.is_empty().expect("len should succeed"));
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn test_store_through_references() {
        let store = Arc::new(MemoryStore::new());
        let by_ref = &store;
        by_ref.set("k", String::new()).expect("set should succeed");
        assert_eq!(store.get("k").expect("get should succeed"), Some(String::new()));
        assert_eq!(store.len().expect("len should succeed"), 1);
    }
}
