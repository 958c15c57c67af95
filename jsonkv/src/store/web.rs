use super::KeyValueStore;
use std::fmt::Debug;
use thiserror::Error;
use web_sys::Storage;

#[derive(Error, Debug)]
pub enum Error {
    #[error("localStorage is not available")]
    Unavailable,
    #[error("localStorage error: {0}")]
    Js(String),
}

// JS exceptions are not `Send`, so only their rendering is kept.
fn js_error(err: impl Debug) -> Error {
    Error::Js(format!("{err:?}"))
}

/// The browser's `window.localStorage` as a [`KeyValueStore`].
///
/// Entries are scoped to the page's origin and outlive the page. Other tabs of the
/// same origin may write to the same storage at any time.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    pub fn new() -> Result<Self, Error> {
        let storage = web_sys::window()
            .ok_or(Error::Unavailable)?
            .local_storage()
            .map_err(js_error)?
            .ok_or(Error::Unavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    type Error = Error;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        self.storage.get_item(key).map_err(js_error)
    }
    fn set(&self, key: &str, value: String) -> Result<(), Self::Error> {
        self.storage.set_item(key, &value).map_err(js_error)
    }
    fn del(&self, key: &str) -> Result<(), Self::Error> {
        self.storage.remove_item(key).map_err(js_error)
    }
    fn clear(&self) -> Result<(), Self::Error> {
        self.storage.clear().map_err(js_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_storage() {
        let store = LocalStorage::new().expect("localStorage should be available");
        store.del("jsonkv-test").expect("del should succeed");
        assert_eq!(store.get("jsonkv-test").expect("get should succeed"), None);
        store.set("jsonkv-test", String::from("{\"a\":1}")).expect("set should succeed");
        assert_eq!(
            store.get("jsonkv-test").expect("get should succeed"),
            Some(String::from("{\"a\":1}"))
        );
        store.del("jsonkv-test").expect("del should succeed");
        assert_eq!(store.get("jsonkv-test").expect("get should succeed"), None);
    }
}
