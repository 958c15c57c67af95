//! String key-value stores that a [`Facade`](crate::Facade) can wrap.
#[cfg(not(target_arch = "wasm32"))]
pub mod file;
pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

use std::error::Error;
use std::sync::Arc;

/// A string-keyed store of string values.
///
/// This is the shape of the browser's `localStorage`: values are opaque strings,
/// and encoding is left to the caller. Methods take `&self`, so implementations
/// that mutate must use interior mutability.
pub trait KeyValueStore {
    type Error: Error + Send + Sync + 'static;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;
    fn set(&self, key: &str, value: String) -> Result<(), Self::Error>;
    fn del(&self, key: &str) -> Result<(), Self::Error>;
    fn clear(&self) -> Result<(), Self::Error>;
}

impl<S> KeyValueStore for &S
where
    S: KeyValueStore + ?Sized,
{
    type Error = S::Error;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        (**self).get(key)
    }
    fn set(&self, key: &str, value: String) -> Result<(), Self::Error> {
        (**self).set(key, value)
    }
    fn del(&self, key: &str) -> Result<(), Self::Error> {
        (**self).del(key)
    }
    fn clear(&self) -> Result<(), Self::Error> {
        (**self).clear()
    }
}

impl<S> KeyValueStore for Arc<S>
where
    S: KeyValueStore + ?Sized,
{
    type Error = S::Error;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        self.as_ref().get(key)
    }
    fn set(&self, key: &str, value: String) -> Result<(), Self::Error> {
        self.as_ref().set(key, value)
    }
    fn del(&self, key: &str) -> Result<(), Self::Error> {
        self.as_ref().del(key)
    }
    fn clear(&self) -> Result<(), Self::Error> {
        self.as_ref().clear()
    }
}
