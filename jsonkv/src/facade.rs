//! JSON operations over a [`KeyValueStore`].
use crate::error::{Error, Result};
use crate::store::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Outcome of [`Facade::update`] and [`Facade::merge`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update<T> {
    /// An entry existed and now holds this value.
    Found(T),
    /// No entry existed; nothing was written.
    NotFound,
}

impl<T> Update<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotFound => None,
        }
    }
}

impl<T> From<Update<T>> for Option<T> {
    fn from(update: Update<T>) -> Self {
        update.into_option()
    }
}

/// Saves, reads, updates and deletes JSON values in a string key-value store.
///
/// The facade keeps no state of its own. Every call goes straight to the store, so
/// anything else writing to the same store is visible immediately. [`update`] and
/// [`merge`] read and then write without any locking in between.
///
/// [`update`]: Facade::update
/// [`merge`]: Facade::merge
#[derive(Clone, Debug, Default)]
pub struct Facade<S> {
    store: S,
}

impl<S> Facade<S>
where
    S: KeyValueStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
    pub fn store(&self) -> &S {
        &self.store
    }
    pub fn into_inner(self) -> S {
        self.store
    }
    /// Serializes `data` to JSON and stores it under `key`, replacing any previous value.
    pub fn save<T>(&self, key: &str, data: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let encoded = serde_json::to_string(data).map_err(Error::Serialization)?;
        tracing::debug!(key, len = encoded.len(), "save");
        self.store.set(key, encoded).map_err(Error::store)
    }
    /// Reads the value stored under `key`.
    ///
    /// Returns `None` if the key is absent. A stored empty string and a stored JSON
    /// `null` are also reported as `None`.
    pub fn get<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        tracing::trace!(key, "get");
        match self.store.get(key).map_err(Error::store)? {
            Some(raw) if !raw.is_empty() => serde_json::from_str(&raw).map_err(Error::Parse),
            _ => Ok(None),
        }
    }
    /// Replaces the value under `key` with `new_data`, but only if a value is already there.
    ///
    /// The previous value is overwritten entirely, not merged; see [`Facade::merge`]
    /// for that. When there is nothing to replace, nothing is written and
    /// [`Update::NotFound`] is returned.
    pub fn update<T>(&self, key: &str, new_data: T) -> Result<Update<T>>
    where
        T: Serialize,
    {
        if self.get::<Value>(key)?.is_none() {
            tracing::warn!(key, "no existing data to update");
            return Ok(Update::NotFound);
        }
        self.save(key, &new_data)?;
        Ok(Update::Found(new_data))
    }
    /// Merges the fields of `patch` into the object stored under `key`.
    ///
    /// If both the stored value and `patch` are JSON objects, the fields of `patch` are
    /// written over the stored ones and the rest are kept. Otherwise `patch` replaces
    /// the stored value, as with [`Facade::update`].
    pub fn merge(&self, key: &str, patch: &Value) -> Result<Update<Value>> {
        let Some(existing) = self.get::<Value>(key)? else {
            tracing::warn!(key, "no existing data to merge into");
            return Ok(Update::NotFound);
        };
        let merged = match (existing, patch) {
            (Value::Object(mut fields), Value::Object(patch)) => {
                fields.extend(patch.iter().map(|(k, v)| (k.clone(), v.clone())));
                Value::Object(fields)
            }
            _ => patch.clone(),
        };
        self.save(key, &merged)?;
        Ok(Update::Found(merged))
    }
    /// Removes `key`. Removing a key that is not present is not an error.
    pub fn delete(&self, key: &str) -> Result<()> {
        tracing::debug!(key, "delete");
        self.store.del(key).map_err(Error::store)
    }
    /// Returns whether any value, including an empty string, is stored under `key`.
    pub fn key_exists(&self, key: &str) -> Result<bool> {
        Ok(self.store.get(key).map_err(Error::store)?.is_some())
    }
    /// Removes every entry from the underlying store.
    pub fn clear(&self) -> Result<()> {
        tracing::debug!("clear");
        self.store.clear().map_err(Error::store)
    }
}
