//! JSON values on top of string key-value stores.
//!
//! [`Facade`] saves, reads, updates and deletes serializable values in any
//! [`KeyValueStore`]: an in-memory map, a JSON file, or, when compiled to
//! `wasm32`, the browser's `localStorage`.
//!
//! ```
//! use jsonkv::store::memory::MemoryStore;
//! use jsonkv::{Facade, Update};
//! use serde_json::{json, Value};
//!
//! # fn main() -> jsonkv::Result<()> {
//! let facade = Facade::new(MemoryStore::new());
//! facade.save("profile", &json!({"name": "Ana"}))?;
//! assert_eq!(facade.get::<Value>("profile")?, Some(json!({"name": "Ana"})));
//!
//! let updated = facade.update("profile", json!({"name": "Bo"}))?;
//! assert_eq!(updated, Update::Found(json!({"name": "Bo"})));
//! assert_eq!(facade.update("missing", json!({"x": 1}))?, Update::NotFound);
//!
//! facade.delete("profile")?;
//! assert!(!facade.key_exists("profile")?);
//! # Ok(())
//! # }
//! ```
mod error;
pub mod facade;
pub mod store;

pub use error::{Error, Result};
pub use facade::{Facade, Update};
pub use store::KeyValueStore;
