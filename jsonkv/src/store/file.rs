use super::KeyValueStore;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// A [`KeyValueStore`] that keeps every entry in a single file.
///
/// The file holds one JSON object mapping keys to their string values. Nothing is
/// cached: each read loads the file, and each write rewrites it, so several
/// `FileStore`s on the same path (or separate runs of a program) observe the same
/// entries.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a new [`FileStore`] with the given path.
    ///
    /// The file is not touched until the first operation. Only `.json` files are
    /// supported; any other extension fails with [`Error::UnsupportedFormat`].
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }
    pub fn path(&self) -> &Path {
        &self.path
    }
    fn check_format(&self) -> Result<(), Error> {
        match self.path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(()),
            _ => Err(Error::UnsupportedFormat(self.path.clone())),
        }
    }
    fn load(&self) -> Result<BTreeMap<String, String>, Error> {
        self.check_format()?;
        match std::fs::read_to_string(&self.path) {
            Ok(s) if s.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(s) => Ok(serde_json::from_str(&s)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
    fn write(&self, entries: &BTreeMap<String, String>) -> Result<(), Error> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        Ok(std::fs::write(&self.path, serde_json::to_string_pretty(entries)?)?)
    }
}

impl KeyValueStore for FileStore {
    type Error = Error;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.load()?.remove(key))
    }
    fn set(&self, key: &str, value: String) -> Result<(), Self::Error> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value);
        self.write(&entries)
    }
    fn del(&self, key: &str) -> Result<(), Self::Error> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.write(&entries)?;
        }
        Ok(())
    }
    fn clear(&self) -> Result<(), Self::Error> {
        self.check_format()?;
        match std::fs::remove_file(&self.path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}
