use thiserror::Error;

/// Error type for this crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[source] serde_json::Error),
    #[error("parse error: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("store error: {0}")]
    Store(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl Error {
    pub(crate) fn store<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Store(Box::new(err))
    }
}

/// Type alias to use this crate's [`Error`](enum@crate::Error) type in a [`Result`](core::result::Result).
pub type Result<T> = core::result::Result<T, Error>;
