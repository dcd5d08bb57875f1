//! Error types for reel-fetch.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Type-erased source error carried by transport and store failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum Error {
    /// The transport failed before a response was obtained.
    #[error("connection error: {0}")]
    Connectivity(#[source] BoxError),

    /// A response arrived but is unusable: rejected status, empty or undecodable body.
    #[error("invalid data")]
    InvalidData,

    #[error("no cached movies")]
    EmptyCache,

    #[error("cached movies expired (stored at {stored_at})")]
    ExpiredCache { stored_at: DateTime<Utc> },

    #[error("movie store error: {0}")]
    Store(#[source] BoxError),

    /// No Tokio runtime was configured or current when a request had to be spawned.
    #[error("no async runtime available: {0}")]
    Runtime(#[source] tokio::runtime::TryCurrentError),
}

impl Error {
    pub(crate) fn connectivity<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Connectivity(Box::new(err))
    }

    pub(crate) fn store<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Store(Box::new(err))
    }

    /// Returns `true` for the two cache-miss variants.
    pub fn is_cache_miss(&self) -> bool {
        matches!(self, Error::EmptyCache | Error::ExpiredCache { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
