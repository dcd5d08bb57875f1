use std::future::Future;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::data::{CachedMovieRoot, LocalMovieRoot};

/// Local persistence for the single cached movie root.
///
/// Each operation resolves exactly once. Implementations decide how and
/// where the root is kept; the loaders only rely on these three calls.
pub trait MovieStore: Send + Sync {
    /// Error type for store operations. Forwarded unchanged by the loaders.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Remove the cached root, if any. Deleting an empty cache succeeds.
    fn delete_cached_movies(&self) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Store `root` tagged with `timestamp`.
    fn insert(
        &self,
        root: LocalMovieRoot,
        timestamp: DateTime<Utc>,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Fetch the cached root. `Ok(None)` means the cache is empty.
    fn retrieve(&self) -> impl Future<Output = Result<Option<CachedMovieRoot>, Self::Error>> + Send;
}

impl<T: MovieStore> MovieStore for Arc<T> {
    type Error = T::Error;

    fn delete_cached_movies(&self) -> impl Future<Output = Result<(), Self::Error>> + Send {
        (**self).delete_cached_movies()
    }

    fn insert(
        &self,
        root: LocalMovieRoot,
        timestamp: DateTime<Utc>,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send {
        (**self).insert(root, timestamp)
    }

    fn retrieve(&self) -> impl Future<Output = Result<Option<CachedMovieRoot>, Self::Error>> + Send {
        (**self).retrieve()
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    /// An insert found a root already present; callers must delete first.
    #[error("a cached root is already present")]
    Occupied,
}

/// Process-local [`MovieStore`] holding at most one root.
///
/// Inserting over an existing root is rejected, which makes the
/// delete-then-insert discipline of [`LocalMovieLoader`](crate::LocalMovieLoader)
/// observable.
#[derive(Debug, Default)]
pub struct InMemoryMovieStore {
    cache: RwLock<Option<CachedMovieRoot>>,
}

impl InMemoryMovieStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `cached`.
    pub fn with_cached(cached: CachedMovieRoot) -> Self {
        Self {
            cache: RwLock::new(Some(cached)),
        }
    }
}

impl MovieStore for InMemoryMovieStore {
    type Error = StoreError;

    async fn delete_cached_movies(&self) -> Result<(), StoreError> {
        self.cache.write().await.take();
        Ok(())
    }

    async fn insert(&self, root: LocalMovieRoot, timestamp: DateTime<Utc>) -> Result<(), StoreError> {
        let mut cache = self.cache.write().await;
        if cache.is_some() {
            return Err(StoreError::Occupied);
        }
        *cache = Some(CachedMovieRoot { root, timestamp });
        Ok(())
    }

    async fn retrieve(&self) -> Result<Option<CachedMovieRoot>, StoreError> {
        Ok(self.cache.read().await.clone())
    }
}
