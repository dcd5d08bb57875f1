use super::clock::{Clock, SystemClock};
use super::loader::MovieLoader;
use super::store::MovieStore;
use crate::core::{cache_age, is_cache_valid};
use crate::data::{CachePolicy, LocalMovieRoot, MovieRoot};
use crate::error::{Error, Result};

/// Reads and writes the cached movie root through a [`MovieStore`].
///
/// Saving replaces the cache (delete, then insert with a fresh timestamp).
/// Loading serves the cached root only while it is younger than the
/// [`CachePolicy`] window.
#[derive(Debug)]
pub struct LocalMovieLoader<S: MovieStore, C: Clock = SystemClock> {
    store: S,
    clock: C,
    policy: CachePolicy,
}

impl<S: MovieStore> LocalMovieLoader<S> {
    /// Create a loader backed by the wall clock. No store call is made here.
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: MovieStore, C: Clock> LocalMovieLoader<S, C> {
    /// Create a loader with an injected clock. No store call is made here.
    pub fn with_clock(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            policy: CachePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: CachePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &CachePolicy {
        &self.policy
    }

    /// Replace the cached root with `root`.
    ///
    /// The old cache is deleted first; if that fails the delete error is
    /// returned and nothing is inserted. The timestamp is read from the clock
    /// only once the delete has succeeded.
    ///
    /// # Errors
    ///
    /// The store's own error from whichever operation failed, unchanged.
    pub async fn save(&self, root: &MovieRoot) -> std::result::Result<(), S::Error> {
        if let Err(e) = self.store.delete_cached_movies().await {
            tracing::warn!(error = %e, "failed to delete cached movies");
            return Err(e);
        }

        let local = LocalMovieRoot::from(root);
        let timestamp = self.clock.now();
        self.store.insert(local, timestamp).await.inspect_err(|e| {
            tracing::warn!(error = %e, "failed to insert cached movies");
        })?;

        tracing::debug!(page = root.page, count = root.results.len(), %timestamp, "cached movie root");
        Ok(())
    }

    /// Delete the cache if it cannot be read or has expired.
    ///
    /// An empty or still valid cache is left alone.
    pub async fn validate_cache(&self) -> std::result::Result<(), S::Error> {
        match self.store.retrieve().await {
            Err(e) => {
                tracing::warn!(error = %e, "unreadable movie cache, deleting");
                self.store.delete_cached_movies().await
            }
            Ok(Some(cached)) if !is_cache_valid(cached.timestamp, self.clock.now(), &self.policy) => {
                tracing::debug!(stored_at = %cached.timestamp, "expired movie cache, deleting");
                self.store.delete_cached_movies().await
            }
            Ok(_) => Ok(()),
        }
    }
}

impl<S: MovieStore, C: Clock> MovieLoader for LocalMovieLoader<S, C> {
    async fn load(&self) -> Result<MovieRoot> {
        let cached = self.store.retrieve().await.map_err(|e| {
            tracing::warn!(error = %e, "failed to retrieve cached movies");
            Error::store(e)
        })?;

        let Some(cached) = cached else {
            tracing::debug!("movie cache empty");
            return Err(Error::EmptyCache);
        };

        let now = self.clock.now();
        if !is_cache_valid(cached.timestamp, now, &self.policy) {
            tracing::debug!(
                stored_at = %cached.timestamp,
                age_secs = cache_age(cached.timestamp, now).num_seconds(),
                "movie cache expired"
            );
            return Err(Error::ExpiredCache {
                stored_at: cached.timestamp,
            });
        }

        tracing::debug!(stored_at = %cached.timestamp, "movie cache hit");
        Ok(MovieRoot::from(cached.root))
    }
}
