use super::clock::{Clock, SystemClock};
use super::loader::MovieLoader;
use super::local_movie::LocalMovieLoader;
use super::store::MovieStore;
use crate::data::MovieRoot;
use crate::error::Result;

/// Cache-first [`MovieLoader`].
///
/// Serves the local cache when it holds a valid root. Otherwise loads from
/// `remote` and writes the result back through the local loader. A failed
/// write-back is logged and the remote root is still returned.
#[derive(Debug)]
pub struct CacheAsideMovieLoader<R, S, C = SystemClock>
where
    R: MovieLoader,
    S: MovieStore,
    C: Clock,
{
    remote: R,
    local: LocalMovieLoader<S, C>,
}

impl<R, S, C> CacheAsideMovieLoader<R, S, C>
where
    R: MovieLoader,
    S: MovieStore,
    C: Clock,
{
    pub fn new(remote: R, local: LocalMovieLoader<S, C>) -> Self {
        Self { remote, local }
    }

    pub fn local(&self) -> &LocalMovieLoader<S, C> {
        &self.local
    }
}

impl<R, S, C> MovieLoader for CacheAsideMovieLoader<R, S, C>
where
    R: MovieLoader,
    S: MovieStore,
    C: Clock,
{
    async fn load(&self) -> Result<MovieRoot> {
        match self.local.load().await {
            Ok(root) => return Ok(root),
            Err(e) if e.is_cache_miss() => tracing::debug!(reason = %e, "falling back to remote"),
            Err(e) => tracing::warn!(error = %e, "cache read failed, falling back to remote"),
        }

        let root = self.remote.load().await?;

        if let Err(e) = self.local.save(&root).await {
            tracing::warn!(error = %e, "failed to repopulate movie cache");
        }

        Ok(root)
    }
}
