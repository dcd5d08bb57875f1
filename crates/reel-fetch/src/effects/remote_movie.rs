use std::future::Future;

use super::http::HttpClient;
use super::loader::MovieLoader;
use crate::core::decode_movie_root;
use crate::data::MovieRoot;
use crate::error::{Error, Result};

/// Network-only [`MovieLoader`].
///
/// Every [`load`](MovieLoader::load) issues exactly one GET to the configured
/// URL. Nothing is retried or remembered between calls.
#[derive(Debug, Clone)]
pub struct RemoteMovieLoader<C: HttpClient> {
    url: String,
    client: C,
}

impl<C: HttpClient> RemoteMovieLoader<C> {
    /// Create a loader. No request is made until [`load`](MovieLoader::load).
    pub fn new(url: impl Into<String>, client: C) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl<C: HttpClient> MovieLoader for RemoteMovieLoader<C> {
    /// The GET is issued when `load` is called, not when the future is first
    /// polled, so requests reach the client in call order.
    fn load(&self) -> impl Future<Output = Result<MovieRoot>> + Send {
        tracing::debug!(url = %self.url, "requesting movie listing");

        let request = self.client.get(&self.url);
        let url = self.url.clone();
        async move {
            let response = request.await.map_err(|e| {
                tracing::warn!(url = %url, error = %e, "movie listing request failed");
                Error::connectivity(e)
            })?;

            decode_movie_root(&response)
        }
    }
}
