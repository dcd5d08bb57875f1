use std::sync::Arc;

use futures_util::future::BoxFuture;

use crate::data::HttpResponse;

/// Asynchronous HTTP client abstraction.
///
/// This trait provides the single operation the loaders need. Implementations
/// handle their own redirect following, timeout configuration and TLS.
///
/// # Implementations
///
/// - [`ReqwestClient`]: Production implementation using `reqwest`
/// - Spies in the integration tests
pub trait HttpClient: Send + Sync {
    /// Error type for transport failures.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Issue a GET request and buffer the full response.
    ///
    /// The request is registered when `get` is called, so requests issued in
    /// sequence reach the client in call order. The returned future owns
    /// everything it needs; dropping it cancels the request.
    ///
    /// # Errors
    ///
    /// Returns an error only when no response was obtained (DNS failure,
    /// connection reset, ...). Non-success statuses are returned as responses.
    fn get(&self, url: &str) -> BoxFuture<'static, Result<HttpResponse, Self::Error>>;
}

impl<T: HttpClient + ?Sized> HttpClient for Arc<T> {
    type Error = T::Error;

    fn get(&self, url: &str) -> BoxFuture<'static, Result<HttpResponse, Self::Error>> {
        (**self).get(url)
    }
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use super::*;

    /// Production HTTP client implementation using reqwest.
    #[derive(Debug, Clone, Default)]
    pub struct ReqwestClient {
        client: reqwest::Client,
    }

    impl ReqwestClient {
        /// Create a new ReqwestClient with default configuration.
        pub fn new() -> Self {
            Self::default()
        }

        /// Wrap an already configured reqwest client.
        pub fn with_client(client: reqwest::Client) -> Self {
            Self { client }
        }
    }

    impl HttpClient for ReqwestClient {
        type Error = reqwest::Error;

        fn get(&self, url: &str) -> BoxFuture<'static, Result<HttpResponse, Self::Error>> {
            let request = self.client.get(url);
            Box::pin(async move {
                let response = request.send().await?;
                let status = response.status().as_u16();
                let body = response.bytes().await?;
                Ok(HttpResponse { status, body })
            })
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestClient;
