use std::future::Future;
use std::sync::Arc;

use bytes::Bytes;

use crate::data::MovieRoot;
use crate::error::Result;

/// Anything that can produce one page of movies.
///
/// [`RemoteMovieLoader`](crate::RemoteMovieLoader) and
/// [`LocalMovieLoader`](crate::LocalMovieLoader) both implement this, so a
/// caller can swap network-only and cached reads without code changes.
pub trait MovieLoader: Send + Sync {
    fn load(&self) -> impl Future<Output = Result<MovieRoot>> + Send;
}

impl<T: MovieLoader> MovieLoader for Arc<T> {
    fn load(&self) -> impl Future<Output = Result<MovieRoot>> + Send {
        (**self).load()
    }
}

/// Callback receiving the outcome of one image request.
pub type ImageDataCompletion = Box<dyn FnOnce(Result<Bytes>) + Send + 'static>;

/// Handle to one in-flight image request.
pub trait ImageDataLoaderTask: Send + Sync {
    /// Suppress the completion and cancel the underlying request.
    ///
    /// Idempotent. A delivery already running when `cancel` is called finishes
    /// before `cancel` returns. Once it returns, the completion is never invoked.
    fn cancel(&self);
}

/// Loads raw image bytes, one cancellable task per request.
pub trait ImageDataLoader: Send + Sync {
    type Task: ImageDataLoaderTask;

    /// Start loading `url`. Returns before the result is known.
    ///
    /// `completion` is invoked at most once, and never after the returned
    /// task has been cancelled.
    fn load_image_data<F>(&self, url: &str, completion: F) -> Self::Task
    where
        F: FnOnce(Result<Bytes>) + Send + 'static;
}
