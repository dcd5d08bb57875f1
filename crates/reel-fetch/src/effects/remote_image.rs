use std::sync::{Arc, Mutex, PoisonError};

use bytes::Bytes;
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

use super::http::HttpClient;
use super::loader::{ImageDataCompletion, ImageDataLoader, ImageDataLoaderTask};
use crate::core::validate_image_data;
use crate::error::{Error, Result};

/// Loads poster bytes over HTTP.
///
/// Each call spawns its request and returns a [`RemoteImageDataTask`]
/// immediately. Requests run on the runtime given to
/// [`with_runtime`](Self::with_runtime), or else on the ambient Tokio runtime.
/// With neither available the completion receives [`Error::Runtime`] before
/// `load_image_data` returns and no request is made.
#[derive(Debug, Clone)]
pub struct RemoteImageDataLoader<C: HttpClient> {
    client: C,
    runtime: Option<Handle>,
}

impl<C: HttpClient> RemoteImageDataLoader<C> {
    /// Create a loader. No request is made until [`load_image_data`](ImageDataLoader::load_image_data).
    pub fn new(client: C) -> Self {
        Self {
            client,
            runtime: None,
        }
    }

    /// Spawn requests on `runtime` instead of the caller's ambient runtime.
    pub fn with_runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    fn runtime(&self) -> Result<Handle> {
        match &self.runtime {
            Some(handle) => Ok(handle.clone()),
            None => Handle::try_current().map_err(Error::Runtime),
        }
    }
}

/// Completion slot shared between a task handle and its spawned request.
///
/// Delivery invokes the completion while holding the lock, cancel drops it
/// under the same lock. The slot never refills.
#[derive(Clone)]
struct CompletionSlot(Arc<Mutex<Option<ImageDataCompletion>>>);

impl CompletionSlot {
    fn new(completion: ImageDataCompletion) -> Self {
        Self(Arc::new(Mutex::new(Some(completion))))
    }

    fn discard(&self) {
        let completion = self.0.lock().unwrap_or_else(PoisonError::into_inner).take();
        drop(completion);
    }

    fn deliver(&self, result: Result<Bytes>) {
        let mut slot = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(completion) = slot.take() {
            completion(result);
        }
    }
}

/// Handle returned by [`RemoteImageDataLoader::load_image_data`].
///
/// Dropping the handle does not cancel the request; call
/// [`cancel`](ImageDataLoaderTask::cancel) for that.
pub struct RemoteImageDataTask {
    completion: CompletionSlot,
    token: CancellationToken,
}

impl RemoteImageDataTask {
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl std::fmt::Debug for RemoteImageDataTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteImageDataTask")
            .field("cancelled", &self.token.is_cancelled())
            .finish()
    }
}

impl ImageDataLoaderTask for RemoteImageDataTask {
    /// A delivery already running when this is called finishes first; `cancel`
    /// waits for it. The completion must not cancel its own task.
    fn cancel(&self) {
        self.token.cancel();
        self.completion.discard();
    }
}

impl<C: HttpClient> ImageDataLoader for RemoteImageDataLoader<C> {
    type Task = RemoteImageDataTask;

    fn load_image_data<F>(&self, url: &str, completion: F) -> Self::Task
    where
        F: FnOnce(Result<Bytes>) + Send + 'static,
    {
        let slot = CompletionSlot::new(Box::new(completion));
        let token = CancellationToken::new();
        let task = RemoteImageDataTask {
            completion: slot.clone(),
            token: token.clone(),
        };

        let runtime = match self.runtime() {
            Ok(runtime) => runtime,
            Err(e) => {
                tracing::warn!(url, error = %e, "no runtime for image request");
                slot.deliver(Err(e));
                return task;
            }
        };

        tracing::debug!(url, "requesting image data");
        let request = self.client.get(url);
        let url = url.to_owned();
        runtime.spawn(async move {
            let outcome = tokio::select! {
                biased;
                _ = token.cancelled() => {
                    tracing::debug!(url = %url, "image request cancelled");
                    return;
                }
                outcome = request => outcome,
            };

            let result = outcome
                .map_err(|e| {
                    tracing::warn!(url = %url, error = %e, "image request failed");
                    Error::connectivity(e)
                })
                .and_then(validate_image_data);

            slot.deliver(result);
        });

        task
    }
}
