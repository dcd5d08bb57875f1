#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use futures_util::future::BoxFuture;
use reel_fetch::{
    CachedMovieRoot, HttpClient, HttpResponse, LocalMovieRoot, Movie, MovieLoader, MovieRoot,
    MovieStore,
};
use tokio::sync::oneshot;

pub const ANY_URL: &str = "https://a-url.com/movie/popular?page=1";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("transport failure: {0}")]
pub struct TransportError(pub &'static str);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("store failure: {0}")]
pub struct StoreFailure(pub &'static str);

pub fn fixed_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-03-10T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

pub fn days(n: i64) -> TimeDelta {
    TimeDelta::days(n)
}

pub fn make_movie(id: i64, title: &str) -> Movie {
    Movie {
        poster_path: Some(format!("/poster-{id}.jpg")),
        overview: Some(format!("Overview of {title}")),
        release_date: Some("2023-07-21".to_string()),
        genre_ids: vec![18, 36],
        id,
        title: title.to_string(),
        popularity: 1024.375 + id as f64,
        vote_count: 100 * id,
        vote_average: 8.125,
    }
}

pub fn make_root() -> MovieRoot {
    MovieRoot::new(
        1,
        vec![
            make_movie(1, "Oppenheimer"),
            Movie {
                poster_path: None,
                overview: None,
                release_date: None,
                genre_ids: vec![],
                ..make_movie(2, "Untitled")
            },
        ],
    )
}

pub fn json_body(root: &MovieRoot) -> Vec<u8> {
    serde_json::to_vec(root).unwrap()
}

/// Poll `condition` until it holds, yielding to spawned tasks in between.
pub async fn wait_until(mut condition: impl FnMut() -> bool) {
    tokio::time::timeout(Duration::from_secs(1), async {
        while !condition() {
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("condition not met in time");
}

/// HTTP client answering every request with the same canned outcome.
#[derive(Debug)]
pub struct StubHttpClient {
    outcome: Result<HttpResponse, TransportError>,
    requested: Mutex<Vec<String>>,
}

impl StubHttpClient {
    pub fn responding(status: u16, body: impl Into<bytes::Bytes>) -> Self {
        Self::with_outcome(Ok(HttpResponse::new(status, body)))
    }

    pub fn failing(error: TransportError) -> Self {
        Self::with_outcome(Err(error))
    }

    fn with_outcome(outcome: Result<HttpResponse, TransportError>) -> Self {
        Self {
            outcome,
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl HttpClient for StubHttpClient {
    type Error = TransportError;

    fn get(&self, url: &str) -> BoxFuture<'static, Result<HttpResponse, TransportError>> {
        self.requested.lock().unwrap().push(url.to_owned());
        let outcome = self.outcome.clone();
        Box::pin(async move { outcome })
    }
}

struct SpyRequest {
    url: String,
    responder: Option<oneshot::Sender<Result<HttpResponse, TransportError>>>,
    dropped: Arc<AtomicBool>,
}

/// Marks its request as dropped unless disarmed by a delivered response.
struct DropGuard {
    dropped: Arc<AtomicBool>,
    armed: bool,
}

impl Drop for DropGuard {
    fn drop(&mut self) {
        if self.armed {
            self.dropped.store(true, Ordering::SeqCst);
        }
    }
}

/// HTTP client whose requests stay pending until the test completes them.
#[derive(Default)]
pub struct HttpClientSpy {
    requests: Mutex<Vec<SpyRequest>>,
}

impl HttpClientSpy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.url.clone())
            .collect()
    }

    /// URLs whose request future was dropped before a response reached it.
    pub fn cancelled_urls(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.dropped.load(Ordering::SeqCst))
            .map(|r| r.url.clone())
            .collect()
    }

    /// Resolve request `index`. Returns `false` if nobody was listening any more.
    pub fn complete(&self, index: usize, outcome: Result<HttpResponse, TransportError>) -> bool {
        let responder = self.requests.lock().unwrap()[index].responder.take();
        match responder {
            Some(tx) => tx.send(outcome).is_ok(),
            None => false,
        }
    }

    pub fn complete_with_status(&self, index: usize, status: u16, body: &'static [u8]) -> bool {
        self.complete(index, Ok(HttpResponse::new(status, bytes::Bytes::from_static(body))))
    }

    pub fn complete_with_error(&self, index: usize, error: TransportError) -> bool {
        self.complete(index, Err(error))
    }
}

impl HttpClient for HttpClientSpy {
    type Error = TransportError;

    fn get(&self, url: &str) -> BoxFuture<'static, Result<HttpResponse, TransportError>> {
        let (tx, rx) = oneshot::channel();
        let dropped = Arc::new(AtomicBool::new(false));
        self.requests.lock().unwrap().push(SpyRequest {
            url: url.to_owned(),
            responder: Some(tx),
            dropped: dropped.clone(),
        });

        let guard = DropGuard { dropped, armed: true };
        Box::pin(async move {
            // Rebind so the whole guard moves into the future, not just `guard.armed`.
            let mut guard = guard;
            let outcome = rx
                .await
                .unwrap_or(Err(TransportError("request abandoned by spy")));
            guard.armed = false;
            outcome
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreMessage {
    DeleteCachedMovies,
    Insert(LocalMovieRoot, DateTime<Utc>),
    Retrieve,
}

type Hook = Box<dyn Fn() + Send + Sync>;

/// Store recording every call and answering with stubbed results.
pub struct MovieStoreSpy {
    messages: Mutex<Vec<StoreMessage>>,
    deletion: Mutex<Result<(), StoreFailure>>,
    insertion: Mutex<Result<(), StoreFailure>>,
    retrieval: Mutex<Result<Option<CachedMovieRoot>, StoreFailure>>,
    on_delete: Option<Hook>,
}

impl Default for MovieStoreSpy {
    fn default() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            deletion: Mutex::new(Ok(())),
            insertion: Mutex::new(Ok(())),
            retrieval: Mutex::new(Ok(None)),
            on_delete: None,
        }
    }
}

impl MovieStoreSpy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_deletion(self, error: StoreFailure) -> Self {
        *self.deletion.lock().unwrap() = Err(error);
        self
    }

    pub fn failing_insertion(self, error: StoreFailure) -> Self {
        *self.insertion.lock().unwrap() = Err(error);
        self
    }

    pub fn failing_retrieval(self, error: StoreFailure) -> Self {
        *self.retrieval.lock().unwrap() = Err(error);
        self
    }

    pub fn retrieving(self, root: LocalMovieRoot, timestamp: DateTime<Utc>) -> Self {
        *self.retrieval.lock().unwrap() = Ok(Some(CachedMovieRoot { root, timestamp }));
        self
    }

    /// Run `hook` while a deletion is being handled.
    pub fn on_delete(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_delete = Some(Box::new(hook));
        self
    }

    pub fn messages(&self) -> Vec<StoreMessage> {
        self.messages.lock().unwrap().clone()
    }

    fn record(&self, message: StoreMessage) {
        self.messages.lock().unwrap().push(message);
    }
}

impl MovieStore for MovieStoreSpy {
    type Error = StoreFailure;

    async fn delete_cached_movies(&self) -> Result<(), StoreFailure> {
        self.record(StoreMessage::DeleteCachedMovies);
        if let Some(hook) = &self.on_delete {
            hook();
        }
        self.deletion.lock().unwrap().clone()
    }

    async fn insert(&self, root: LocalMovieRoot, timestamp: DateTime<Utc>) -> Result<(), StoreFailure> {
        self.record(StoreMessage::Insert(root, timestamp));
        self.insertion.lock().unwrap().clone()
    }

    async fn retrieve(&self) -> Result<Option<CachedMovieRoot>, StoreFailure> {
        self.record(StoreMessage::Retrieve);
        self.retrieval.lock().unwrap().clone()
    }
}

/// Remote loader stub that counts its calls.
pub struct MovieLoaderStub {
    results: Mutex<VecDeque<reel_fetch::Result<MovieRoot>>>,
    calls: Mutex<usize>,
}

impl MovieLoaderStub {
    pub fn new(results: impl IntoIterator<Item = reel_fetch::Result<MovieRoot>>) -> Self {
        Self {
            results: Mutex::new(results.into_iter().collect()),
            calls: Mutex::new(0),
        }
    }

    pub fn never_called() -> Self {
        Self {
            results: Mutex::new(VecDeque::new()),
            calls: Mutex::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl MovieLoader for MovieLoaderStub {
    async fn load(&self) -> reel_fetch::Result<MovieRoot> {
        *self.calls.lock().unwrap() += 1;
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected remote load")
    }
}
