//! Remote movie listing and poster loaders with a time-bounded local cache.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Immutable models, cache mirrors and configuration
//! - [`core`] - Pure transformations (response validation, staleness)
//! - [`effects`] - Loaders and the collaborator traits they drive
//!
//! # Key Features
//!
//! - **Uniform Loader**: [`RemoteMovieLoader`] and [`LocalMovieLoader`] both
//!   implement [`MovieLoader`], so callers can swap network-only and cached reads
//! - **Cancellable Images**: [`RemoteImageDataLoader`] hands back a task whose
//!   `cancel()` permanently suppresses the completion
//! - **Single Cache Slot**: saving always deletes the previous root before inserting
//! - **Mechanism-Only**: No retries; one request per call

pub mod core;
pub mod data;
pub mod effects;
mod error;

pub use data::{
    CachePolicy, CachedMovieRoot, HttpResponse, LocalMovie, LocalMovieRoot, Movie, MovieRoot,
};
pub use effects::{
    CacheAsideMovieLoader, Clock, HttpClient, ImageDataCompletion, ImageDataLoader, ImageDataLoaderTask,
    InMemoryMovieStore, LocalMovieLoader, MovieLoader, MovieStore, RemoteImageDataLoader,
    RemoteImageDataTask, RemoteMovieLoader, StoreError, SystemClock,
};

#[cfg(feature = "reqwest")]
pub use effects::ReqwestClient;

pub use error::{BoxError, Error, Result};
