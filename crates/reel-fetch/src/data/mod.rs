//! Immutable data types for movie loading.
//!
//! This module holds the wire/domain models, their persistence-shaped
//! mirrors, the buffered HTTP response and the cache configuration. None of these types perform I/O.

pub mod local;
pub mod movie;
pub mod options;
pub mod response;

pub use local::{CachedMovieRoot, LocalMovie, LocalMovieRoot};
pub use movie::{Movie, MovieRoot};
pub use options::CachePolicy;
pub use response::HttpResponse;
