//! Loaders and the collaborator traits they drive.
//!
//! Every network or store interaction in the crate happens here. The loaders
//! themselves never block: each call maps to one outstanding collaborator
//! operation and the result is handed back through the returned future (or,
//! for image data, the completion callback).

mod cache_aside;
mod clock;
mod http;
mod loader;
mod local_movie;
mod remote_image;
mod remote_movie;
mod store;

pub use cache_aside::CacheAsideMovieLoader;
pub use clock::{Clock, SystemClock};
pub use http::HttpClient;
pub use loader::{ImageDataCompletion, ImageDataLoader, ImageDataLoaderTask, MovieLoader};
pub use local_movie::LocalMovieLoader;
pub use remote_image::{RemoteImageDataLoader, RemoteImageDataTask};
pub use remote_movie::RemoteMovieLoader;
pub use store::{InMemoryMovieStore, MovieStore, StoreError};

#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
