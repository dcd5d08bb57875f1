//! Persistence-shaped mirrors of the domain models.
//!
//! The store only ever sees these types, so the on-disk shape can drift from
//! the network contract without touching the remote loader. Conversion in
//! both directions is a direct field copy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::movie::{Movie, MovieRoot};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalMovieRoot {
    pub page: i64,
    pub results: Vec<LocalMovie>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalMovie {
    pub poster_path: Option<String>,
    pub overview: Option<String>,
    pub release_date: Option<String>,
    pub genre_ids: Vec<i64>,
    pub id: i64,
    pub title: String,
    pub popularity: f64,
    pub vote_count: i64,
    pub vote_average: f64,
}

/// The single record a [`MovieStore`](crate::MovieStore) holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedMovieRoot {
    pub root: LocalMovieRoot,
    pub timestamp: DateTime<Utc>,
}

impl From<&Movie> for LocalMovie {
    fn from(movie: &Movie) -> Self {
        Self {
            poster_path: movie.poster_path.clone(),
            overview: movie.overview.clone(),
            release_date: movie.release_date.clone(),
            genre_ids: movie.genre_ids.clone(),
            id: movie.id,
            title: movie.title.clone(),
            popularity: movie.popularity,
            vote_count: movie.vote_count,
            vote_average: movie.vote_average,
        }
    }
}

impl From<LocalMovie> for Movie {
    fn from(local: LocalMovie) -> Self {
        Self {
            poster_path: local.poster_path,
            overview: local.overview,
            release_date: local.release_date,
            genre_ids: local.genre_ids,
            id: local.id,
            title: local.title,
            popularity: local.popularity,
            vote_count: local.vote_count,
            vote_average: local.vote_average,
        }
    }
}

impl From<&MovieRoot> for LocalMovieRoot {
    fn from(root: &MovieRoot) -> Self {
        Self {
            page: root.page,
            results: root.results.iter().map(LocalMovie::from).collect(),
        }
    }
}

impl From<LocalMovieRoot> for MovieRoot {
    fn from(local: LocalMovieRoot) -> Self {
        Self {
            page: local.page,
            results: local.results.into_iter().map(Movie::from).collect(),
        }
    }
}
