use serde::{Deserialize, Serialize};

/// One page of movie results as served by the remote listing endpoint.
///
/// Field names match the wire format directly (`page`, `results`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRoot {
    pub page: i64,
    pub results: Vec<Movie>,
}

/// A single movie entry.
///
/// Missing optional keys decode as `None`; `genre_ids` is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
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

impl MovieRoot {
    pub fn new(page: i64, results: Vec<Movie>) -> Self {
        Self { page, results }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
