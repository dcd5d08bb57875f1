//! Pure transformations for movie loading.
//!
//! Nothing in here touches the network or the store: status classification,
//! payload decoding and cache staleness are plain functions so the loaders in
//! [`crate::effects`] stay thin.

mod staleness;
mod validation;

pub use staleness::{cache_age, is_cache_valid};
pub use validation::{decode_movie_root, is_accepted_image_status, is_accepted_movie_status, validate_image_data};
