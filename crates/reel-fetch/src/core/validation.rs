use bytes::Bytes;

use crate::data::{HttpResponse, MovieRoot};
use crate::error::{Error, Result};

/// Returns `true` if a movie listing response with this status may be decoded.
///
/// Any 2xx status is accepted.
///
/// # Examples
///
/// ```
/// use reel_fetch::core::is_accepted_movie_status;
///
/// assert!(is_accepted_movie_status(200));
/// assert!(is_accepted_movie_status(299));
/// assert!(!is_accepted_movie_status(404));
/// ```
pub fn is_accepted_movie_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Returns `true` if an image response with this status may carry image bytes.
///
/// Image requests are stricter than listings: only exactly 200 is accepted.
pub fn is_accepted_image_status(status: u16) -> bool {
    status == 200
}

/// Decode a listing response into a [`MovieRoot`].
///
/// A rejected status or a body that does not match the expected document
/// shape yields [`Error::InvalidData`].
pub fn decode_movie_root(response: &HttpResponse) -> Result<MovieRoot> {
    if !is_accepted_movie_status(response.status) {
        tracing::warn!(status = response.status, "rejected movie listing status");
        return Err(Error::InvalidData);
    }

    let mut deserializer = serde_json::Deserializer::from_slice(&response.body);
    let root = serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        tracing::warn!(path = %e.path(), error = %e.inner(), "undecodable movie listing");
        Error::InvalidData
    })?;
    deserializer.end().map_err(|e| {
        tracing::warn!(error = %e, "trailing data after movie listing");
        Error::InvalidData
    })?;

    Ok(root)
}

/// Extract image bytes from a response.
///
/// Status other than 200, or 200 with an empty body, yields [`Error::InvalidData`].
pub fn validate_image_data(response: HttpResponse) -> Result<Bytes> {
    if !is_accepted_image_status(response.status) {
        tracing::warn!(status = response.status, "rejected image status");
        return Err(Error::InvalidData);
    }
    if response.body.is_empty() {
        tracing::warn!("empty image body");
        return Err(Error::InvalidData);
    }
    Ok(response.body)
}
