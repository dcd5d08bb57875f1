use chrono::{DateTime, TimeDelta, Utc};

use crate::data::CachePolicy;

/// Age of a cached record at `now`. Negative if the record is from the future.
pub fn cache_age(stored_at: DateTime<Utc>, now: DateTime<Utc>) -> TimeDelta {
    now.signed_duration_since(stored_at)
}

/// Returns `true` while `now` is strictly before `stored_at + max_age`.
pub fn is_cache_valid(stored_at: DateTime<Utc>, now: DateTime<Utc>, policy: &CachePolicy) -> bool {
    match stored_at.checked_add_signed(policy.max_age_delta()) {
        Some(expires_at) => now < expires_at,
        // Expiry lies beyond the representable range.
        None => true,
    }
}
