use std::fmt;
use std::time::Duration;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

/// Default staleness window: seven days.
pub const DEFAULT_MAX_CACHE_AGE: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Configuration for cached reads.
///
/// # Examples
///
/// ```
/// use reel_fetch::CachePolicy;
/// use std::time::Duration;
///
/// let policy = CachePolicy::default().max_age(Duration::from_secs(3600));
/// assert_eq!(policy.max_age_secs, 3600);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachePolicy {
    /// Maximum age of a cached root still served by a local load.
    ///
    /// A root stored exactly `max_age_secs` ago is already expired.
    ///
    /// Default: 604800 (7 days)
    #[serde(default = "default_max_age_secs")]
    pub max_age_secs: u64,
}

fn default_max_age_secs() -> u64 {
    DEFAULT_MAX_CACHE_AGE.as_secs()
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            max_age_secs: default_max_age_secs(),
        }
    }
}

impl fmt::Debug for CachePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CachePolicy")
            .field("max_age", &self.max_age_window())
            .finish()
    }
}

impl CachePolicy {
    /// Set the staleness window.
    pub fn max_age(mut self, max_age: Duration) -> Self {
        self.max_age_secs = max_age.as_secs();
        self
    }

    /// The staleness window as a `std` duration.
    pub fn max_age_window(&self) -> Duration {
        Duration::from_secs(self.max_age_secs)
    }

    /// The staleness window as a chrono delta, saturating at the largest representable span.
    pub fn max_age_delta(&self) -> TimeDelta {
        i64::try_from(self.max_age_secs)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .unwrap_or(TimeDelta::MAX)
    }
}
