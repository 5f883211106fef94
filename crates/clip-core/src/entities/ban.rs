//! Banned profile entity - global blocklist entry

use chrono::{DateTime, Utc};

use crate::value_objects::Platform;

/// Global blocklist entry keyed by normalized id, independent of whether a
/// `SocialProfile` row exists for it.
///
/// Invariant: a normalized id present here is never registrable, and any
/// existing profile with the same key is forced to `banned`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannedProfile {
    pub id: i64,
    pub platform: Platform,
    pub profile_url: String,
    pub normalized_id: String,
    pub reason: String,
    pub banned_by: String,
    pub banned_at: DateTime<Utc>,
}

impl BannedProfile {
    #[must_use]
    pub fn new(
        platform: Platform,
        profile_url: String,
        normalized_id: String,
        reason: String,
        banned_by: String,
    ) -> Self {
        Self {
            id: 0,
            platform,
            profile_url,
            normalized_id,
            reason,
            banned_by,
            banned_at: Utc::now(),
        }
    }
}
