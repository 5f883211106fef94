//! Social profile entity and its approval state machine

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

use crate::value_objects::Platform;

/// Approval state of a registered profile.
///
/// `pending -> approved | rejected`; `banned` is reachable from any state.
/// Profiles are never hard-deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileStatus {
    Pending,
    Approved,
    Rejected,
    Banned,
}

impl ProfileStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Banned => "banned",
        }
    }
}

impl fmt::Display for ProfileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "banned" => Ok(Self::Banned),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Error when parsing a persisted status string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status: {0}")]
pub struct UnknownStatus(pub String);

/// A creator's registered social media profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialProfile {
    pub id: i64,
    pub discord_id: String,
    pub platform: Platform,
    pub profile_url: String,
    /// Canonical key, unique across all users system-wide
    pub normalized_id: String,
    pub status: ProfileStatus,
    pub followers: i64,
    pub tier: Option<String>,
    pub verified_at: Option<DateTime<Utc>>,
    pub verified_by: Option<String>,
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl SocialProfile {
    /// Create a new pending registration
    #[must_use]
    pub fn pending(
        discord_id: String,
        platform: Platform,
        profile_url: String,
        normalized_id: String,
    ) -> Self {
        Self {
            id: 0,
            discord_id,
            platform,
            profile_url,
            normalized_id,
            status: ProfileStatus::Pending,
            followers: 0,
            tier: None,
            verified_at: None,
            verified_by: None,
            rejection_reason: None,
            created_at: Utc::now(),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_approved(&self) -> bool {
        self.status == ProfileStatus::Approved
    }

    #[inline]
    #[must_use]
    pub fn is_banned(&self) -> bool {
        self.status == ProfileStatus::Banned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrip() {
        for status in [
            ProfileStatus::Pending,
            ProfileStatus::Approved,
            ProfileStatus::Rejected,
            ProfileStatus::Banned,
        ] {
            assert_eq!(status.as_str().parse::<ProfileStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_new_registration_is_pending() {
        let profile = SocialProfile::pending(
            "1234".to_string(),
            Platform::TikTok,
            "https://tiktok.com/@creator".to_string(),
            "tt:creator".to_string(),
        );
        assert_eq!(profile.status, ProfileStatus::Pending);
        assert!(!profile.is_approved());
        assert!(profile.verified_at.is_none());
    }
}
