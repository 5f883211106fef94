//! Submission entity - one physical video entered into a campaign

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

use super::profile::UnknownStatus;
use crate::value_objects::{Platform, UsdCents};

/// Review state: `pending -> approved | rejected`, both terminal.
///
/// There is no un-approve path; `tracking` is the orthogonal gate that gets
/// forced off by bans, campaign end, or budget/cap exhaustion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
}

impl SubmissionStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmissionStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// A video submitted to a campaign.
///
/// `normalized_video_id` and `video_url` are each globally unique: at most one
/// submission per physical video system-wide, regardless of campaign or user.
/// `current_views` never decreases; `earnings` never decreases and is bounded
/// by the campaign's per-post cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: i64,
    pub discord_id: String,
    pub campaign_id: i64,
    pub social_profile_id: i64,
    pub video_url: String,
    pub normalized_video_id: String,
    pub platform: Platform,
    pub starting_views: i64,
    pub current_views: i64,
    pub earnings: UsdCents,
    pub status: SubmissionStatus,
    /// Accrual gate; only `approve` turns it on
    pub tracking: bool,
    pub submitted_at: DateTime<Utc>,
    pub approved_at: Option<DateTime<Utc>>,
    pub approved_by: Option<String>,
    /// Surface bookkeeping: the review-channel message for this submission
    pub message_id: Option<String>,
}

impl Submission {
    /// Create a new pending submission with views anchored at submit time
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn pending(
        discord_id: String,
        campaign_id: i64,
        social_profile_id: i64,
        video_url: String,
        normalized_video_id: String,
        platform: Platform,
        starting_views: i64,
    ) -> Self {
        Self {
            id: 0,
            discord_id,
            campaign_id,
            social_profile_id,
            video_url,
            normalized_video_id,
            platform,
            starting_views,
            current_views: starting_views,
            earnings: UsdCents::ZERO,
            status: SubmissionStatus::Pending,
            tracking: false,
            submitted_at: Utc::now(),
            approved_at: None,
            approved_by: None,
            message_id: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == SubmissionStatus::Pending
    }

    /// Views gained since submit time
    #[inline]
    #[must_use]
    pub fn view_growth(&self) -> i64 {
        self.current_views - self.starting_views
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Submission {
        Submission::pending(
            "1234".to_string(),
            7,
            3,
            "https://tiktok.com/@creator/video/99".to_string(),
            "tt_video:99".to_string(),
            Platform::TikTok,
            12_000,
        )
    }

    #[test]
    fn test_new_submission_anchors_views() {
        let sub = sample();
        assert_eq!(sub.starting_views, sub.current_views);
        assert_eq!(sub.view_growth(), 0);
        assert!(sub.is_pending());
        assert!(!sub.tracking);
    }

    #[test]
    fn test_status_roundtrip() {
        for status in [
            SubmissionStatus::Pending,
            SubmissionStatus::Approved,
            SubmissionStatus::Rejected,
        ] {
            assert_eq!(status.as_str().parse::<SubmissionStatus>().unwrap(), status);
        }
    }
}
