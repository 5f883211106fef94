//! Shared column parsing helpers
//!
//! All writes go through the entity enums' `as_str`, so unknown values can
//! only appear through out-of-band edits; parsing falls back to the safest
//! state for each enum.

use clip_core::entities::{CampaignStatus, PayoutStatus, ProfileStatus, SubmissionStatus};
use clip_core::value_objects::Platform;

pub(crate) fn parse_platform(s: &str) -> Platform {
    s.parse().unwrap_or(Platform::Instagram)
}

pub(crate) fn parse_profile_status(s: &str) -> ProfileStatus {
    s.parse().unwrap_or(ProfileStatus::Pending)
}

pub(crate) fn parse_campaign_status(s: &str) -> CampaignStatus {
    // Unknown -> Ended: an unrecognized campaign never accrues
    s.parse().unwrap_or(CampaignStatus::Ended)
}

pub(crate) fn parse_submission_status(s: &str) -> SubmissionStatus {
    s.parse().unwrap_or(SubmissionStatus::Pending)
}

pub(crate) fn parse_payout_status(s: &str) -> PayoutStatus {
    s.parse().unwrap_or(PayoutStatus::Pending)
}
