//! Domain errors - typed failures for every core operation
//!
//! The surface maps these to user-facing messages in one place; the core
//! never formats chat output.

use thiserror::Error;

use crate::value_objects::Platform;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found
    // =========================================================================
    #[error("User not registered: {0}")]
    UserNotFound(String),

    #[error("Profile not found: {0}")]
    ProfileNotFound(i64),

    #[error("Campaign not found: {0}")]
    CampaignNotFound(String),

    #[error("Submission not found: {0}")]
    SubmissionNotFound(i64),

    #[error("Ban not found: {0}")]
    BanNotFound(i64),

    // =========================================================================
    // Validation
    // =========================================================================
    #[error("Invalid {0} profile URL")]
    InvalidProfileUrl(Platform),

    #[error("Invalid {0} video URL")]
    InvalidVideoUrl(Platform),

    #[error("URL does not match the expected {0} shape")]
    UnrecognizedUrl(Platform),

    #[error("Invalid USDT (ERC-20) wallet address")]
    InvalidWallet,

    // =========================================================================
    // Conflict
    // =========================================================================
    #[error("Campaign '{0}' already exists")]
    CampaignNameTaken(String),

    #[error("This profile is already registered")]
    ProfileAlreadyRegistered,

    #[error("This video has already been submitted")]
    VideoAlreadySubmitted,

    #[error("Profile is banned: {reason}")]
    ProfileBanned { reason: String },

    // =========================================================================
    // Precondition
    // =========================================================================
    #[error("Profile is not approved")]
    ProfileNotApproved,

    #[error("Profile is not pending review")]
    ProfileNotPending(i64),

    #[error("Campaign '{0}' is not live")]
    CampaignNotLive(String),

    #[error("Submission is not pending review")]
    SubmissionNotPending(i64),

    #[error("At least {required} followers required, profile has {actual}")]
    InsufficientFollowers { required: i64, actual: i64 },

    #[error("Payout exceeds the creator's pending earnings")]
    InsufficientPendingEarnings,

    // =========================================================================
    // Infrastructure (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Stable error code for the surface's error-to-message mapping
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ProfileNotFound(_) => "UNKNOWN_PROFILE",
            Self::CampaignNotFound(_) => "UNKNOWN_CAMPAIGN",
            Self::SubmissionNotFound(_) => "UNKNOWN_SUBMISSION",
            Self::BanNotFound(_) => "UNKNOWN_BAN",

            Self::InvalidProfileUrl(_) => "INVALID_PROFILE_URL",
            Self::InvalidVideoUrl(_) => "INVALID_VIDEO_URL",
            Self::UnrecognizedUrl(_) => "UNRECOGNIZED_URL",
            Self::InvalidWallet => "INVALID_WALLET",

            Self::CampaignNameTaken(_) => "CAMPAIGN_NAME_TAKEN",
            Self::ProfileAlreadyRegistered => "PROFILE_ALREADY_REGISTERED",
            Self::VideoAlreadySubmitted => "VIDEO_ALREADY_SUBMITTED",
            Self::ProfileBanned { .. } => "PROFILE_BANNED",

            Self::ProfileNotApproved => "PROFILE_NOT_APPROVED",
            Self::ProfileNotPending(_) => "PROFILE_NOT_PENDING",
            Self::CampaignNotLive(_) => "CAMPAIGN_NOT_LIVE",
            Self::SubmissionNotPending(_) => "SUBMISSION_NOT_PENDING",
            Self::InsufficientFollowers { .. } => "INSUFFICIENT_FOLLOWERS",
            Self::InsufficientPendingEarnings => "INSUFFICIENT_PENDING_EARNINGS",

            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::ProfileNotFound(_)
                | Self::CampaignNotFound(_)
                | Self::SubmissionNotFound(_)
                | Self::BanNotFound(_)
        )
    }

    /// Check if this is a validation error (rejected before touching the store)
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidProfileUrl(_)
                | Self::InvalidVideoUrl(_)
                | Self::UnrecognizedUrl(_)
                | Self::InvalidWallet
        )
    }

    /// Check if this is a conflict error
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::CampaignNameTaken(_)
                | Self::ProfileAlreadyRegistered
                | Self::VideoAlreadySubmitted
                | Self::ProfileBanned { .. }
        )
    }

    /// Check if this is a precondition error
    #[must_use]
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::ProfileNotApproved
                | Self::ProfileNotPending(_)
                | Self::CampaignNotLive(_)
                | Self::SubmissionNotPending(_)
                | Self::InsufficientFollowers { .. }
                | Self::InsufficientPendingEarnings
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::UserNotFound("1234".to_string());
        assert_eq!(err.code(), "UNKNOWN_USER");

        let err = DomainError::ProfileBanned {
            reason: "spam".to_string(),
        };
        assert_eq!(err.code(), "PROFILE_BANNED");
    }

    #[test]
    fn test_ban_conflict_carries_reason() {
        let err = DomainError::ProfileBanned {
            reason: "spam".to_string(),
        };
        assert!(err.is_conflict());
        assert!(err.to_string().contains("spam"));
    }

    #[test]
    fn test_classification_is_disjoint() {
        let samples = [
            DomainError::SubmissionNotFound(1),
            DomainError::InvalidWallet,
            DomainError::VideoAlreadySubmitted,
            DomainError::CampaignNotLive("summer".to_string()),
            DomainError::DatabaseError("boom".to_string()),
        ];
        for err in samples {
            let hits = [
                err.is_not_found(),
                err.is_validation(),
                err.is_conflict(),
                err.is_precondition(),
            ]
            .iter()
            .filter(|b| **b)
            .count();
            assert!(hits <= 1, "{err} classified more than once");
        }
    }
}
