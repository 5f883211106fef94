//! # clip-core
//!
//! Domain layer for the clipping creator-payout program: entities, value
//! objects, URL normalization, repository ports, and domain errors. This
//! crate has zero dependencies on infrastructure (database, chat surface,
//! async runtime).

pub mod entities;
pub mod error;
pub mod normalize;
pub mod traits;
pub mod validate;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    ActivityLog, BannedProfile, Campaign, CampaignStatus, Payout, PayoutStatus, ProfileStatus,
    RateCard, SocialProfile, Submission, SubmissionStatus, User, ViewHistory,
};
pub use error::DomainError;
pub use normalize::{normalize_profile_id, normalize_video_id};
pub use traits::{
    clamp_view_count, AccrualGrant, ActivityLogRepository, BanRepository, CampaignRepository,
    PayoutRepository, PendingSubmission, ProfileRepository, RepoResult, SubmissionRepository,
    TrackedSubmission, TrackingRepository, UserRepository, UserStats, ViewHistoryRepository,
    ViewSource,
};
pub use value_objects::{Platform, UsdCents};
