//! Ports - repository and collaborator traits

mod repositories;
mod view_source;

pub use repositories::{
    AccrualGrant, ActivityLogRepository, BanRepository, CampaignRepository, PayoutRepository,
    PendingSubmission, ProfileRepository, RepoResult, SubmissionRepository, TrackedSubmission,
    TrackingRepository, UserRepository, UserStats, ViewHistoryRepository,
};
pub use view_source::{clamp_view_count, ViewSource};
