//! Repository traits (ports) - the Store's query/mutation contract
//!
//! The domain layer defines what it needs; the infrastructure layer provides
//! the implementation. No component holds a private cache of mutable entity
//! state - everything goes through these traits.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{
    ActivityLog, BannedProfile, Campaign, Payout, ProfileStatus, SocialProfile, Submission,
    User, ViewHistory,
};
use crate::error::DomainError;
use crate::value_objects::{Platform, UsdCents};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

/// Aggregate statistics for one creator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserStats {
    pub total_submissions: i64,
    pub approved_submissions: i64,
    pub campaigns_participated: i64,
    pub total_views: i64,
    pub total_earned: UsdCents,
    pub last_submission: Option<DateTime<Utc>>,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by Discord id
    async fn find_by_discord_id(&self, discord_id: &str) -> RepoResult<Option<User>>;

    /// Create the account row on first interaction; returns true if created
    async fn create_if_absent(&self, discord_id: &str, username: &str) -> RepoResult<bool>;

    /// Set the payout wallet address
    async fn set_wallet(&self, discord_id: &str, wallet: &str) -> RepoResult<()>;

    /// Aggregate submission/earnings statistics
    async fn stats(&self, discord_id: &str) -> RepoResult<UserStats>;

    /// Names of live campaigns the user has approved submissions in
    async fn active_campaigns(&self, discord_id: &str) -> RepoResult<Vec<String>>;
}

// ============================================================================
// Profile Repository
// ============================================================================

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Insert a pending registration, returning the new id
    async fn create(&self, profile: &SocialProfile) -> RepoResult<i64>;

    /// Find profile by id
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<SocialProfile>>;

    /// Find profile by normalized id (global, any owner)
    async fn find_by_normalized_id(&self, normalized_id: &str)
        -> RepoResult<Option<SocialProfile>>;

    /// Find a profile by its owner and surface URL
    async fn find_by_owner_and_url(
        &self,
        discord_id: &str,
        profile_url: &str,
    ) -> RepoResult<Option<SocialProfile>>;

    /// All profiles registered by one user, newest first
    async fn find_by_owner(&self, discord_id: &str) -> RepoResult<Vec<SocialProfile>>;

    /// Pending review queue, newest first
    async fn pending(&self, limit: i64) -> RepoResult<Vec<SocialProfile>>;

    /// Approve a pending profile, stamping verifier and time.
    /// Guarded on `status = pending`; returns false if the guard failed.
    async fn approve(&self, id: i64, approved_by: &str, at: DateTime<Utc>) -> RepoResult<bool>;

    /// Reject a pending profile with a reason; guarded like `approve`
    async fn reject(&self, id: i64, reason: &str) -> RepoResult<bool>;

    /// Force every profile with this normalized id to the given status;
    /// returns the number of rows touched
    async fn set_status_by_normalized_id(
        &self,
        normalized_id: &str,
        status: ProfileStatus,
    ) -> RepoResult<u64>;
}

// ============================================================================
// Ban Repository
// ============================================================================

#[async_trait]
pub trait BanRepository: Send + Sync {
    /// Look up the blocklist by normalized id
    async fn find_by_normalized_id(&self, normalized_id: &str)
        -> RepoResult<Option<BannedProfile>>;

    /// Look up a ban row by id
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<BannedProfile>>;

    /// Most recent bans first
    async fn list(&self, limit: i64) -> RepoResult<Vec<BannedProfile>>;

    /// Insert a blocklist row, returning the new id
    async fn insert(&self, ban: &BannedProfile) -> RepoResult<i64>;

    /// Delete a ban row; returns false if it did not exist
    async fn delete(&self, id: i64) -> RepoResult<bool>;
}

// ============================================================================
// Campaign Repository
// ============================================================================

#[async_trait]
pub trait CampaignRepository: Send + Sync {
    /// Insert a new live campaign, returning the new id
    async fn create(&self, campaign: &Campaign) -> RepoResult<i64>;

    /// Find campaign by unique name
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Campaign>>;

    /// Find campaign by id
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Campaign>>;

    /// All campaigns, live before ended, newest first within each group
    async fn list_all(&self) -> RepoResult<Vec<Campaign>>;

    /// Live campaigns whose name contains the term
    async fn search_live(&self, term: &str, limit: i64) -> RepoResult<Vec<Campaign>>;

    /// End a live campaign, stamping `ended_at`.
    /// Guarded on `status = live`; returns false if the guard failed.
    async fn end(&self, id: i64, at: DateTime<Utc>) -> RepoResult<bool>;
}

// ============================================================================
// Submission Repository
// ============================================================================

/// Pending submission joined with display fields for the review queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub submission: Submission,
    pub username: String,
    pub campaign_name: String,
    pub profile_url: String,
}

#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Insert a pending submission, returning the new id
    async fn create(&self, submission: &Submission) -> RepoResult<i64>;

    /// Find submission by id
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Submission>>;

    /// Find submission by normalized video id (global duplicate check)
    async fn find_by_video_id(&self, normalized_video_id: &str)
        -> RepoResult<Option<Submission>>;

    /// Pending review queue, newest first
    async fn pending(&self, limit: i64) -> RepoResult<Vec<PendingSubmission>>;

    /// Approve: status=approved, tracking=true, stamps approver and time.
    /// Guarded on `status = pending`; returns false if the guard failed.
    async fn approve(&self, id: i64, approved_by: &str, at: DateTime<Utc>) -> RepoResult<bool>;

    /// Reject a pending submission; guarded like `approve`
    async fn reject(&self, id: i64) -> RepoResult<bool>;

    /// Force tracking off for every submission of a profile (by normalized id);
    /// returns the number of rows touched
    async fn stop_tracking_for_profile(&self, normalized_id: &str) -> RepoResult<u64>;

    /// Force tracking off for every submission of a campaign
    async fn stop_tracking_for_campaign(&self, campaign_id: i64) -> RepoResult<u64>;

    /// Record the surface message posted for this submission
    async fn set_message_id(&self, id: i64, message_id: &str) -> RepoResult<()>;
}

// ============================================================================
// Tracking Repository (accrual engine's store contract)
// ============================================================================

/// One row of the accrual working set: a tracked submission joined with the
/// campaign economics and the creator's summed earnings in that campaign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedSubmission {
    pub submission_id: i64,
    pub discord_id: String,
    pub campaign_id: i64,
    pub video_url: String,
    pub platform: Platform,
    pub current_views: i64,
    pub earnings: UsdCents,
    pub rate_per_100k: UsdCents,
    pub rate_per_1m: UsdCents,
    pub max_earn_per_post: UsdCents,
    pub max_earn_per_creator: UsdCents,
    pub remaining_budget: UsdCents,
    /// Sum of this creator's earnings across all their submissions in the
    /// same campaign, including this one
    pub creator_campaign_earnings: UsdCents,
}

/// The single atomic unit of an accrual grant: all five mutations (submission
/// views/earnings, tracking flag on cap, campaign budget, user totals, view
/// history) succeed or none do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccrualGrant {
    pub submission_id: i64,
    pub campaign_id: i64,
    pub discord_id: String,
    pub new_views: i64,
    pub delta: UsdCents,
    /// Per-post cap; reaching it turns tracking off in the same update
    pub post_cap: UsdCents,
}

#[async_trait]
pub trait TrackingRepository: Send + Sync {
    /// Select the working set: tracking AND approved AND campaign live AND
    /// profile not banned
    async fn working_set(&self) -> RepoResult<Vec<TrackedSubmission>>;

    /// Partial-depletion stop: zero the campaign's remaining budget and stop
    /// tracking the triggering submission
    async fn deplete_budget(&self, campaign_id: i64, submission_id: i64) -> RepoResult<()>;

    /// Apply one grant atomically. Guarded updates enforce tracking still on,
    /// view monotonicity, and sufficient budget; returns false (and writes
    /// nothing) if any guard failed - the next tick retries.
    async fn apply_accrual(&self, grant: &AccrualGrant) -> RepoResult<bool>;
}

// ============================================================================
// Payout Repository
// ============================================================================

#[async_trait]
pub trait PayoutRepository: Send + Sync {
    /// Append the settlement row and move the amount from the user's pending
    /// to paid earnings, in one transaction guarded on
    /// `pending_earnings >= amount`. Fails with `InsufficientPendingEarnings`
    /// (writing nothing) if the guard does not hold. Returns the new payout id.
    async fn record(&self, payout: &Payout) -> RepoResult<i64>;

    /// All payouts recorded for a user, newest first
    async fn find_by_user(&self, discord_id: &str) -> RepoResult<Vec<Payout>>;
}

// ============================================================================
// Audit Repositories
// ============================================================================

#[async_trait]
pub trait ActivityLogRepository: Send + Sync {
    /// Append an audit row
    async fn append(&self, entry: &ActivityLog) -> RepoResult<()>;

    /// Retention sweep; returns the number of rows deleted
    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> RepoResult<u64>;
}

#[async_trait]
pub trait ViewHistoryRepository: Send + Sync {
    /// Recent observations for one submission, newest first
    async fn for_submission(&self, submission_id: i64, limit: i64)
        -> RepoResult<Vec<ViewHistory>>;

    /// Retention sweep; returns the number of rows deleted
    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> RepoResult<u64>;
}
