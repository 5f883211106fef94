//! Profile service
//!
//! Handles profile registration, the staff review queue, and the global
//! blocklist. All lookups key on the normalized profile id, so cosmetic URL
//! variants of the same account collapse into one identity.

use serde_json::json;
use tracing::{info, instrument};

use clip_core::entities::{ActivityLog, BannedProfile, ProfileStatus, SocialProfile};
use clip_core::normalize::normalize_profile_id;
use clip_core::validate::validate_profile_url;
use clip_core::value_objects::Platform;
use clip_core::DomainError;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::user::UserService;

/// Outcome of a ban: how wide the cascade reached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BanOutcome {
    pub ban_id: i64,
    /// Profiles forced to `banned`
    pub profiles_touched: u64,
    /// Submissions whose tracking was forced off
    pub submissions_stopped: u64,
}

/// Profile service
pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    /// Create a new ProfileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a social profile for review
    #[instrument(skip(self, profile_url))]
    pub async fn register(
        &self,
        discord_id: &str,
        username: &str,
        platform: Platform,
        profile_url: &str,
    ) -> ServiceResult<SocialProfile> {
        UserService::new(self.ctx).ensure(discord_id, username).await?;

        validate_profile_url(platform, profile_url)?;
        let normalized_id = normalize_profile_id(platform, profile_url)
            .ok_or(DomainError::UnrecognizedUrl(platform))?;

        // Blocklist wins over everything, including re-registration attempts
        if let Some(ban) = self.ctx.ban_repo().find_by_normalized_id(&normalized_id).await? {
            return Err(DomainError::ProfileBanned { reason: ban.reason }.into());
        }

        if self
            .ctx
            .profile_repo()
            .find_by_owner_and_url(discord_id, profile_url)
            .await?
            .is_some()
        {
            return Err(DomainError::ProfileAlreadyRegistered.into());
        }
        if self
            .ctx
            .profile_repo()
            .find_by_normalized_id(&normalized_id)
            .await?
            .is_some()
        {
            return Err(DomainError::ProfileAlreadyRegistered.into());
        }

        let mut profile = SocialProfile::pending(
            discord_id.to_string(),
            platform,
            profile_url.to_string(),
            normalized_id,
        );
        profile.id = self.ctx.profile_repo().create(&profile).await?;

        self.ctx
            .activity_repo()
            .append(
                &ActivityLog::new("PROFILE_REGISTERED", discord_id)
                    .target(discord_id)
                    .details(json!({
                        "profile_id": profile.id,
                        "platform": platform.as_str(),
                        "normalized_id": profile.normalized_id,
                    })),
            )
            .await?;

        info!(
            profile_id = profile.id,
            discord_id = %discord_id,
            platform = %platform,
            "Profile registered"
        );
        Ok(profile)
    }

    /// Approve a pending profile
    #[instrument(skip(self))]
    pub async fn approve(&self, profile_id: i64, staff_id: &str) -> ServiceResult<SocialProfile> {
        let profile = self
            .ctx
            .profile_repo()
            .find_by_id(profile_id)
            .await?
            .ok_or(DomainError::ProfileNotFound(profile_id))?;

        let approved = self
            .ctx
            .profile_repo()
            .approve(profile_id, staff_id, chrono::Utc::now())
            .await?;
        if !approved {
            return Err(DomainError::ProfileNotPending(profile_id).into());
        }

        self.ctx
            .activity_repo()
            .append(
                &ActivityLog::new("PROFILE_APPROVED", staff_id)
                    .target(&profile.discord_id)
                    .details(json!({ "profile_id": profile_id })),
            )
            .await?;

        info!(profile_id, staff_id = %staff_id, "Profile approved");
        self.ctx
            .profile_repo()
            .find_by_id(profile_id)
            .await?
            .ok_or_else(|| DomainError::ProfileNotFound(profile_id).into())
    }

    /// Reject a pending profile with a reason
    #[instrument(skip(self, reason))]
    pub async fn reject(
        &self,
        profile_id: i64,
        staff_id: &str,
        reason: &str,
    ) -> ServiceResult<SocialProfile> {
        let profile = self
            .ctx
            .profile_repo()
            .find_by_id(profile_id)
            .await?
            .ok_or(DomainError::ProfileNotFound(profile_id))?;

        let rejected = self.ctx.profile_repo().reject(profile_id, reason).await?;
        if !rejected {
            return Err(DomainError::ProfileNotPending(profile_id).into());
        }

        self.ctx
            .activity_repo()
            .append(
                &ActivityLog::new("PROFILE_REJECTED", staff_id)
                    .target(&profile.discord_id)
                    .details(json!({ "profile_id": profile_id, "reason": reason })),
            )
            .await?;

        info!(profile_id, staff_id = %staff_id, "Profile rejected");
        self.ctx
            .profile_repo()
            .find_by_id(profile_id)
            .await?
            .ok_or_else(|| DomainError::ProfileNotFound(profile_id).into())
    }

    /// Ban a profile URL globally.
    ///
    /// Works whether or not the profile was ever registered; cascades to any
    /// registered profiles with the same identity and stops tracking on all
    /// of their submissions.
    #[instrument(skip(self, profile_url, reason))]
    pub async fn ban(
        &self,
        platform: Platform,
        profile_url: &str,
        reason: &str,
        staff_id: &str,
    ) -> ServiceResult<BanOutcome> {
        let normalized_id = normalize_profile_id(platform, profile_url)
            .ok_or(DomainError::UnrecognizedUrl(platform))?;

        if let Some(existing) = self.ctx.ban_repo().find_by_normalized_id(&normalized_id).await? {
            return Err(DomainError::ProfileBanned {
                reason: existing.reason,
            }
            .into());
        }

        let ban = BannedProfile::new(
            platform,
            profile_url.to_string(),
            normalized_id.clone(),
            reason.to_string(),
            staff_id.to_string(),
        );
        let ban_id = self.ctx.ban_repo().insert(&ban).await?;

        let profiles_touched = self
            .ctx
            .profile_repo()
            .set_status_by_normalized_id(&normalized_id, ProfileStatus::Banned)
            .await?;
        let submissions_stopped = self
            .ctx
            .submission_repo()
            .stop_tracking_for_profile(&normalized_id)
            .await?;

        self.ctx
            .activity_repo()
            .append(
                &ActivityLog::new("PROFILE_BANNED", staff_id).details(json!({
                    "ban_id": ban_id,
                    "normalized_id": normalized_id,
                    "reason": reason,
                    "profiles_touched": profiles_touched,
                    "submissions_stopped": submissions_stopped,
                })),
            )
            .await?;

        info!(
            ban_id,
            normalized_id = %normalized_id,
            profiles_touched,
            submissions_stopped,
            "Profile banned"
        );
        Ok(BanOutcome {
            ban_id,
            profiles_touched,
            submissions_stopped,
        })
    }

    /// Lift a ban. Affected profiles fall back to `rejected`; they must pass
    /// review again before accruing, tracking is not resumed retroactively.
    #[instrument(skip(self))]
    pub async fn unban(&self, ban_id: i64, staff_id: &str) -> ServiceResult<()> {
        let ban = self
            .ctx
            .ban_repo()
            .find_by_id(ban_id)
            .await?
            .ok_or(DomainError::BanNotFound(ban_id))?;

        if !self.ctx.ban_repo().delete(ban_id).await? {
            return Err(DomainError::BanNotFound(ban_id).into());
        }
        self.ctx
            .profile_repo()
            .set_status_by_normalized_id(&ban.normalized_id, ProfileStatus::Rejected)
            .await?;

        self.ctx
            .activity_repo()
            .append(
                &ActivityLog::new("PROFILE_UNBANNED", staff_id).details(json!({
                    "ban_id": ban_id,
                    "normalized_id": ban.normalized_id,
                })),
            )
            .await?;

        info!(ban_id, staff_id = %staff_id, "Ban lifted");
        Ok(())
    }

    /// All profiles registered by one user
    #[instrument(skip(self))]
    pub async fn for_user(&self, discord_id: &str) -> ServiceResult<Vec<SocialProfile>> {
        Ok(self.ctx.profile_repo().find_by_owner(discord_id).await?)
    }

    /// The staff review queue
    #[instrument(skip(self))]
    pub async fn pending_queue(&self, limit: i64) -> ServiceResult<Vec<SocialProfile>> {
        Ok(self.ctx.profile_repo().pending(limit).await?)
    }

    /// Most recent blocklist entries
    #[instrument(skip(self))]
    pub async fn bans(&self, limit: i64) -> ServiceResult<Vec<BannedProfile>> {
        Ok(self.ctx.ban_repo().list(limit).await?)
    }
}
