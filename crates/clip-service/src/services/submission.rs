//! Submission service
//!
//! Handles video submission with its full precondition chain, and the staff
//! review queue. A submission anchors its view count at submit time; only
//! growth beyond that anchor ever pays.

use serde_json::json;
use tracing::{info, instrument, warn};

use clip_core::entities::{ActivityLog, Submission, ViewHistory};
use clip_core::normalize::normalize_video_id;
use clip_core::traits::{clamp_view_count, PendingSubmission};
use clip_core::validate::validate_video_url;
use clip_core::DomainError;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::user::UserService;

/// Submission service
pub struct SubmissionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SubmissionService<'a> {
    /// Create a new SubmissionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Submit a video to a campaign.
    ///
    /// Precondition chain, in order: campaign exists and is live, URL valid
    /// and recognizable, video not already submitted anywhere, creator has an
    /// approved profile on the campaign's platform, profile not blocklisted,
    /// follower floor met.
    #[instrument(skip(self, video_url))]
    pub async fn submit(
        &self,
        discord_id: &str,
        username: &str,
        campaign_name: &str,
        video_url: &str,
    ) -> ServiceResult<Submission> {
        UserService::new(self.ctx).ensure(discord_id, username).await?;

        let campaign = self
            .ctx
            .campaign_repo()
            .find_by_name(campaign_name)
            .await?
            .ok_or_else(|| DomainError::CampaignNotFound(campaign_name.to_string()))?;
        if !campaign.is_live() {
            return Err(DomainError::CampaignNotLive(campaign.name).into());
        }

        validate_video_url(campaign.platform, video_url)?;
        let normalized_video_id = normalize_video_id(campaign.platform, video_url)
            .ok_or(DomainError::UnrecognizedUrl(campaign.platform))?;

        if self
            .ctx
            .submission_repo()
            .find_by_video_id(&normalized_video_id)
            .await?
            .is_some()
        {
            return Err(DomainError::VideoAlreadySubmitted.into());
        }

        let profile = self
            .ctx
            .profile_repo()
            .find_by_owner(discord_id)
            .await?
            .into_iter()
            .find(|p| p.platform == campaign.platform && p.is_approved())
            .ok_or(DomainError::ProfileNotApproved)?;

        if let Some(ban) = self
            .ctx
            .ban_repo()
            .find_by_normalized_id(&profile.normalized_id)
            .await?
        {
            return Err(DomainError::ProfileBanned { reason: ban.reason }.into());
        }

        if profile.followers < campaign.min_followers {
            return Err(DomainError::InsufficientFollowers {
                required: campaign.min_followers,
                actual: profile.followers,
            }
            .into());
        }

        // Anchor the view count now; an unavailable source anchors at zero
        // rather than blocking the submission
        let starting_views = match self
            .ctx
            .view_source()
            .fetch_view_count(video_url, campaign.platform)
            .await
        {
            Some(views) => clamp_view_count(views),
            None => {
                warn!(video_url = %video_url, "View source unavailable at submit, anchoring at 0");
                0
            }
        };

        let mut submission = Submission::pending(
            discord_id.to_string(),
            campaign.id,
            profile.id,
            video_url.to_string(),
            normalized_video_id,
            campaign.platform,
            starting_views,
        );
        submission.id = self.ctx.submission_repo().create(&submission).await?;

        self.ctx
            .activity_repo()
            .append(
                &ActivityLog::new("VIDEO_SUBMITTED", discord_id)
                    .target(discord_id)
                    .details(json!({
                        "submission_id": submission.id,
                        "campaign_id": campaign.id,
                        "starting_views": starting_views,
                    })),
            )
            .await?;

        info!(
            submission_id = submission.id,
            campaign = %campaign.name,
            starting_views,
            "Video submitted"
        );
        Ok(submission)
    }

    /// Approve a pending submission; turns tracking on
    #[instrument(skip(self))]
    pub async fn approve(&self, submission_id: i64, staff_id: &str) -> ServiceResult<Submission> {
        let submission = self
            .ctx
            .submission_repo()
            .find_by_id(submission_id)
            .await?
            .ok_or(DomainError::SubmissionNotFound(submission_id))?;

        let approved = self
            .ctx
            .submission_repo()
            .approve(submission_id, staff_id, chrono::Utc::now())
            .await?;
        if !approved {
            return Err(DomainError::SubmissionNotPending(submission_id).into());
        }

        self.ctx
            .activity_repo()
            .append(
                &ActivityLog::new("VIDEO_APPROVED", staff_id)
                    .target(&submission.discord_id)
                    .details(json!({ "submission_id": submission_id })),
            )
            .await?;

        info!(submission_id, staff_id = %staff_id, "Submission approved");
        self.ctx
            .submission_repo()
            .find_by_id(submission_id)
            .await?
            .ok_or_else(|| DomainError::SubmissionNotFound(submission_id).into())
    }

    /// Reject a pending submission
    #[instrument(skip(self))]
    pub async fn reject(&self, submission_id: i64, staff_id: &str) -> ServiceResult<Submission> {
        let submission = self
            .ctx
            .submission_repo()
            .find_by_id(submission_id)
            .await?
            .ok_or(DomainError::SubmissionNotFound(submission_id))?;

        let rejected = self.ctx.submission_repo().reject(submission_id).await?;
        if !rejected {
            return Err(DomainError::SubmissionNotPending(submission_id).into());
        }

        self.ctx
            .activity_repo()
            .append(
                &ActivityLog::new("VIDEO_REJECTED", staff_id)
                    .target(&submission.discord_id)
                    .details(json!({ "submission_id": submission_id })),
            )
            .await?;

        info!(submission_id, staff_id = %staff_id, "Submission rejected");
        self.ctx
            .submission_repo()
            .find_by_id(submission_id)
            .await?
            .ok_or_else(|| DomainError::SubmissionNotFound(submission_id).into())
    }

    /// The staff review queue, with display fields joined in
    #[instrument(skip(self))]
    pub async fn pending_queue(&self, limit: i64) -> ServiceResult<Vec<PendingSubmission>> {
        Ok(self.ctx.submission_repo().pending(limit).await?)
    }

    /// Record the surface message posted for a submission
    #[instrument(skip(self))]
    pub async fn set_message_id(&self, submission_id: i64, message_id: &str) -> ServiceResult<()> {
        self.ctx
            .submission_repo()
            .set_message_id(submission_id, message_id)
            .await?;
        Ok(())
    }

    /// Recent view observations for one submission, newest first
    #[instrument(skip(self))]
    pub async fn view_history(
        &self,
        submission_id: i64,
        limit: i64,
    ) -> ServiceResult<Vec<ViewHistory>> {
        if self
            .ctx
            .submission_repo()
            .find_by_id(submission_id)
            .await?
            .is_none()
        {
            return Err(DomainError::SubmissionNotFound(submission_id).into());
        }
        Ok(self
            .ctx
            .view_history_repo()
            .for_submission(submission_id, limit)
            .await?)
    }
}
