//! Submission entity <-> model mappers

use clip_core::entities::Submission;
use clip_core::traits::PendingSubmission;
use clip_core::value_objects::UsdCents;

use super::common::{parse_platform, parse_submission_status};
use crate::models::{PendingSubmissionModel, SubmissionModel};

impl From<SubmissionModel> for Submission {
    fn from(model: SubmissionModel) -> Self {
        Submission {
            id: model.id,
            discord_id: model.discord_id,
            campaign_id: model.campaign_id,
            social_profile_id: model.social_profile_id,
            video_url: model.video_url,
            normalized_video_id: model.normalized_video_id,
            platform: parse_platform(&model.platform),
            starting_views: model.starting_views,
            current_views: model.current_views,
            earnings: UsdCents::new(model.earnings),
            status: parse_submission_status(&model.status),
            tracking: model.tracking,
            submitted_at: model.submitted_at,
            approved_at: model.approved_at,
            approved_by: model.approved_by,
            message_id: model.message_id,
        }
    }
}

impl From<PendingSubmissionModel> for PendingSubmission {
    fn from(model: PendingSubmissionModel) -> Self {
        PendingSubmission {
            submission: Submission::from(model.submission),
            username: model.username,
            campaign_name: model.campaign_name,
            profile_url: model.profile_url,
        }
    }
}
