//! Working-set row mapper

use clip_core::traits::TrackedSubmission;
use clip_core::value_objects::UsdCents;

use super::common::parse_platform;
use crate::models::TrackedSubmissionModel;

impl From<TrackedSubmissionModel> for TrackedSubmission {
    fn from(model: TrackedSubmissionModel) -> Self {
        TrackedSubmission {
            submission_id: model.submission_id,
            discord_id: model.discord_id,
            campaign_id: model.campaign_id,
            video_url: model.video_url,
            platform: parse_platform(&model.platform),
            current_views: model.current_views,
            earnings: UsdCents::new(model.earnings),
            rate_per_100k: UsdCents::new(model.rate_per_100k),
            rate_per_1m: UsdCents::new(model.rate_per_1m),
            max_earn_per_post: UsdCents::new(model.max_earn_per_post),
            max_earn_per_creator: UsdCents::new(model.max_earn_per_creator),
            remaining_budget: UsdCents::new(model.remaining_budget),
            creator_campaign_earnings: UsdCents::new(model.creator_campaign_earnings),
        }
    }
}
