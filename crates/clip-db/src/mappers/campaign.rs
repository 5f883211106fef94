//! Campaign entity <-> model mapper

use clip_core::entities::Campaign;
use clip_core::value_objects::UsdCents;

use super::common::{parse_campaign_status, parse_platform};
use crate::models::CampaignModel;

impl From<CampaignModel> for Campaign {
    fn from(model: CampaignModel) -> Self {
        Campaign {
            id: model.id,
            name: model.name,
            platform: parse_platform(&model.platform),
            total_budget: UsdCents::new(model.total_budget),
            rate_per_100k: UsdCents::new(model.rate_per_100k),
            rate_per_1m: UsdCents::new(model.rate_per_1m),
            min_views: model.min_views,
            min_followers: model.min_followers,
            max_earn_per_creator: UsdCents::new(model.max_earn_per_creator),
            max_earn_per_post: UsdCents::new(model.max_earn_per_post),
            status: parse_campaign_status(&model.status),
            created_by: model.created_by,
            ended_at: model.ended_at,
            remaining_budget: UsdCents::new(model.remaining_budget),
            created_at: model.created_at,
        }
    }
}
