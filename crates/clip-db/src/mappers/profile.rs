//! Social profile entity <-> model mapper

use clip_core::entities::SocialProfile;

use super::common::{parse_platform, parse_profile_status};
use crate::models::SocialProfileModel;

impl From<SocialProfileModel> for SocialProfile {
    fn from(model: SocialProfileModel) -> Self {
        SocialProfile {
            id: model.id,
            discord_id: model.discord_id,
            platform: parse_platform(&model.platform),
            profile_url: model.profile_url,
            normalized_id: model.normalized_id,
            status: parse_profile_status(&model.status),
            followers: model.followers,
            tier: model.tier,
            verified_at: model.verified_at,
            verified_by: model.verified_by,
            rejection_reason: model.rejection_reason,
            created_at: model.created_at,
        }
    }
}
