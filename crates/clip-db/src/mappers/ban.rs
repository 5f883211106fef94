//! Banned profile entity <-> model mapper

use clip_core::entities::BannedProfile;

use super::common::parse_platform;
use crate::models::BannedProfileModel;

impl From<BannedProfileModel> for BannedProfile {
    fn from(model: BannedProfileModel) -> Self {
        BannedProfile {
            id: model.id,
            platform: parse_platform(&model.platform),
            profile_url: model.profile_url,
            normalized_id: model.normalized_id,
            reason: model.reason,
            banned_by: model.banned_by,
            banned_at: model.banned_at,
        }
    }
}
