//! Accrual working-set row model

use sqlx::FromRow;

/// One row of the tracking working set: a tracked submission joined with its
/// campaign economics and the creator's summed earnings in that campaign.
#[derive(Debug, Clone, FromRow)]
pub struct TrackedSubmissionModel {
    pub submission_id: i64,
    pub discord_id: String,
    pub campaign_id: i64,
    pub video_url: String,
    pub platform: String,
    pub current_views: i64,
    pub earnings: i64,
    pub rate_per_100k: i64,
    pub rate_per_1m: i64,
    pub max_earn_per_post: i64,
    pub max_earn_per_creator: i64,
    pub remaining_budget: i64,
    pub creator_campaign_earnings: i64,
}
