//! Campaign database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the campaigns table
#[derive(Debug, Clone, FromRow)]
pub struct CampaignModel {
    pub id: i64,
    pub name: String,
    pub platform: String,
    pub total_budget: i64,
    pub rate_per_100k: i64,
    pub rate_per_1m: i64,
    pub min_views: i64,
    pub min_followers: i64,
    pub max_earn_per_creator: i64,
    pub max_earn_per_post: i64,
    pub status: String,
    pub created_by: String,
    pub ended_at: Option<DateTime<Utc>>,
    pub remaining_budget: i64,
    pub created_at: DateTime<Utc>,
}
