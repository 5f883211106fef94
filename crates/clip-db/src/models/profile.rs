//! Social profile database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the social_profiles table
#[derive(Debug, Clone, FromRow)]
pub struct SocialProfileModel {
    pub id: i64,
    pub discord_id: String,
    pub platform: String,
    pub profile_url: String,
    pub normalized_id: String,
    pub status: String,
    pub followers: i64,
    pub tier: Option<String>,
    pub verified_at: Option<DateTime<Utc>>,
    pub verified_by: Option<String>,
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}
