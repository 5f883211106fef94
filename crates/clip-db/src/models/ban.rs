//! Banned profile database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the banned_profiles table
#[derive(Debug, Clone, FromRow)]
pub struct BannedProfileModel {
    pub id: i64,
    pub platform: String,
    pub profile_url: String,
    pub normalized_id: String,
    pub reason: String,
    pub banned_by: String,
    pub banned_at: DateTime<Utc>,
}
