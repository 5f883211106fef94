//! Submission database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the submissions table
#[derive(Debug, Clone, FromRow)]
pub struct SubmissionModel {
    pub id: i64,
    pub discord_id: String,
    pub campaign_id: i64,
    pub social_profile_id: i64,
    pub video_url: String,
    pub normalized_video_id: String,
    pub platform: String,
    pub starting_views: i64,
    pub current_views: i64,
    pub earnings: i64,
    pub status: String,
    pub tracking: bool,
    pub submitted_at: DateTime<Utc>,
    pub approved_at: Option<DateTime<Utc>>,
    pub approved_by: Option<String>,
    pub message_id: Option<String>,
}

/// Review-queue row: submission joined with display fields
#[derive(Debug, Clone, FromRow)]
pub struct PendingSubmissionModel {
    #[sqlx(flatten)]
    pub submission: SubmissionModel,
    pub username: String,
    pub campaign_name: String,
    pub profile_url: String,
}
