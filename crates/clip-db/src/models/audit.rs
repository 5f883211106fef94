//! Audit database models: activity log and view history

use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::FromRow;

/// Database model for the activity_logs table
#[derive(Debug, Clone, FromRow)]
pub struct ActivityLogModel {
    pub id: i64,
    pub action_type: String,
    pub performed_by: String,
    pub target_user: Option<String>,
    pub details: Option<Value>,
    pub timestamp: DateTime<Utc>,
}

/// Database model for the view_history table
#[derive(Debug, Clone, FromRow)]
pub struct ViewHistoryModel {
    pub id: i64,
    pub submission_id: i64,
    pub views: i64,
    pub recorded_at: DateTime<Utc>,
}
