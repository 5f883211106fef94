//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub discord_id: String,
    pub username: String,
    pub usdt_wallet: Option<String>,
    pub total_earnings: i64,
    pub paid_earnings: i64,
    pub pending_earnings: i64,
    pub created_at: DateTime<Utc>,
}
