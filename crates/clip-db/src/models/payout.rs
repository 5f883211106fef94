//! Payout database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the payouts table
#[derive(Debug, Clone, FromRow)]
pub struct PayoutModel {
    pub id: i64,
    pub discord_id: String,
    pub campaign_id: i64,
    pub amount: i64,
    pub status: String,
    pub usdt_tx_hash: Option<String>,
    pub paid_by: Option<String>,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
