//! Payout entity - append-only manual settlement ledger

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

use super::profile::UnknownStatus;
use crate::value_objects::UsdCents;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayoutStatus {
    Pending,
    Paid,
}

impl PayoutStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
        }
    }
}

impl fmt::Display for PayoutStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayoutStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// One manual settlement event. Recording it moves `amount` from the user's
/// pending earnings to paid earnings in the same transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payout {
    pub id: i64,
    pub discord_id: String,
    pub campaign_id: i64,
    pub amount: UsdCents,
    pub status: PayoutStatus,
    pub usdt_tx_hash: Option<String>,
    pub paid_by: Option<String>,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Payout {
    /// A settled payout, stamped now
    #[must_use]
    pub fn paid(
        discord_id: String,
        campaign_id: i64,
        amount: UsdCents,
        usdt_tx_hash: String,
        paid_by: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            discord_id,
            campaign_id,
            amount,
            status: PayoutStatus::Paid,
            usdt_tx_hash: Some(usdt_tx_hash),
            paid_by: Some(paid_by),
            paid_at: Some(now),
            created_at: now,
        }
    }
}
