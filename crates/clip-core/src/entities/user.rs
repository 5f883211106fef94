//! User entity - a creator account keyed by their Discord identity

use chrono::{DateTime, Utc};

use crate::value_objects::UsdCents;

/// Creator account. Created on first interaction, never deleted.
///
/// Money invariant: `total_earnings == paid_earnings + pending_earnings`
/// after every mutation. Both mutation paths (accrual grants and payout
/// settlement) move the pair in lockstep inside one atomic store update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub discord_id: String,
    pub username: String,
    pub usdt_wallet: Option<String>,
    pub total_earnings: UsdCents,
    pub paid_earnings: UsdCents,
    pub pending_earnings: UsdCents,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a fresh account with zeroed earnings
    #[must_use]
    pub fn new(discord_id: String, username: String) -> Self {
        Self {
            discord_id,
            username,
            usdt_wallet: None,
            total_earnings: UsdCents::ZERO,
            paid_earnings: UsdCents::ZERO,
            pending_earnings: UsdCents::ZERO,
            created_at: Utc::now(),
        }
    }

    /// Check the earnings-conservation invariant
    #[inline]
    #[must_use]
    pub fn earnings_balanced(&self) -> bool {
        self.total_earnings == self.paid_earnings + self.pending_earnings
    }

    /// Whether a payout address has been configured
    #[inline]
    #[must_use]
    pub fn has_wallet(&self) -> bool {
        self.usdt_wallet.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_balanced() {
        let user = User::new("1234".to_string(), "creator".to_string());
        assert!(user.earnings_balanced());
        assert!(!user.has_wallet());
    }

    #[test]
    fn test_balance_check_detects_drift() {
        let mut user = User::new("1234".to_string(), "creator".to_string());
        user.total_earnings = UsdCents::new(500);
        user.pending_earnings = UsdCents::new(500);
        assert!(user.earnings_balanced());

        user.paid_earnings = UsdCents::new(100);
        assert!(!user.earnings_balanced());
    }
}
